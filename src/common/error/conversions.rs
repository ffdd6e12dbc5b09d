//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from layer
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            // Keep IO failures distinguishable at the process boundary
            OoxmlError::Io(e) => Error::Io(e),
            other => Error::Ooxml(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_unwrapped() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = OoxmlError::Io(io).into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_xml_error_wrapped() {
        let err: Error = OoxmlError::Xml("bad".to_string()).into();
        assert!(matches!(err, Error::Ooxml(OoxmlError::Xml(_))));
        assert_eq!(err.to_string(), "Presentation error: XML error: bad");
    }
}
