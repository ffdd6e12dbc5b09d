/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::package::PackageWriter;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::MutableSlide;

/// First ID handed out in `p:sldIdLst` (IDs below 256 are reserved).
const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions and document title, and
/// serialise the whole presentation to a `.pptx` package.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title written to the core properties
    title: Option<String>,
    /// Whether the presentation has been modified
    modified: bool,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            title: None,
            modified: false,
        }
    }

    /// Add a new blank slide to the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let index = self.slides.len();
        let slide_id = FIRST_SLIDE_ID + index as u32;
        self.slides.push(MutableSlide::new(slide_id));
        self.modified = true;
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slides in order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
        self.modified = true;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
        self.modified = true;
    }

    /// Get the document title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the document title (`dc:title`).
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
        self.modified = true;
    }

    /// Check if the presentation has been modified.
    pub fn is_modified(&self) -> bool {
        self.modified || self.slides.iter().any(|s| s.is_modified())
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - Relationship IDs for the slides, one per slide in order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::InvalidFormat(format!(
                "{} slide relationship IDs for {} slides",
                slide_rel_ids.len(),
                self.slides.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialise the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Write the presentation to `path`.
    ///
    /// The package is assembled in memory first; the file is only created once
    /// serialisation has succeeded.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
        assert!(!pres.is_modified());
    }

    #[test]
    fn test_add_slide() {
        let mut pres = MutablePresentation::new();
        assert_eq!(pres.add_slide().slide_id(), 256);
        assert_eq!(pres.add_slide().slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
        assert!(pres.is_modified());
        assert!(pres.slide_mut(1).is_some());
        assert!(pres.slide_mut(2).is_none());
    }

    #[test]
    fn test_title() {
        let mut pres = MutablePresentation::new();
        pres.set_title("2025 台灣日曆");
        assert_eq!(pres.title(), Some("2025 台灣日曆"));
    }

    #[test]
    fn test_xml_generation() {
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(13_680_000);
        pres.set_slide_height(18_720_000);
        pres.add_slide();
        pres.add_slide();

        let ids = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = pres.generate_presentation_xml("rId1", &ids).unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="13680000" cy="18720000"/>"#));
    }

    #[test]
    fn test_xml_generation_requires_all_ids() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        assert!(matches!(
            pres.generate_presentation_xml("rId1", &[]),
            Err(OoxmlError::InvalidFormat(_))
        ));
    }
}
