//! Text formatting types for PPTX presentations.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Language tag written on every run.
const RUN_LANG: &str = "zh-TW";

/// Text formatting properties for runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Underline text
    pub underline: Option<bool>,
    /// Text color in hex RGB (e.g., "FF0000" for red)
    pub color: Option<String>,
}

impl TextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Write a run-properties element (`a:rPr` or `a:endParaRPr`).
    ///
    /// Child order follows CT_TextCharacterProperties: fill before fonts.
    pub(crate) fn write_xml(&self, xml: &mut String, tag: &str) -> Result<()> {
        write!(xml, r#"<{} lang="{}""#, tag, RUN_LANG)?;

        if let Some(size) = self.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
        }
        if let Some(true) = self.bold {
            xml.push_str(r#" b="1""#);
        }
        if let Some(true) = self.italic {
            xml.push_str(r#" i="1""#);
        }
        if let Some(true) = self.underline {
            xml.push_str(r#" u="sng""#);
        }
        xml.push_str(r#" dirty="0""#);

        if self.color.is_none() && self.font.is_none() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');

        if let Some(ref color) = self.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                escape_xml(color)
            )?;
        }

        if let Some(ref font) = self.font {
            let font = escape_xml(font);
            write!(
                xml,
                r#"<a:latin typeface="{}"/><a:ea typeface="{}"/>"#,
                font, font
            )?;
        }

        write!(xml, "</{}>", tag)?;
        Ok(())
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlignment {
    /// Get the `a:pPr/@algn` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// A single-run paragraph of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    text: String,
    format: TextFormat,
    alignment: Option<TextAlignment>,
}

impl Paragraph {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    pub fn format_mut(&mut self) -> &mut TextFormat {
        &mut self.format
    }

    pub fn alignment(&self) -> Option<TextAlignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = Some(alignment);
    }

    /// Write this paragraph as an `a:p` element.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if let Some(alignment) = self.alignment {
            write!(xml, r#"<a:pPr algn="{}"/>"#, alignment.as_str())?;
        }

        if self.text.is_empty() {
            self.format.write_xml(xml, "a:endParaRPr")?;
        } else {
            xml.push_str("<a:r>");
            self.format.write_xml(xml, "a:rPr")?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
            xml.push_str("</a:r>");
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}
