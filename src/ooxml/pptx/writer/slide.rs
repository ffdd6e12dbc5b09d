/// Slide types and implementation for PPTX presentations.
use crate::common::unit::EmuRect;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::shape::MutableShape;
use super::table::Table;

/// A mutable slide in a presentation.
///
/// Slides are always based on the blank layout; every visible element is an
/// explicitly added shape.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier within `p:sldIdLst`)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Whether the slide has been modified
    pub(crate) modified: bool,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            modified: false,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Next free shape ID. ID 1 is reserved for the shape tree group.
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    fn push_shape(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        self.modified = true;
        &mut self.shapes[index]
    }

    /// Add a text box to the slide and return it for formatting.
    pub fn add_text_box(&mut self, text: &str, rect: EmuRect) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), text, rect);
        self.push_shape(shape)
    }

    /// Add a rectangle to the slide.
    ///
    /// # Arguments
    /// * `rect` - Bounds in EMUs
    /// * `fill_color` - Optional fill in hex RGB; `None` for no fill
    /// * `line_color` - Optional outline in hex RGB; `None` for the default outline
    pub fn add_rectangle(
        &mut self,
        rect: EmuRect,
        fill_color: Option<String>,
        line_color: Option<String>,
    ) -> &mut MutableShape {
        let shape =
            MutableShape::new_rectangle(self.next_shape_id(), rect, fill_color, line_color);
        self.push_shape(shape)
    }

    /// Add a table to the slide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use calendar_slides::common::unit::EmuRect;
    /// use calendar_slides::ooxml::pptx::{MutablePresentation, Table};
    ///
    /// let mut pres = MutablePresentation::new();
    /// let slide = pres.add_slide();
    ///
    /// let rect = EmuRect::from_cm(1.0, 23.0, 36.0, 28.0);
    /// let mut table = Table::new(7, 7, rect.width, rect.height);
    /// table.cell_mut(0, 0).unwrap().set_text("日");
    /// slide.add_table(table, rect);
    /// assert_eq!(slide.shape_count(), 1);
    /// ```
    pub fn add_table(&mut self, table: Table, rect: EmuRect) -> &mut MutableShape {
        let shape = MutableShape::new_table(self.next_shape_id(), table, rect);
        self.push_shape(shape)
    }

    /// Get the shapes on this slide.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Get the number of shapes on this slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the slide has been modified.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = MutableSlide::new(256);
        assert!(!slide.is_modified());

        let rect = EmuRect::from_cm(0.5, 0.5, 37.0, 20.0);
        assert_eq!(slide.add_rectangle(rect, None, None).shape_id(), 2);
        assert_eq!(slide.add_text_box("title", rect).shape_id(), 3);
        assert_eq!(
            slide.add_table(Table::new(1, 1, 10, 10), rect).shape_id(),
            4
        );
        assert_eq!(slide.shape_count(), 3);
        assert!(slide.is_modified());
    }

    #[test]
    fn test_slide_xml_structure() {
        let mut slide = MutableSlide::new(256);
        slide.add_text_box("2025年 一月", EmuRect::from_cm(1.0, 20.5, 36.0, 2.0));

        let xml = slide.to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0""#));
        assert!(xml.contains("<p:sld "));
        assert!(xml.contains(r#"<p:cNvPr id="1" name=""/>"#));
        assert!(xml.contains("2025年 一月"));
        assert!(xml.ends_with("</p:sld>"));
    }
}
