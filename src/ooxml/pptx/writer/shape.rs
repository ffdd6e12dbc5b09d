/// Shape types and implementation for PPTX presentations.
use crate::common::unit::EmuRect;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::super::format::{Paragraph, TextAlignment, TextFormat};
use super::table::Table;

/// A shape on a slide (text box, rectangle, table).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        paragraphs: Vec<Paragraph>,
        rect: EmuRect,
    },
    Rectangle {
        rect: EmuRect,
        fill_color: Option<String>,
        line_color: Option<String>,
    },
    Table {
        table: Table,
        rect: EmuRect,
    },
}

impl MutableShape {
    /// Create a new single-paragraph text box shape.
    pub(crate) fn new_text_box(shape_id: u32, text: &str, rect: EmuRect) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                paragraphs: vec![Paragraph::new(text)],
                rect,
            },
        }
    }

    /// Create a new rectangle shape.
    pub(crate) fn new_rectangle(
        shape_id: u32,
        rect: EmuRect,
        fill_color: Option<String>,
        line_color: Option<String>,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Rectangle {
                rect,
                fill_color,
                line_color,
            },
        }
    }

    /// Create a new table graphic frame.
    pub(crate) fn new_table(shape_id: u32, table: Table, rect: EmuRect) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Table { table, rect },
        }
    }

    /// Get the shape ID.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Get the shape bounds in EMUs.
    pub fn rect(&self) -> EmuRect {
        match &self.shape_type {
            ShapeType::TextBox { rect, .. }
            | ShapeType::Rectangle { rect, .. }
            | ShapeType::Table { rect, .. } => *rect,
        }
    }

    /// Get the table if this shape is a table.
    pub fn table(&self) -> Option<&Table> {
        match &self.shape_type {
            ShapeType::Table { table, .. } => Some(table),
            _ => None,
        }
    }

    /// Get the paragraphs if this shape is a text box.
    pub fn paragraphs(&self) -> Option<&[Paragraph]> {
        match &self.shape_type {
            ShapeType::TextBox { paragraphs, .. } => Some(paragraphs.as_slice()),
            _ => None,
        }
    }

    /// Apply `f` to the format of every paragraph (only for text boxes).
    fn update_format(&mut self, f: impl Fn(&mut TextFormat)) -> &mut Self {
        if let ShapeType::TextBox { paragraphs, .. } = &mut self.shape_type {
            paragraphs.iter_mut().for_each(|p| f(p.format_mut()));
        }
        self
    }

    /// Set text formatting for this shape (only for text boxes).
    pub fn set_text_format(&mut self, format: TextFormat) -> &mut Self {
        self.update_format(|f| *f = format.clone())
    }

    /// Builder method: set font.
    pub fn font(&mut self, font: &str) -> &mut Self {
        self.update_format(|f| f.font = Some(font.to_string()))
    }

    /// Builder method: set font size.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.update_format(|f| f.size = Some(size))
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.update_format(|f| f.bold = Some(bold))
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: &str) -> &mut Self {
        self.update_format(|f| f.color = Some(color.to_string()))
    }

    /// Builder method: set paragraph alignment.
    pub fn alignment(&mut self, alignment: TextAlignment) -> &mut Self {
        if let ShapeType::TextBox { paragraphs, .. } = &mut self.shape_type {
            paragraphs
                .iter_mut()
                .for_each(|p| p.set_alignment(alignment));
        }
        self
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox { paragraphs, rect } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, "a:xfrm", rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
                xml.push_str("<a:lstStyle/>");
                for paragraph in paragraphs {
                    paragraph.write_xml(xml)?;
                }
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::Rectangle {
                rect,
                fill_color,
                line_color,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, "a:xfrm", rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);

                match fill_color {
                    Some(color) => write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        escape_xml(color)
                    )?,
                    None => xml.push_str("<a:noFill/>"),
                }

                if let Some(color) = line_color {
                    write!(
                        xml,
                        r#"<a:ln w="12700"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                        escape_xml(color)
                    )?;
                }

                xml.push_str("</p:spPr>");
                xml.push_str("<p:txBody><a:bodyPr rtlCol=\"0\" anchor=\"ctr\"/><a:lstStyle/><a:p><a:endParaRPr lang=\"zh-TW\" dirty=\"0\"/></a:p></p:txBody>");
                xml.push_str("</p:sp>");
            },
            ShapeType::Table { table, rect } => {
                xml.push_str("<p:graphicFrame>");
                xml.push_str("<p:nvGraphicFramePr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Table {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(
                    r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#,
                );
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvGraphicFramePr>");
                write_xfrm(xml, "p:xfrm", rect)?;
                table.to_xml(xml)?;
                xml.push_str("</p:graphicFrame>");
            },
        }

        Ok(())
    }
}

/// Write an offset/extent transform element.
fn write_xfrm(xml: &mut String, tag: &str, rect: &EmuRect) -> Result<()> {
    write!(
        xml,
        r#"<{tag}><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{tag}>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> EmuRect {
        EmuRect::new(360_000, 7_380_000, 12_960_000, 720_000)
    }

    #[test]
    fn test_text_box_builders() {
        let mut shape = MutableShape::new_text_box(2, "2025年 一月", rect());
        shape
            .font_size(55.0)
            .bold(true)
            .alignment(TextAlignment::Center);

        let paragraph = &shape.paragraphs().unwrap()[0];
        assert_eq!(paragraph.format().size, Some(55.0));
        assert_eq!(paragraph.format().bold, Some(true));
        assert_eq!(paragraph.alignment(), Some(TextAlignment::Center));

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="360000" y="7380000"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains("<a:t>2025年 一月</a:t>"));
    }

    #[test]
    fn test_rectangle_fill_and_line() {
        let shape = MutableShape::new_rectangle(
            3,
            rect(),
            Some("D9D9D9".to_string()),
            Some("7F7F7F".to_string()),
        );
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"name="Rectangle 2""#));
        assert!(xml.contains(r#"<a:srgbClr val="D9D9D9"/>"#));
        assert!(xml.contains(r#"<a:ln w="12700">"#));
        assert!(shape.table().is_none());
        assert!(shape.paragraphs().is_none());
    }

    #[test]
    fn test_builders_ignore_non_text_shapes() {
        let mut shape = MutableShape::new_rectangle(2, rect(), None, None);
        shape.font_size(12.0).color("FF0000");
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:noFill/>"));
        assert!(!xml.contains("FF0000"));
    }
}
