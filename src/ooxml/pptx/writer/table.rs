/// Table support for PPTX slides (DrawingML `a:tbl` inside a graphic frame).
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::super::format::Paragraph;

/// GUID of the built-in "Medium Style 2 - Accent 1" table style.
pub const DEFAULT_TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// A table cell holding one or more paragraphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    paragraphs: Vec<Paragraph>,
}

impl TableCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cell content with a single paragraph and return it for formatting.
    pub fn set_text(&mut self, text: &str) -> &mut Paragraph {
        self.paragraphs.clear();
        self.paragraphs.push(Paragraph::new(text));
        &mut self.paragraphs[0]
    }

    /// Append a paragraph after the existing content.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Cell text with paragraphs joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.text().is_empty())
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
        if self.paragraphs.is_empty() {
            Paragraph::new("").write_xml(xml)?;
        } else {
            for paragraph in &self.paragraphs {
                paragraph.write_xml(xml)?;
            }
        }
        xml.push_str("</a:txBody><a:tcPr/></a:tc>");
        Ok(())
    }
}

/// A rectangular table with fixed column widths and row heights.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: usize,
    cols: usize,
    /// Row-major cells
    cells: Vec<TableCell>,
    /// Column widths in EMUs
    col_widths: Vec<i64>,
    /// Row heights in EMUs
    row_heights: Vec<i64>,
    first_row_header: bool,
    band_rows: bool,
}

impl Table {
    /// Create an empty table whose columns and rows evenly share `width` and `height`.
    ///
    /// The first row is styled as a header and rows are banded by default.
    pub fn new(rows: usize, cols: usize, width: i64, height: i64) -> Self {
        Self {
            rows,
            cols,
            cells: vec![TableCell::new(); rows * cols],
            col_widths: split_evenly(width, cols),
            row_heights: split_evenly(height, rows),
            first_row_header: true,
            band_rows: true,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn col_widths(&self) -> &[i64] {
        &self.col_widths
    }

    pub fn row_heights(&self) -> &[i64] {
        &self.row_heights
    }

    pub fn set_first_row_header(&mut self, first_row_header: bool) {
        self.first_row_header = first_row_header;
    }

    pub fn set_band_rows(&mut self, band_rows: bool) {
        self.band_rows = band_rows;
    }

    /// Write the `a:graphic` element containing this table.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<a:graphic><a:graphicData uri="{}"><a:tbl>"#,
            namespace::DML_TABLE
        )?;

        xml.push_str("<a:tblPr");
        if self.first_row_header {
            xml.push_str(r#" firstRow="1""#);
        }
        if self.band_rows {
            xml.push_str(r#" bandRow="1""#);
        }
        write!(
            xml,
            "><a:tableStyleId>{}</a:tableStyleId></a:tblPr>",
            DEFAULT_TABLE_STYLE_ID
        )?;

        xml.push_str("<a:tblGrid>");
        for width in &self.col_widths {
            write!(xml, r#"<a:gridCol w="{}"/>"#, width)?;
        }
        xml.push_str("</a:tblGrid>");

        for (row, height) in self.row_heights.iter().enumerate() {
            write!(xml, r#"<a:tr h="{}">"#, height)?;
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                cell.to_xml(xml)?;
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl></a:graphicData></a:graphic>");
        Ok(())
    }
}

/// Split `total` into `parts` integer shares; the last share absorbs the remainder.
fn split_evenly(total: i64, parts: usize) -> Vec<i64> {
    if parts == 0 {
        return Vec::new();
    }
    let share = total / parts as i64;
    let mut shares = vec![share; parts];
    shares[parts - 1] += total - share * parts as i64;
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::TextFormat;

    #[test]
    fn test_split_evenly() {
        let widths = split_evenly(12_960_000, 7);
        assert_eq!(widths.len(), 7);
        assert_eq!(widths.iter().sum::<i64>(), 12_960_000);
        assert_eq!(widths[0], 1_851_428);
        assert_eq!(widths[6], 1_851_432);
        assert!(split_evenly(100, 0).is_empty());
    }

    #[test]
    fn test_cell_access_bounds() {
        let mut table = Table::new(7, 7, 7_000, 7_000);
        assert!(table.cell(6, 6).is_some());
        assert!(table.cell(7, 0).is_none());
        assert!(table.cell(0, 7).is_none());
        assert!(table.cell_mut(0, 7).is_none());
    }

    #[test]
    fn test_cell_paragraphs() {
        let mut cell = TableCell::new();
        assert!(cell.is_empty());
        cell.set_text("9").format_mut().size = Some(60.0);
        cell.add_paragraph(
            Paragraph::new("捏生日").with_format(TextFormat::new().with_size(30.0)),
        );
        assert_eq!(cell.text(), "9\n捏生日");
        assert_eq!(cell.paragraphs()[0].format().size, Some(60.0));

        cell.set_text("10");
        assert_eq!(cell.paragraphs().len(), 1);
    }

    #[test]
    fn test_table_xml() {
        let mut table = Table::new(2, 3, 300, 200);
        table.cell_mut(0, 0).unwrap().set_text("日");
        table.cell_mut(1, 2).unwrap().set_text("1");

        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<a:tblPr firstRow="1" bandRow="1">"#));
        assert_eq!(xml.matches("<a:gridCol ").count(), 3);
        assert_eq!(xml.matches(r#"<a:tr h="100">"#).count(), 2);
        assert_eq!(xml.matches("<a:tc>").count(), 6);
        assert!(xml.contains("<a:t>日</a:t>"));

        table.set_band_rows(false);
        table.set_first_row_header(false);
        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:tblPr><a:tableStyleId>"));
    }
}
