//! WordprocessingML markup for the block model.

use std::fmt::{self, Write};

use crate::document::{
    Alignment, Block, Border, BorderStyle, Borders, Paragraph, Run, Section, Table, TableCell,
    TableRow, Twips, Width,
};
use crate::xml_string::XmlString;

const NAMESPACES: &str = concat!(
    r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
);

/// A4 portrait.
const PAGE_WIDTH: Twips = 11906;
const PAGE_HEIGHT: Twips = 16838;
const PAGE_MARGIN: Twips = 1440;

/// Width between the left and right margin.
pub(crate) const TEXT_WIDTH: Twips = PAGE_WIDTH - 2 * PAGE_MARGIN;

pub(crate) trait WriteXml {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result;
}

fn jc(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

/// Widths in `pct` are given in fiftieths of a percent.
fn width_attributes(width: Width) -> String {
    match width {
        Width::Percentage(percent) => format!(r#"w:w="{}" w:type="pct""#, percent * 50),
    }
}

impl WriteXml for Run {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<w:r>")?;

        let has_properties =
            self.is_bold() || self.is_italics() || self.is_superscript() || self.font_size().is_some();
        if has_properties {
            out.write_str("<w:rPr>")?;
            if self.is_bold() {
                out.write_str("<w:b/><w:bCs/>")?;
            }
            if self.is_italics() {
                out.write_str("<w:i/><w:iCs/>")?;
            }
            if let Some(size) = self.font_size() {
                write!(out, r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#)?;
            }
            if self.is_superscript() {
                out.write_str(r#"<w:vertAlign w:val="superscript"/>"#)?;
            }
            out.write_str("</w:rPr>")?;
        }

        // line breaks inside a run are separate text elements joined by <w:br/>
        for (index, line) in self.text().split('\n').enumerate() {
            if index > 0 {
                out.write_str("<w:br/>")?;
            }
            let line = line.strip_suffix('\r').unwrap_or(line);
            write!(
                out,
                r#"<w:t xml:space="preserve">{}</w:t>"#,
                XmlString::escape(line)
            )?;
        }

        out.write_str("</w:r>")
    }
}

fn write_paragraph_properties<W: Write>(
    paragraph: &Paragraph,
    section_break: Option<&SectionProperties>,
    out: &mut W,
) -> fmt::Result {
    let has_alignment = paragraph.alignment() != Alignment::Left;
    if paragraph.spacing().is_none() && !has_alignment && section_break.is_none() {
        return Ok(());
    }

    out.write_str("<w:pPr>")?;
    if let Some(after) = paragraph.spacing() {
        write!(out, r#"<w:spacing w:after="{after}"/>"#)?;
    }
    if has_alignment {
        write!(out, r#"<w:jc w:val="{}"/>"#, jc(paragraph.alignment()))?;
    }
    if let Some(properties) = section_break {
        properties.write_xml(out)?;
    }
    out.write_str("</w:pPr>")
}

impl WriteXml for Paragraph {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<w:p>")?;
        write_paragraph_properties(self, None, out)?;
        for run in self.runs() {
            run.write_xml(out)?;
        }
        out.write_str("</w:p>")
    }
}

impl WriteXml for Border {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result {
        let style = match self.style() {
            BorderStyle::Single => "single",
        };

        write!(
            out,
            r#"w:val="{style}" w:sz="{}" w:space="0" w:color="auto""#,
            self.size()
        )
    }
}

impl WriteXml for Borders {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<w:tcBorders>")?;
        for (name, border) in [
            ("top", &self.top),
            ("left", &self.left),
            ("bottom", &self.bottom),
            ("right", &self.right),
        ] {
            write!(out, "<w:{name} ")?;
            border.write_xml(out)?;
            out.write_str("/>")?;
        }
        out.write_str("</w:tcBorders>")
    }
}

impl WriteXml for TableCell {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<w:tc>")?;
        if self.cell_width().is_some() || self.cell_borders().is_some() {
            out.write_str("<w:tcPr>")?;
            if let Some(width) = self.cell_width() {
                write!(out, "<w:tcW {}/>", width_attributes(width))?;
            }
            if let Some(borders) = self.cell_borders() {
                borders.write_xml(out)?;
            }
            out.write_str("</w:tcPr>")?;
        }

        // a cell must end with a paragraph
        if self.paragraphs().is_empty() {
            Paragraph::empty().write_xml(out)?;
        }
        for paragraph in self.paragraphs() {
            paragraph.write_xml(out)?;
        }
        out.write_str("</w:tc>")
    }
}

impl WriteXml for TableRow {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<w:tr>")?;
        for cell in self.cells() {
            cell.write_xml(out)?;
        }
        out.write_str("</w:tr>")
    }
}

impl WriteXml for Table {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result {
        let columns = self.columns().max(1) as u32;
        let table_width = match self.width() {
            Width::Percentage(percent) => TEXT_WIDTH * percent / 100,
        };

        out.write_str("<w:tbl><w:tblPr>")?;
        write!(out, "<w:tblW {}/>", width_attributes(self.width()))?;
        out.write_str(r#"<w:tblLayout w:type="fixed"/></w:tblPr><w:tblGrid>"#)?;
        for _ in 0..columns {
            write!(out, r#"<w:gridCol w:w="{}"/>"#, table_width / columns)?;
        }
        out.write_str("</w:tblGrid>")?;

        for row in self.rows() {
            row.write_xml(out)?;
        }
        out.write_str("</w:tbl>")
    }
}

impl WriteXml for Block {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Paragraph(paragraph) => paragraph.write_xml(out),
            Self::Table(table) => table.write_xml(out),
        }
    }
}

/// Page setup of a section, every section starts on a new page.
struct SectionProperties;

impl WriteXml for SectionProperties {
    fn write_xml<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            concat!(
                r#"<w:sectPr><w:type w:val="nextPage"/>"#,
                r#"<w:pgSz w:w="{width}" w:h="{height}" w:orient="portrait"/>"#,
                r#"<w:pgMar w:top="{margin}" w:right="{margin}" w:bottom="{margin}" w:left="{margin}" w:header="708" w:footer="708" w:gutter="0"/>"#,
                r#"</w:sectPr>"#,
            ),
            width = PAGE_WIDTH,
            height = PAGE_HEIGHT,
            margin = PAGE_MARGIN,
        )
    }
}

/// Writes the `word/document.xml` part with one section per entry of `sections`.
///
/// Every section but the last is closed by an empty paragraph that carries the
/// section properties, the last one by the `w:sectPr` of the body.
pub(crate) fn write_document<W: Write>(sections: &[Section], out: &mut W) -> fmt::Result {
    out.write_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#)?;
    write!(out, "<w:document {NAMESPACES}><w:body>")?;

    for (index, section) in sections.iter().enumerate() {
        for block in section.blocks() {
            block.write_xml(out)?;
        }

        if index + 1 < sections.len() {
            out.write_str("<w:p>")?;
            write_paragraph_properties(&Paragraph::empty(), Some(&SectionProperties), out)?;
            out.write_str("</w:p>")?;
        }
    }

    SectionProperties.write_xml(out)?;
    out.write_str("</w:body></w:document>")
}

#[must_use]
pub(crate) fn document_xml(sections: &[Section]) -> String {
    let mut xml = String::new();
    // writing into a String can not fail
    let _ = write_document(sections, &mut xml);
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn to_xml(value: &impl WriteXml) -> String {
        let mut out = String::new();
        value.write_xml(&mut out).unwrap();
        out
    }

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(
            to_xml(&Paragraph::plain(" ")),
            r#"<w:p><w:r><w:t xml:space="preserve"> </w:t></w:r></w:p>"#
        );
        assert_eq!(to_xml(&Paragraph::empty()), "<w:p></w:p>");
    }

    #[test]
    fn test_styled_run() {
        assert_eq!(
            to_xml(&Run::new("¹").superscript().size(16)),
            concat!(
                r#"<w:r><w:rPr><w:sz w:val="16"/><w:szCs w:val="16"/><w:vertAlign w:val="superscript"/></w:rPr>"#,
                r#"<w:t xml:space="preserve">¹</w:t></w:r>"#,
            )
        );
        assert_eq!(
            to_xml(&Run::new("a & b").bold().italics()),
            concat!(
                r#"<w:r><w:rPr><w:b/><w:bCs/><w:i/><w:iCs/></w:rPr>"#,
                r#"<w:t xml:space="preserve">a &amp; b</w:t></w:r>"#,
            )
        );
    }

    #[test]
    fn test_multiline_run() {
        assert_eq!(
            to_xml(&Run::new("first\r\nsecond")),
            concat!(
                r#"<w:r><w:t xml:space="preserve">first</w:t><w:br/>"#,
                r#"<w:t xml:space="preserve">second</w:t></w:r>"#,
            )
        );
    }

    #[test]
    fn test_paragraph_properties() {
        assert_eq!(
            to_xml(&Paragraph::plain("x").aligned(Alignment::Right).spacing_after(200)),
            concat!(
                r#"<w:p><w:pPr><w:spacing w:after="200"/><w:jc w:val="right"/></w:pPr>"#,
                r#"<w:r><w:t xml:space="preserve">x</w:t></w:r></w:p>"#,
            )
        );
    }

    #[test]
    fn test_cell_borders() {
        let cell = TableCell::new(Paragraph::plain("8"))
            .width(Width::Percentage(50))
            .borders(Borders::all(Border::single(1)));
        let xml = to_xml(&cell);

        assert!(xml.starts_with(r#"<w:tc><w:tcPr><w:tcW w:w="2500" w:type="pct"/><w:tcBorders>"#));
        for side in ["top", "left", "bottom", "right"] {
            assert!(xml.contains(&format!(
                r#"<w:{side} w:val="single" w:sz="1" w:space="0" w:color="auto"/>"#
            )));
        }
    }

    #[test]
    fn test_table_grid() {
        let row = TableRow::new(vec![
            TableCell::new(Paragraph::plain("a")),
            TableCell::new(Paragraph::plain("b")),
        ]);
        let xml = to_xml(&Table::new(vec![row.clone(), row], Width::Percentage(50)));

        assert!(xml.contains(r#"<w:tblW w:w="2500" w:type="pct"/>"#));
        assert_eq!(xml.matches(r#"<w:gridCol w:w="2256"/>"#).count(), 2);
        assert_eq!(xml.matches("<w:tr>").count(), 2);
    }

    #[test]
    fn test_section_breaks() {
        let mut section = Section::new();
        section.push(Paragraph::plain("page"));

        let xml = document_xml(&[section.clone(), section.clone(), section]);

        assert_eq!(xml.matches("<w:sectPr>").count(), 3);
        assert_eq!(xml.matches("page").count(), 3);
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }
}
