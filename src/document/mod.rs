//! A small block model of a word processing document.
//!
//! It only knows the primitives the report needs: paragraphs made of styled
//! runs and bordered tables. Everything is plain data, the markup is produced
//! by the [`xml`] module.

mod layout;
mod section;
pub(crate) mod xml;

pub use section::*;

/// Font size in half-points (`20` is a 10pt font).
pub type HalfPoints = u32;

/// Distances in twentieths of a point.
pub type Twips = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    text: String,
    bold: bool,
    italics: bool,
    superscript: bool,
    size: Option<HalfPoints>,
}

impl Run {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italics(mut self) -> Self {
        self.italics = true;
        self
    }

    #[must_use]
    pub fn superscript(mut self) -> Self {
        self.superscript = true;
        self
    }

    #[must_use]
    pub fn size(mut self, size: HalfPoints) -> Self {
        self.size = Some(size);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italics(&self) -> bool {
        self.italics
    }

    pub fn is_superscript(&self) -> bool {
        self.superscript
    }

    pub fn font_size(&self) -> Option<HalfPoints> {
        self.size
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    runs: Vec<Run>,
    alignment: Alignment,
    spacing_after: Option<Twips>,
}

impl Paragraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty line.
    #[must_use]
    pub fn empty() -> Self {
        Self::new()
    }

    /// A paragraph with a single unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().run(Run::new(text))
    }

    #[must_use]
    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    #[must_use]
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn spacing_after(mut self, spacing: Twips) -> Self {
        self.spacing_after = Some(spacing);
        self
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn spacing(&self) -> Option<Twips> {
        self.spacing_after
    }

    /// The text of all runs concatenated.
    #[must_use]
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }
}

/// Table and cell widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Percent of the available width.
    Percentage(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    style: BorderStyle,
    /// Line width in eighths of a point.
    size: u32,
}

impl Border {
    #[must_use]
    pub const fn single(size: u32) -> Self {
        Self {
            style: BorderStyle::Single,
            size,
        }
    }

    pub const fn style(&self) -> BorderStyle {
        self.style
    }

    pub const fn size(&self) -> u32 {
        self.size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Borders {
    pub top: Border,
    pub left: Border,
    pub bottom: Border,
    pub right: Border,
}

impl Borders {
    /// The same border on all four sides.
    #[must_use]
    pub const fn all(border: Border) -> Self {
        Self {
            top: border,
            left: border,
            bottom: border,
            right: border,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    paragraphs: Vec<Paragraph>,
    width: Option<Width>,
    borders: Option<Borders>,
}

impl TableCell {
    #[must_use]
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            width: None,
            borders: None,
        }
    }

    #[must_use]
    pub fn width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = Some(borders);
        self
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn cell_width(&self) -> Option<Width> {
        self.width
    }

    pub fn cell_borders(&self) -> Option<&Borders> {
        self.borders.as_ref()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.paragraphs.iter().map(Paragraph::text).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

impl TableRow {
    #[must_use]
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<TableRow>,
    width: Width,
}

impl Table {
    #[must_use]
    pub fn new(rows: Vec<TableRow>, width: Width) -> Self {
        Self { rows, width }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn width(&self) -> Width {
        self.width
    }

    /// The number of columns of the widest row.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells().len())
            .max()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// The blocks of one record, rendered on its own page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    blocks: Vec<Block>,
}

impl Section {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: impl Into<Block>) -> &mut Self {
        self.blocks.push(block.into());
        self
    }

    pub fn extend<B: Into<Block>>(&mut self, blocks: impl IntoIterator<Item = B>) -> &mut Self {
        self.blocks.extend(blocks.into_iter().map(Into::into));
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(paragraph) => Some(paragraph),
            Block::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        })
    }
}
