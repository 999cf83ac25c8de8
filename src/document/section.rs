use crate::document::layout::{self, padded};
use crate::document::{
    Alignment, Border, Borders, Paragraph, Run, Section, Table, TableCell, TableRow, Width,
};
use crate::input::NormalizedRecord;
use crate::time::Date;

const CELL_BORDERS: Borders = Borders::all(Border::single(1));

fn text(value: impl Into<String>) -> Run {
    Run::new(value).size(layout::TEXT_SIZE)
}

fn line(value: impl Into<String>) -> Paragraph {
    Paragraph::new().run(text(value))
}

fn cell(run: Run) -> TableCell {
    TableCell::new(Paragraph::new().run(run).aligned(Alignment::Center)).borders(CELL_BORDERS)
}

fn optional_date(date: Option<Date>) -> String {
    date.as_ref().map(Date::dotted).unwrap_or_default()
}

/// Renders one record into the blocks of the court report.
///
/// The block sequence is the same for every record, missing values only leave
/// blanks. The footer date and the operator are shared by all sections of a
/// document.
#[derive(Debug, Clone, Copy)]
pub struct SectionBuilder<'a> {
    operator: &'a str,
    today: Date,
}

impl<'a> SectionBuilder<'a> {
    #[must_use]
    pub fn new(operator: &'a str, today: Date) -> Self {
        Self { operator, today }
    }

    #[must_use]
    pub fn build(&self, record: &NormalizedRecord<'_>) -> Section {
        let mut section = Section::new();

        self.header(&mut section);
        self.case_references(&mut section, record);
        self.narrative(&mut section, record);
        section.push(self.hours_table(record));
        self.remarks(&mut section, record);
        self.work_dates(&mut section, record);
        self.footer(&mut section);

        section
    }

    fn header(&self, section: &mut Section) {
        section.extend([
            Paragraph::new()
                .run(Run::new(layout::ISSUER_NAME).bold().size(layout::TITLE_SIZE))
                .aligned(Alignment::Center),
            line(layout::ISSUER_ADDRESS).aligned(Alignment::Center),
            line(layout::ISSUER_PHONE).aligned(Alignment::Center),
            line(layout::ISSUER_TAX_ID)
                .aligned(Alignment::Center)
                .spacing_after(200),
            Paragraph::empty(),
        ]);
    }

    fn case_references(&self, section: &mut Section, record: &NormalizedRecord<'_>) {
        let record = record.record();

        section.extend([
            line(format!("{} {}", layout::CASE_KOW, record.kow())),
            Paragraph::plain(" "),
            Paragraph::new()
                .run(text(format!("{} {}", layout::CASE_WO, record.wo())))
                .run(text(padded(layout::COURT_COLUMN, layout::COURT_NAME))),
            line(padded(layout::COURT_COLUMN, layout::COURT_DEPARTMENT)),
            Paragraph::new()
                .run(text(format!("{} {}", layout::CASE_II_K, record.ii_k())))
                .run(text(padded(
                    layout::COURT_COLUMN_AFTER_CASE,
                    layout::COURT_DIVISION,
                ))),
            line(padded(layout::COURT_COLUMN, layout::COURT_STREET)),
            line(padded(layout::COURT_COLUMN, layout::COURT_CITY)).spacing_after(300),
            Paragraph::empty(),
            Paragraph::empty(),
            line(padded(layout::ISSUER_LINE_INDENT, layout::ISSUER_LINE)).spacing_after(200),
            Paragraph::empty(),
        ]);
    }

    fn narrative(&self, section: &mut Section, record: &NormalizedRecord<'_>) {
        section.extend([
            Paragraph::new()
                .run(text(layout::CONVICT_PREFIX))
                .run(text(record.full_name()).bold()),
            Paragraph::new()
                .run(text(layout::RESIDENCE_PREFIX))
                .run(text(record.address()).bold()),
            line(layout::period_line(
                record.reporting_month().locative(),
                record.reporting_year(),
            )),
            Paragraph::new()
                .run(text(record.total().to_string()).bold())
                .run(text(layout::HOURS_SUFFIX)),
            line(layout::SENTENCE_REFERENCE),
            line(layout::SCHEDULE_COMPLIANT),
            line(layout::SCHEDULE_NONCOMPLIANT).spacing_after(200),
            Paragraph::empty(),
        ]);
    }

    /// Header row, one row per valid entry and the sum row.
    fn hours_table(&self, record: &NormalizedRecord<'_>) -> Table {
        let mut rows = Vec::with_capacity(record.valid_entries().len() + 2);

        rows.push(TableRow::new(vec![
            cell(text(layout::TABLE_DATE).bold()).width(Width::Percentage(50)),
            cell(text(layout::TABLE_HOURS).bold()).width(Width::Percentage(50)),
        ]));

        rows.extend(record.valid_entries().iter().map(|entry| {
            TableRow::new(vec![
                cell(text(optional_date(entry.date()))),
                cell(text(
                    entry
                        .hours()
                        .map(|hours| hours.to_string())
                        .unwrap_or_default(),
                )),
            ])
        }));

        rows.push(TableRow::new(vec![
            cell(text(layout::TABLE_SUM).bold()),
            cell(text(record.total().to_string()).bold()),
        ]));

        Table::new(rows, Width::Percentage(50))
    }

    fn remarks(&self, section: &mut Section, record: &NormalizedRecord<'_>) {
        let hint = |value: &str| {
            Paragraph::new().run(Run::new(value).italics().size(layout::SMALL_SIZE))
        };

        section.extend([
            Paragraph::empty(),
            line(layout::REMARKS_TITLE),
            hint(layout::REMARKS_HINT_KIND),
            hint(layout::REMARKS_HINT_VIOLATIONS),
            line(record.record().remarks()).spacing_after(100),
            Paragraph::empty(),
        ]);
    }

    fn work_dates(&self, section: &mut Section, record: &NormalizedRecord<'_>) {
        let record = record.record();
        let marker = |value: &str| {
            Run::new(value)
                .superscript()
                .size(layout::FOOTNOTE_SIZE)
        };
        let footnote = |value: &str| {
            Paragraph::new().run(Run::new(value).italics().size(layout::FOOTNOTE_SIZE))
        };

        section.extend([
            Paragraph::new()
                .run(text(layout::WORK_START))
                .run(text(optional_date(record.work_start())).bold())
                .run(marker(layout::WORK_START_MARKER)),
            Paragraph::new()
                .run(text(layout::WORK_END))
                .run(text(optional_date(record.work_end())).bold())
                .run(marker(layout::WORK_END_MARKER))
                .spacing_after(100),
            Paragraph::empty(),
            footnote(layout::WORK_START_FOOTNOTE),
            footnote(layout::WORK_END_FOOTNOTE).spacing_after(200),
        ]);
    }

    fn footer(&self, section: &mut Section) {
        section.extend([
            Paragraph::empty(),
            Paragraph::empty(),
            line(layout::footer_line(
                self.today.day(),
                self.today.month().nominative(),
                self.today.year(),
            ))
            .aligned(Alignment::Right),
            Paragraph::empty(),
            Paragraph::empty(),
            Paragraph::new()
                .run(
                    Run::new(format!("{}{}", layout::CREATED_BY, self.operator))
                        .size(layout::SMALL_SIZE),
                )
                .aligned(Alignment::Left),
        ]);
    }
}
