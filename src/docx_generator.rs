use log::{debug, info};
use thiserror::Error;

use crate::document::{self, Section, SectionBuilder};
use crate::docx_render::{DocxRender, RenderingError};
use crate::filename;
use crate::input::{NormalizedRecord, Record};
use crate::time::Date;

const FILENAME_PREFIX: &str = "ewidencja";
const FILENAME_EXTENSION: &str = "docx";
/// Used in the file name when the only record has no surname.
const FALLBACK_NAME: &str = "rekord";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no records to generate a document for")]
    EmptyBatch,
    #[error("failed to render the document")]
    Rendering(#[from] RenderingError),
}

/// A finished report, ready to be saved or sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    bytes: Vec<u8>,
    filename: String,
}

impl GeneratedDocument {
    pub const CONTENT_TYPE: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Value of a `Content-Disposition` header to serve the document as download.
    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// `ewidencja_<surname>_<given name>.docx` for a single record,
/// `ewidencja_<count>_rekordow.docx` otherwise. Characters that would split
/// the name into several path components are replaced by `_`.
#[must_use]
pub fn report_filename(records: &[Record]) -> String {
    match records {
        [record] => {
            let surname = match record.surname() {
                "" => FALLBACK_NAME,
                surname => surname,
            };

            filename::path_safe(&filename::sanitize(&format!(
                "{FILENAME_PREFIX}_{surname}_{}.{FILENAME_EXTENSION}",
                record.given_name()
            )))
        }
        records => format!(
            "{FILENAME_PREFIX}_{}_rekordow.{FILENAME_EXTENSION}",
            records.len()
        ),
    }
}

/// Generates one document with a page per record.
///
/// The date passed to [`DocxGenerator::new`] is used for the footer of every
/// page and as the reporting period of records without any date.
pub struct DocxGenerator<'a> {
    operator: &'a str,
    today: Date,
}

impl<'a> DocxGenerator<'a> {
    #[must_use]
    pub fn new(operator: &'a str, today: Date) -> Self {
        Self { operator, today }
    }

    /// The rendered sections, in the order of `records`.
    #[must_use]
    pub fn sections(&self, records: &[Record]) -> Vec<Section> {
        let builder = SectionBuilder::new(self.operator, self.today);

        records
            .iter()
            .map(|record| {
                let normalized = NormalizedRecord::new(record, self.today);
                debug!(
                    "rendering section for \"{}\" ({} entries)",
                    normalized.full_name(),
                    normalized.valid_entries().len()
                );
                builder.build(&normalized)
            })
            .collect()
    }

    pub fn generate(&self, records: &[Record]) -> Result<GeneratedDocument, GenerationError> {
        if records.is_empty() {
            return Err(GenerationError::EmptyBatch);
        }

        let sections = self.sections(records);
        let bytes = DocxRender::from_document_xml(document::xml::document_xml(&sections)).render()?;
        let filename = report_filename(records);

        info!(
            "generated `{}` ({} bytes) for: {}",
            filename,
            bytes.len(),
            records
                .iter()
                .map(|record| format!("{} {}", record.surname(), record.given_name()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(GeneratedDocument { bytes, filename })
    }
}
