use std::io::{self, Cursor, Write};

use log::trace;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::utils::Resources;

#[derive(Debug, Error)]
pub enum RenderingError {
    #[error("docx part `{0}` is not embedded in the binary")]
    MissingPart(&'static str),
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
    #[error(transparent)]
    Write(#[from] io::Error),
}

/// Package path and embedded resource name of the parts that are the same in
/// every document. `[Content_Types].xml` has to be the first entry.
const STATIC_PARTS: [(&str, &str); 5] = [
    ("[Content_Types].xml", "content_types.xml"),
    ("_rels/.rels", "package.rels"),
    ("word/_rels/document.xml.rels", "document.xml.rels"),
    ("word/styles.xml", "styles.xml"),
    ("word/settings.xml", "settings.xml"),
];

const DOCUMENT_PART: &str = "word/document.xml";

/// Packs a `word/document.xml` together with the static parts into a docx file.
pub struct DocxRender {
    document: String,
    compression: CompressionMethod,
}

impl DocxRender {
    #[must_use]
    pub fn from_document_xml(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            compression: CompressionMethod::Deflated,
        }
    }

    pub fn compression(&mut self, compression: CompressionMethod) -> &mut Self {
        self.compression = compression;
        self
    }

    pub fn render(self) -> Result<Vec<u8>, RenderingError> {
        let options = SimpleFileOptions::default().compression_method(self.compression);
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for (path, resource) in STATIC_PARTS {
            let part = Resources::get(resource).ok_or(RenderingError::MissingPart(resource))?;

            trace!("adding part `{}` ({} bytes)", path, part.data.len());
            writer.start_file(path, options)?;
            writer.write_all(&part.data)?;
        }

        trace!(
            "adding part `{}` ({} bytes)",
            DOCUMENT_PART,
            self.document.len()
        );
        writer.start_file(DOCUMENT_PART, options)?;
        writer.write_all(self.document.as_bytes())?;

        Ok(writer.finish()?.into_inner())
    }
}
