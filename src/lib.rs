mod docx_generator;
mod docx_render;
mod filename;
mod utils;
mod xml_string;

pub mod document;
pub mod input;
pub mod time;

use std::path::PathBuf;

use anyhow::Context;
use log::info;

pub use crate::docx_generator::{report_filename, DocxGenerator, GeneratedDocument, GenerationError};
pub use crate::docx_render::RenderingError;
pub use crate::filename::sanitize;

use crate::input::Config;
use crate::time::Date;

/// Generates the document for the configured records. The date of today is
/// captured once and shared by every page.
pub fn generate(config: &Config) -> Result<GeneratedDocument, GenerationError> {
    info!(
        "generating report for {} record(s) as \"{}\"",
        config.records().len(),
        config.operator()
    );

    DocxGenerator::new(config.operator(), Date::today()).generate(config.records())
}

/// Generates the document and writes it into the output directory. Returns the
/// path of the written file.
pub fn generate_report(config: &Config) -> anyhow::Result<PathBuf> {
    let document = generate(config)?;

    let output_dir = config.output_dir();
    utils::create_dir_all(output_dir)
        .with_context(|| format!("failed to create `{}`", output_dir.display()))?;

    let path = output_dir.join(document.filename());
    utils::write_atomic(&path, document.bytes())
        .with_context(|| format!("failed to write `{}`", path.display()))?;

    info!("saved report to `{}`", path.display());

    Ok(path)
}
