use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;

#[cfg(feature = "lettre")]
use crate::input::toml_input::Mail;
use crate::input::toml_input::Global;
use crate::input::{Record, RecordsFile};
use crate::utils;

/// Used when neither the command line nor the global file names an operator.
pub const DEFAULT_OPERATOR: &str = "nieznany";
const DEFAULT_OUTPUT_DIR: &str = "raporty";

pub struct Config {
    records: Vec<Record>,
    operator: String,
    output_dir: PathBuf,
    #[cfg(feature = "lettre")]
    mail: Option<Mail>,
}

pub struct ConfigBuilder {
    workspace: Option<PathBuf>,
    records: RecordsFile,
    global: Global,
    ids: Vec<String>,
    operator: Option<String>,
    output_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    fn new(records: RecordsFile, global: Global) -> Self {
        Self {
            workspace: None,
            records,
            global,
            ids: Vec::new(),
            operator: None,
            output_dir: None,
        }
    }

    /// Restricts the document to the records with these ids, in this order.
    pub fn ids<S: Into<String>>(&mut self, ids: impl IntoIterator<Item = S>) -> &mut Self {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn operator(&mut self, operator: impl Into<String>) -> &mut Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn output_dir(&mut self, output_dir: impl Into<PathBuf>) -> &mut Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// The directory relative output paths are resolved against.
    pub fn workspace(&mut self, workspace: impl Into<PathBuf>) -> &mut Self {
        self.workspace = Some(workspace.into());
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.workspace {
            Some(workspace) if path.is_relative() => workspace.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn build(self) -> anyhow::Result<Config> {
        let records = self
            .records
            .select(self.ids.as_slice())
            .context("failed to select records")?;

        let output_dir = match &self.output_dir {
            Some(output_dir) => output_dir.clone(),
            None => self.resolve(
                self.global
                    .output_dir()
                    .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR)),
            ),
        };

        let operator = self
            .operator
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.global.about().operator().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_OPERATOR.to_string());

        Ok(Config {
            records,
            operator,
            output_dir,
            #[cfg(feature = "lettre")]
            mail: self.global.mail().cloned(),
        })
    }
}

impl Config {
    #[must_use]
    pub fn builder(records: RecordsFile, global: Global) -> ConfigBuilder {
        ConfigBuilder::new(records, global)
    }

    /// Reads the records (json) and the global file (toml). The directory of the
    /// records file becomes the workspace.
    pub fn try_from_files(
        records: impl AsRef<Path>,
        global: impl AsRef<Path>,
    ) -> anyhow::Result<ConfigBuilder> {
        let records = records.as_ref();
        let global = global.as_ref();

        let records_file = RecordsFile::from_json(
            &utils::read_to_string(records)
                .with_context(|| format!("failed to read `{}`", records.display()))?,
        )
        .with_context(|| format!("failed to parse `{}`", records.display()))?;
        let global_file: Global = utils::toml_from_reader(
            File::open(global).with_context(|| format!("failed to open `{}`", global.display()))?,
        )
        .with_context(|| format!("failed to parse `{}`", global.display()))?;

        let mut builder = ConfigBuilder::new(records_file, global_file);
        if let Some(parent) = records.parent() {
            builder.workspace(parent);
        }

        Ok(builder)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[cfg(feature = "lettre")]
    pub fn mail(&self) -> Option<&Mail> {
        self.mail.as_ref()
    }
}
