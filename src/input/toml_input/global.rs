use std::path::{Path, PathBuf};

use serde::Deserialize;

#[cfg(feature = "lettre")]
use crate::input::toml_input::Mail;
use crate::input::toml_input::About;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Global {
    about: About,
    config: Option<Settings>,
    #[cfg(feature = "lettre")]
    mail: Option<Mail>,
}

impl Global {
    #[must_use]
    pub fn about(&self) -> &About {
        &self.about
    }

    #[must_use]
    pub fn output_dir(&self) -> Option<&Path> {
        self.config
            .as_ref()
            .and_then(|config| config.output_dir.as_deref())
    }

    #[cfg(feature = "lettre")]
    #[must_use]
    pub fn mail(&self) -> Option<&Mail> {
        self.mail.as_ref()
    }
}
