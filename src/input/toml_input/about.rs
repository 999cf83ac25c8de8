use serde::Deserialize;

/// Who generates the reports.
#[derive(Debug, Clone, Deserialize)]
pub struct About {
    /// Name printed in the `utworzył:` line.
    #[serde(default)]
    operator: Option<String>,
}

impl About {
    #[must_use]
    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref().filter(|name| !name.trim().is_empty())
    }
}
