mod config;
mod normalized;
mod record;
mod records_file;

pub mod toml_input;

pub use config::*;
pub use normalized::*;
pub use record::*;
pub use records_file::*;
