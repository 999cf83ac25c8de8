mod about;
mod global;
#[cfg(feature = "lettre")]
mod mail;

pub use about::*;
pub use global::*;
#[cfg(feature = "lettre")]
pub use mail::*;
