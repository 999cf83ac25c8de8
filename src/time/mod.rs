mod locale;

mod month;
pub use month::*;
mod date;
pub use date::*;
mod year;
pub use year::*;
mod hours;
pub use hours::*;
