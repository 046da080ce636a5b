#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,   // Rust naming conventions
    clippy::similar_names,             // common in search code (i/j/k, bm/bmh)
    clippy::missing_errors_doc,        // the one error type is documented once
    clippy::missing_panics_doc,        // matchers index within validated bounds
)]

pub mod error;
pub mod format;
pub mod input;
pub mod scan;
pub mod types;
pub mod visual;

pub use error::StriderError;
pub use scan::{ShiftTable, Trace, find, find_traced};
pub use types::Algorithm;
