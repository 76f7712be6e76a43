pub mod convert;
pub mod error;
pub mod har;
pub mod jmx;
pub mod logging;

pub use convert::{convert_file, convert_text, Conversion, ConversionReport, EntryPolicy};
pub use error::ConvertError;
