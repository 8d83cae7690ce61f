mod extensions;
mod reader;
mod types;
pub mod validate;
mod writer;

pub use extensions::Extensions;
pub use reader::HarReader;
pub use types::*;
pub use validate::{Defect, lint, validate};
pub use writer::HarWriter;
