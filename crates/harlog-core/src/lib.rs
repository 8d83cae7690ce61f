pub mod analysis;
pub mod error;
pub mod filter;
pub mod har;

pub use error::{Error, Result};
