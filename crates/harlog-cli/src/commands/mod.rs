pub mod completion;
pub mod filter;
pub mod stats;
pub mod validate;
