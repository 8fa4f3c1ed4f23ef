pub mod builder;
pub mod dump;
pub mod errors;
pub mod types;

pub use crate::builder::*;
pub use crate::dump::*;
pub use crate::types::*;
