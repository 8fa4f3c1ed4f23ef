pub mod errors;
pub mod payload;
pub mod rpc;
pub mod transaction;
pub mod types;

pub use crate::payload::*;
pub use crate::transaction::*;
