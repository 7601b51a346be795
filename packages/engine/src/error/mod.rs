pub(crate) mod constructors;
pub mod types;

pub use types::{EngineError, EngineResult, ErrorKind};
