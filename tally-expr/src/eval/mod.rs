pub mod error;
#[allow(clippy::module_inception)]
mod eval;

pub use error::{Error, ErrorKind, Result};
pub use eval::eval;
