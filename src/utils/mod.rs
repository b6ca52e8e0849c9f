pub mod error;
pub mod format;
pub mod interactive;
pub mod output;
pub mod pagination;

pub use error::*;
pub use format::*;
pub use output::*;
