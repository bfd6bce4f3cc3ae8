//! Pipeline module - parse `.env` input and emit XML

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod paths;
pub mod xml;

pub use convert::*;
pub use error::*;
pub use model::*;
pub use parser::*;
pub use paths::*;
pub use xml::*;
