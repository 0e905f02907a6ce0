pub mod manifest;
pub mod reader;
pub mod record;

pub use manifest::*;
pub use reader::*;
pub use record::*;
