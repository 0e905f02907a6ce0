pub mod instances;
pub mod positions;

pub use instances::*;
pub use positions::*;
