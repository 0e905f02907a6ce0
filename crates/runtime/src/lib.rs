pub mod frame;
pub mod input;

pub use frame::*;
pub use input::*;
