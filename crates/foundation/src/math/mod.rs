pub mod celestial;
pub mod mat4;
pub mod vec;

pub use celestial::*;
pub use mat4::*;
pub use vec::*;
