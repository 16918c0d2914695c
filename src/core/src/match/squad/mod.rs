pub mod formation;
pub mod squad;

pub use formation::*;
pub use squad::*;
