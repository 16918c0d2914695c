pub mod engine;
pub mod error;
pub mod player;
pub mod result;
pub mod squad;

pub use engine::*;
pub use error::*;
pub use player::*;
pub use result::*;
pub use squad::*;
