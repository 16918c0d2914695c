pub mod bag;
pub mod engine;
pub mod grid;
pub mod log;
pub mod resolve;
pub mod situation;
pub mod statistics;
pub mod token;
pub mod zones;

pub use bag::*;
pub use engine::*;
pub use grid::*;
pub use resolve::*;
pub use situation::*;
pub use statistics::*;
pub use token::*;
pub use zones::*;

pub use self::log::{LogEntryType, MatchLogEntry};
