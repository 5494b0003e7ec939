mod double;
mod param;

pub use double::DoubleParser;
pub use param::{param, Param};
