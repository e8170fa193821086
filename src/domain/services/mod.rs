mod dice;
mod scoreboard;

pub use dice::*;
pub use scoreboard::*;
