mod rigged_dice;

pub use rigged_dice::*;
