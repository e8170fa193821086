mod game;
mod match_record;
mod player;
mod turn;

pub use game::*;
pub use match_record::*;
pub use player::*;
pub use turn::*;
