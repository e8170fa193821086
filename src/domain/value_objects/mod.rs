mod game_settings;
mod game_snapshot;
mod seat;
mod turn_context;

pub use game_settings::*;
pub use game_snapshot::*;
pub use seat::*;
pub use turn_context::*;
