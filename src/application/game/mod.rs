mod play_cpu_turn;
mod simulate_match;

pub use play_cpu_turn::*;
pub use simulate_match::*;
