pub mod bot;
pub mod dice;
