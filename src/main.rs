//! Headless bot-vs-bot simulation
//!
//! Configured through environment variables (a `.env` file is honoured):
//! `PIG_TARGET`, `PIG_GAMES`, `PIG_SEED`, `PIG_PLAYER1`, `PIG_PLAYER2`
//! (`easy|normal|hard`), `PIG_DEV` to arm the rigged dice and
//! `PIG_NO_BUST` (only honoured when armed).

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pig_engine::{
    simulate_match, BotDifficulty, Game, GameSettings, RiggedDice, RngDice, Scoreboard,
};

/// Simulation settings
#[derive(Debug, Clone)]
struct SimConfig {
    target: u32,
    games: u32,
    seed: Option<u64>,
    player1: BotDifficulty,
    player2: BotDifficulty,
    dev: bool,
    no_bust: bool,
}

impl SimConfig {
    fn from_env() -> anyhow::Result<Self> {
        let target = match std::env::var("PIG_TARGET") {
            Ok(v) => v.parse::<u32>().context("PIG_TARGET must be a positive integer")?,
            Err(_) => 100,
        };
        let games = match std::env::var("PIG_GAMES") {
            Ok(v) => v.parse::<u32>().context("PIG_GAMES must be a positive integer")?,
            Err(_) => 100,
        };
        let seed = match std::env::var("PIG_SEED") {
            Ok(v) => Some(v.parse::<u64>().context("PIG_SEED must be an unsigned integer")?),
            Err(_) => None,
        };

        Ok(Self {
            target,
            games,
            seed,
            player1: difficulty_from_env("PIG_PLAYER1", BotDifficulty::Normal)?,
            player2: difficulty_from_env("PIG_PLAYER2", BotDifficulty::Easy)?,
            dev: flag_from_env("PIG_DEV"),
            no_bust: flag_from_env("PIG_NO_BUST"),
        })
    }
}

fn flag_from_env(key: &str) -> bool {
    std::env::var(key).map(|v| parse_flag(&v)).unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

fn difficulty_from_env(key: &str, default: BotDifficulty) -> anyhow::Result<BotDifficulty> {
    match std::env::var(key) {
        Ok(v) => parse_difficulty(key, &v),
        Err(_) => Ok(default),
    }
}

fn parse_difficulty(key: &str, value: &str) -> anyhow::Result<BotDifficulty> {
    BotDifficulty::from_str(&value.trim().to_lowercase())
        .with_context(|| format!("{} must be easy, normal or hard, got {:?}", key, value))
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pig_engine=info,pig_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SimConfig::from_env()?;
    let settings = GameSettings::new(config.target);
    settings.validate()?;
    tracing::info!(?config, "Starting simulation");

    let names = [
        format!("{} (P1)", config.player1.as_str()),
        format!("{} (P2)", config.player2.as_str()),
    ];
    let first = config.player1.strategy();
    let second = config.player2.strategy();
    let mut board = Scoreboard::new();

    for i in 0..config.games {
        let dice = match config.seed {
            Some(seed) => RngDice::seeded(seed.wrapping_add(u64::from(i))),
            None => RngDice::from_entropy(),
        };
        let mut dice = RiggedDice::new(dice, config.dev);
        dice.no_bust_on_ones(config.no_bust);
        let mut game = Game::with_players(
            settings,
            [names[0].as_str(), names[1].as_str()],
            Box::new(dice),
        )?;

        let summary = simulate_match(&mut game, [&*first, &*second])?;
        tracing::debug!(game = i, winner = %summary.winner, turns = summary.turns, "Game done");
        board.record_from_game(&game)?;
    }

    for (name, wins) in board.top(2) {
        tracing::info!(%name, wins, games = board.len(), "Wins");
    }
    println!("{}", serde_json::to_string_pretty(&board.wins_table())?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        for on in ["1", "true", "TRUE", "yes", " Yes "] {
            assert!(parse_flag(on), "{:?}", on);
        }
        for off in ["0", "false", "no", "on", ""] {
            assert!(!parse_flag(off), "{:?}", off);
        }
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty("PIG_PLAYER1", "Hard").unwrap(), BotDifficulty::Hard);
        assert_eq!(parse_difficulty("PIG_PLAYER1", "easy").unwrap(), BotDifficulty::Easy);

        let err = parse_difficulty("PIG_PLAYER2", "insane").unwrap_err();
        assert!(err.to_string().contains("PIG_PLAYER2"));
        assert!(err.to_string().contains("insane"));
    }

    #[test]
    fn test_unset_env_falls_back() {
        let key = "PIG_SIM_TEST_UNSET_KEY";
        assert!(!flag_from_env(key));
        assert_eq!(
            difficulty_from_env(key, BotDifficulty::Normal).unwrap(),
            BotDifficulty::Normal
        );
    }
}
