//! Game entity - the two-player Pig state machine
//!
//! A game is in progress until a hold lifts the current player's banked
//! score to the target. From then on `roll` and `hold` are no-ops until
//! `reset`.

use std::fmt;

use tracing::{debug, info};

use crate::domain::entities::{Player, PlayerId, Turn, NO_ROLL};
use crate::domain::error::Result;
use crate::domain::services::{RandomSource, RngDice};
use crate::domain::value_objects::{
    validate_target, GameSettings, GameSnapshot, ScoreLine, Seat, TurnContext,
};

pub struct Game {
    settings: GameSettings,
    players: [Player; 2],
    current: Seat,
    dice: Box<dyn RandomSource>,
    turn: Turn,
    // Mirrors turn.points() while the turn is live
    turn_points: u32,
    winner: Option<PlayerId>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Default game: target 100, six-sided entropy-seeded die
    pub fn new() -> Self {
        Self::with_dice(RngDice::from_entropy())
    }

    /// Default settings with the given random source
    pub fn with_dice(dice: impl RandomSource + 'static) -> Self {
        Self::build(
            GameSettings::default(),
            [Player::default_for(Seat::First), Player::default_for(Seat::Second)],
            Box::new(dice),
        )
    }

    /// Validated settings, default player names
    pub fn with_settings(settings: GameSettings, dice: Box<dyn RandomSource>) -> Result<Self> {
        settings.validate()?;
        Ok(Self::build(
            settings,
            [Player::default_for(Seat::First), Player::default_for(Seat::Second)],
            dice,
        ))
    }

    /// Validated settings and player names
    pub fn with_players(
        settings: GameSettings,
        names: [&str; 2],
        dice: Box<dyn RandomSource>,
    ) -> Result<Self> {
        settings.validate()?;
        let players = [Player::new(names[0])?, Player::new(names[1])?];
        Ok(Self::build(settings, players, dice))
    }

    fn build(settings: GameSettings, players: [Player; 2], dice: Box<dyn RandomSource>) -> Self {
        Self {
            settings,
            players,
            current: Seat::First,
            dice,
            turn: Turn::new(Seat::First),
            turn_points: 0,
            winner: None,
        }
    }

    // ---- read-only views ----

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn target(&self) -> u32 {
        self.settings.target
    }

    pub fn die_sides(&self) -> u32 {
        self.settings.die_sides
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current(&self) -> &Player {
        self.player(self.current)
    }

    pub fn opponent(&self) -> &Player {
        self.player(self.current.other())
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn turn_points(&self) -> u32 {
        self.turn_points
    }

    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    /// The winning player, if the game is over
    pub fn winner(&self) -> Option<&Player> {
        let id = self.winner?;
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Inputs for a decision policy acting for the current player
    pub fn decision_context(&self) -> TurnContext {
        TurnContext {
            my_score: self.current().score(),
            opponent_score: self.opponent().score(),
            turn_points: self.turn_points,
            target: self.settings.target,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            target: self.settings.target,
            current_player: self.current().name().to_string(),
            turn_points: self.turn_points,
            scores: self
                .players
                .iter()
                .map(|p| ScoreLine {
                    name: p.name().to_string(),
                    score: p.score(),
                })
                .collect(),
            winner: self.winner().map(|p| p.name().to_string()),
        }
    }

    // ---- actions ----

    /// Roll for the current player.
    ///
    /// A 1 clears the turn points and passes the turn. Returns `NO_ROLL`
    /// once the game is over.
    pub fn roll(&mut self) -> Result<u32> {
        if self.is_over() {
            return Ok(NO_ROLL);
        }

        let value = self.turn.roll(self.dice.as_mut(), self.settings.die_sides)?;
        if self.turn.is_busted() {
            debug!(player = %self.current().name(), "Rolled 1, bust");
            self.turn_points = 0;
            self.switch_turn();
        } else {
            self.turn_points = self.turn.points();
            debug!(
                player = %self.current().name(),
                value,
                turn_points = self.turn_points,
                "Rolled"
            );
        }
        Ok(value)
    }

    /// Bank the turn points; win if the target is reached, otherwise pass
    /// the turn. No-op once the game is over.
    pub fn hold(&mut self) -> Result<()> {
        if self.is_over() {
            return Ok(());
        }

        let seat = self.current;
        self.turn.hold(&mut self.players[seat.index()])?;
        self.turn_points = 0;

        let player = &self.players[seat.index()];
        debug!(player = %player.name(), score = player.score(), "Held");

        if player.score() >= self.settings.target {
            info!(
                winner = %player.name(),
                score = player.score(),
                target = self.settings.target,
                "Game won"
            );
            self.winner = Some(player.id());
            return Ok(());
        }

        self.switch_turn();
        Ok(())
    }

    /// Start over. With `keep_names` the players keep identity and name,
    /// otherwise they are replaced by fresh default players.
    pub fn reset(&mut self, keep_names: bool) {
        if keep_names {
            for player in &mut self.players {
                player.reset_score();
            }
        } else {
            self.players = [Player::default_for(Seat::First), Player::default_for(Seat::Second)];
        }
        self.current = Seat::First;
        self.turn = Turn::new(Seat::First);
        self.turn_points = 0;
        self.winner = None;
        debug!(keep_names, "Game reset");
    }

    /// Change the target, effective for the next hold
    pub fn set_target(&mut self, target: u32) -> Result<()> {
        validate_target(target)?;
        self.settings.target = target;
        Ok(())
    }

    /// Rename player 1 or 2
    pub fn rename(&mut self, player_no: u8, name: &str) -> Result<()> {
        let seat = Seat::from_number(player_no)?;
        self.players[seat.index()].rename(name)
    }

    /// Swap in another random source, e.g. a rigged one for development
    pub fn replace_dice(&mut self, dice: Box<dyn RandomSource>) {
        self.dice = dice;
    }

    fn switch_turn(&mut self) {
        self.current = self.current.other();
        self.turn = Turn::new(self.current);
        debug!(player = %self.current().name(), "Turn passes");
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("settings", &self.settings)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("turn", &self.turn)
            .field("turn_points", &self.turn_points)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}
