//! Game flow integration tests
//!
//! Drives the public API the way a hosting UI would.

use pig_engine::{
    play_cpu_turn, BotDifficulty, CpuTurnOutcome, Decision, DecisionPolicy, EasyStrategy, FixedDice,
    Game, GameSettings, PigError, RiggedDice, Scoreboard, ScriptedDice, Seat, SmartStrategy,
    TurnContext, NO_ROLL,
};

fn scripted_game(target: u32, values: &[u32]) -> Game {
    Game::with_settings(
        GameSettings::new(target),
        Box::new(ScriptedDice::new(values.iter().copied())),
    )
    .expect("valid settings")
}

/// Player 1 on 95 banked, 5 turn points in hand
fn near_win_game() -> Game {
    let mut game = Game::with_dice(FixedDice(5));
    for _ in 0..19 {
        game.roll().unwrap();
    }
    game.hold().unwrap();
    // Player 2 banks nothing
    game.hold().unwrap();
    game.roll().unwrap();
    game
}

#[test]
fn test_scenario_roll_roll_hold_wins() {
    let mut game = scripted_game(10, &[6, 6]);
    assert_eq!(game.roll(), Ok(6));
    assert_eq!(game.roll(), Ok(6));
    game.hold().unwrap();

    assert_eq!(game.players()[0].score(), 12);
    assert!(game.is_over());
    assert_eq!(game.winner_id(), Some(game.players()[0].id()));
    assert_eq!(game.winner().map(|p| p.name()), Some("Player 1"));
}

#[test]
fn test_scenario_bust_switches_player() {
    let mut game = scripted_game(100, &[3, 4, 1]);

    assert_eq!(game.roll(), Ok(3));
    assert_eq!(game.turn_points(), 3);
    assert_eq!(game.roll(), Ok(4));
    assert_eq!(game.turn_points(), 7);
    assert_eq!(game.roll(), Ok(1));
    assert_eq!(game.turn_points(), 0);
    assert_eq!(game.current().name(), "Player 2");
    assert_eq!(game.turn().seat(), Seat::Second);
}

#[test]
fn test_scenario_easy_threshold_edge() {
    let easy = EasyStrategy::new(20);
    let mut ctx = TurnContext {
        my_score: 30,
        opponent_score: 30,
        turn_points: 19,
        target: 100,
    };
    assert_eq!(easy.decide(&ctx), Decision::Roll);
    ctx.turn_points = 20;
    assert_eq!(easy.decide(&ctx), Decision::Hold);
}

#[test]
fn test_scenario_smart_rolls_on_zero() {
    let smart = SmartStrategy::default();
    for my_score in [0, 50, 92, 99, 150] {
        for opponent_score in [0, 50, 95] {
            let ctx = TurnContext {
                my_score,
                opponent_score,
                turn_points: 0,
                target: 100,
            };
            assert_eq!(smart.decide(&ctx), Decision::Roll);
        }
    }
}

#[test]
fn test_scenario_guaranteed_win_holds() {
    let game = near_win_game();
    assert_eq!(game.current_seat(), Seat::First);
    assert_eq!(game.current().score(), 95);
    assert_eq!(game.turn_points(), 5);

    let ctx = game.decision_context();
    let policies: Vec<Box<dyn DecisionPolicy>> = vec![
        Box::new(EasyStrategy::default()),
        Box::new(SmartStrategy::default()),
        BotDifficulty::Easy.strategy(),
        BotDifficulty::Hard.strategy(),
    ];
    for policy in &policies {
        assert_eq!(policy.decide(&ctx), Decision::Hold, "{}", policy.name());
    }
}

#[test]
fn test_actions_after_win_change_nothing() {
    let mut game = scripted_game(10, &[6, 6]);
    game.roll().unwrap();
    game.roll().unwrap();
    game.hold().unwrap();
    let before = game.snapshot();
    let seat = game.current_seat();
    let winner = game.winner_id();

    for _ in 0..3 {
        assert_eq!(game.roll(), Ok(NO_ROLL));
        game.hold().unwrap();
    }
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.current_seat(), seat);
    assert_eq!(game.winner_id(), winner);
    assert_eq!(
        play_cpu_turn(&mut game, &SmartStrategy::default()),
        Err(PigError::GameAlreadyOver)
    );
}

#[test]
fn test_reset_after_win_restores_first_player() {
    let mut game = scripted_game(5, &[2, 6, 6]);
    game.rename(1, "Alice").unwrap();
    game.rename(2, "Bob").unwrap();
    game.roll().unwrap();
    game.hold().unwrap();
    game.roll().unwrap();
    game.hold().unwrap();
    assert_eq!(game.winner().map(|p| p.name()), Some("Bob"));

    game.reset(true);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.current_player, "Alice");
    assert_eq!(snapshot.score_of("Alice"), Some(0));
    assert_eq!(snapshot.score_of("Bob"), Some(0));
    assert_eq!(snapshot.turn_points, 0);
    assert_eq!(snapshot.winner, None);

    game.reset(false);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.current_player, "Player 1");
    assert_eq!(snapshot.score_of("Player 2"), Some(0));
}

#[test]
fn test_cpu_against_human_turns() {
    // Human banks 8, CPU busts, human goes again
    let mut game = scripted_game(100, &[4, 4, 5, 1, 3]);
    game.roll().unwrap();
    game.roll().unwrap();
    game.hold().unwrap();

    let report = play_cpu_turn(&mut game, &*BotDifficulty::Normal.strategy()).unwrap();
    assert_eq!(
        report.outcome,
        CpuTurnOutcome::Bust {
            next_player: "Player 1".to_string()
        }
    );
    assert_eq!(report.rolls().collect::<Vec<_>>(), vec![5, 1]);

    assert_eq!(game.roll(), Ok(3));
    assert_eq!(game.turn_points(), 3);
    assert_eq!(game.players()[0].score(), 8);
}

#[test]
fn test_rigged_dice_drives_a_game() {
    let mut dice = RiggedDice::new(FixedDice(1), true);
    dice.force_next_rolls([6, 6, 6]);
    let mut game = Game::with_settings(GameSettings::new(15), Box::new(dice)).unwrap();

    game.roll().unwrap();
    game.roll().unwrap();
    game.roll().unwrap();
    game.hold().unwrap();
    assert_eq!(game.winner().map(|p| p.score()), Some(18));
}

#[test]
fn test_scoreboard_tracks_finished_games() {
    let mut board = Scoreboard::new();
    let mut game = scripted_game(10, &[6, 6, 6, 6]);

    assert_eq!(board.record_from_game(&game), Err(PigError::NotFinished));

    game.roll().unwrap();
    game.roll().unwrap();
    game.hold().unwrap();
    board.record_from_game(&game).unwrap();

    game.reset(true);
    game.hold().unwrap();
    game.roll().unwrap();
    game.roll().unwrap();
    game.hold().unwrap();
    board.record_from_game(&game).unwrap();

    assert_eq!(board.len(), 2);
    assert_eq!(board.wins_table().get("Player 1"), Some(&1));
    assert_eq!(board.wins_table().get("Player 2"), Some(&1));
    assert_eq!(board.last(1)[0].winner, "Player 2");
}

#[test]
fn test_snapshot_serializes_for_display() {
    let mut game = scripted_game(100, &[4]);
    game.roll().unwrap();
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["currentPlayer"], "Player 1");
    assert_eq!(json["turnPoints"], 4);
    assert_eq!(json["scores"][1]["name"], "Player 2");
    assert!(json["winner"].is_null());
}
