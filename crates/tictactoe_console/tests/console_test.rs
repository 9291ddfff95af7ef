//! Tests driving the engine through the console front end.

use tictactoe_console::{Command, ConsolePresenter, OutputMode, parse_command};
use tictactoe_engine::{
    Cell, GameEngine, GameEvent, GamePhase, MoveOutcome, Piece, Position, ScriptedSource,
};

fn play(
    engine: &mut GameEngine<ConsolePresenter<Vec<u8>>, ScriptedSource>,
    line: &str,
) -> MoveOutcome {
    match parse_command(line) {
        Ok(Command::Play { row, col }) => engine.attempt_move(row, col).unwrap(),
        other => panic!("{line:?} is not a move: {other:?}"),
    }
}

#[test]
fn test_log_follows_a_won_game() {
    let source = ScriptedSource::new().with_coins([true]);
    let mut engine =
        GameEngine::with_random(ConsolePresenter::new(Vec::new(), OutputMode::Text), source);
    engine.initialize_game("A", "B", false);

    for line in ["1", "middle left", "2", "5"] {
        assert_eq!(play(&mut engine, line), MoveOutcome::Continued);
    }
    assert_eq!(play(&mut engine, "0 2"), MoveOutcome::Won);

    assert_eq!(
        engine.presentation().log().entries().collect::<Vec<_>>(),
        vec!["B's (O's) Turn", "A's (X's) Turn", "A Wins!"]
    );
}

#[test]
fn test_computer_answers_typed_move() {
    let source = ScriptedSource::new()
        .with_coins([true])
        .with_cells([Position::Center, Position::BottomRight]);
    let mut engine =
        GameEngine::with_random(ConsolePresenter::new(Vec::new(), OutputMode::Text), source);
    engine.initialize_game("Ada", "Computer", true);

    assert_eq!(play(&mut engine, "center"), MoveOutcome::Continued);

    assert_eq!(engine.board().cell(Position::Center), Cell::Occupied(Piece::X));
    assert_eq!(
        engine.board().cell(Position::BottomRight),
        Cell::Occupied(Piece::O)
    );
    assert_eq!(engine.phase(), GamePhase::InProgress);
    assert_eq!(
        engine.presentation().log().entries().last(),
        Some("Ada's (X's) Turn")
    );
}

#[test]
fn test_json_stream_parses_back_into_events() {
    let source = ScriptedSource::new().with_coins([false]);
    let mut engine =
        GameEngine::with_random(ConsolePresenter::new(Vec::new(), OutputMode::Json), source);
    engine.initialize_game("A", "B", false);
    play(&mut engine, "9");

    let output = String::from_utf8(engine.into_presentation().writer().clone()).unwrap();
    let events: Vec<GameEvent> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events.len(), 5);
    assert_eq!(events[0], GameEvent::Reset);
    assert_eq!(
        events[2],
        GameEvent::TurnChanged {
            player: "B".to_string()
        }
    );
    assert_eq!(
        events[3],
        GameEvent::PiecePlaced {
            row: 2,
            col: 2,
            piece: Piece::X
        }
    );
}
