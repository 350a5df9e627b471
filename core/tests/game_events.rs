// SPDX-License-Identifier: MIT OR Apache-2.0

use littlego_core::{Color, Event, EventBus, EventKind, GameError, GameState, Move, Vertex};
use std::sync::{Arc, Mutex};

#[test]
fn moves_alternate_and_fill_the_board() {
    let mut game = GameState::new(9);
    assert_eq!(game.next_player(), Color::Black);

    game.apply_move(Move::Place("C3".parse().unwrap())).unwrap();
    game.apply_move(Move::Place("G7".parse().unwrap())).unwrap();
    game.apply_move(Move::Pass).unwrap();

    assert_eq!(game.stone_at(Vertex::new(3, 3)), Some(Color::Black));
    assert_eq!(game.stone_at(Vertex::new(7, 7)), Some(Color::White));
    assert_eq!(game.next_player(), Color::White);
    // The last-move marker only follows placed stones
    assert_eq!(game.last_placed_vertex(), None);
    game.apply_move(Move::Place("D5".parse().unwrap())).unwrap();
    assert_eq!(game.last_placed_vertex(), Some(Vertex::new(4, 5)));
    assert!(!game.is_legal_move(Vertex::new(3, 3)));
    assert!(game.is_legal_move(Vertex::new(3, 4)));
}

#[test]
fn illegal_moves_leave_state_untouched() {
    let mut game = GameState::new(9);
    game.apply_move(Move::Place(Vertex::new(5, 5))).unwrap();

    assert_eq!(
        game.apply_move(Move::Place(Vertex::new(5, 5))),
        Err(GameError::OccupiedPosition(Vertex::new(5, 5)))
    );
    assert_eq!(
        game.apply_move(Move::Place(Vertex::new(10, 1))),
        Err(GameError::InvalidVertex(Vertex::new(10, 1)))
    );
    assert_eq!(game.moves.len(), 1);
    assert_eq!(game.next_player(), Color::White);

    game.apply_move(Move::Resign).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.apply_move(Move::Pass), Err(GameError::GameOver));
    assert!(!game.is_legal_move(Vertex::new(1, 1)));
}

#[test]
fn bus_delivers_game_events_in_order() {
    let bus = EventBus::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for kind in [EventKind::NewGame, EventKind::GameStateChanged, EventKind::LastMoveChanged] {
        let seen = Arc::clone(&seen);
        bus.subscribe(kind, move |event| seen.lock().unwrap().push(event.clone()));
    }

    bus.publish(&Event::NewGame { board_size: 13 });
    bus.publish(&Event::GameStateChanged);
    bus.publish(&Event::LastMoveChanged);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            Event::NewGame { board_size: 13 },
            Event::GameStateChanged,
            Event::LastMoveChanged
        ]
    );
}

#[test]
fn unsubscribed_callbacks_stay_quiet() {
    let bus = EventBus::new();
    let seen = Arc::new(Mutex::new(0));

    let counter = Arc::clone(&seen);
    let id = bus.subscribe(EventKind::GameStateChanged, move |_| *counter.lock().unwrap() += 1);

    assert_eq!(bus.publish(&Event::GameStateChanged), 1);
    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
    assert_eq!(bus.publish(&Event::GameStateChanged), 0);
    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn package_license_matches_source_headers() {
    let header = include_str!("../src/lib.rs").lines().next().unwrap_or_default();
    assert_eq!(
        header.trim_start_matches("// SPDX-License-Identifier: "),
        env!("CARGO_PKG_LICENSE")
    );
}
