//! Towers of Hanoi game-state engine.
//!
//! Three vertical towers and a set of differently-sized discs: discs move
//! one at a time, a larger disc never rests atop a smaller one, and the game
//! is won when every disc reaches the goal tower. This crate is the pure
//! game logic behind that puzzle.
//!
//! # Architecture
//!
//! - **Disc**: an immutable playing piece (id, width, display data)
//! - **Tower**: an ordered stack of discs with checked insertion and removal
//! - **GameBoard**: owns the three towers, mediates every move, tracks the
//!   move counter and clock, detects the win, and produces the completed-game
//!   summary record
//!
//! Drivers (a UI or a test harness) construct a board and play exclusively
//! through [`GameBoard::move_disc`] plus read-only queries. The engine holds
//! no rendering state and persists nothing; failures surface as typed errors
//! for the caller to present.
//!
//! # Example
//!
//! ```
//! use hanoi_engine::GameBoard;
//!
//! let mut board = GameBoard::standard(3).expect("valid disc count");
//! board.move_disc("towerA", "towerC").expect("legal move");
//! assert_eq!(board.number_of_moves(), 1);
//! assert!(!board.is_winner());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod disc;
mod error;
mod invariants;
mod log;
mod tower;

// Crate-level exports - Board
pub use board::{
    DISC_COLORS, DISC_HEIGHT, GameBoard, GamePhase, MAX_DISCS, MIN_DISCS, TOWER_COUNT,
    TOWER_HEIGHT, TOWER_WIDTH,
};

// Crate-level exports - Pieces
pub use disc::{Disc, DiscId};
pub use tower::{Tower, TowerId};

// Crate-level exports - Errors
pub use error::{EmptyTowerError, MoveError, ValidationError};

// Crate-level exports - Game log
pub use log::{GameLog, GameStatus, format_elapsed};

// Crate-level exports - Invariants
pub use invariants::{
    DiscConservation, Invariant, InvariantSet, InvariantViolation, OrderedTower,
};
