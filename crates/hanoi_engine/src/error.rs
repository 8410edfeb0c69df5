//! Typed failures for board construction and play.
//!
//! Every check runs before any mutation, and failures propagate to the
//! caller. The engine never prints, and never continues past a failed
//! invariant check.

use crate::disc::Disc;
use derive_more::{Display, Error, From};

/// Malformed constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    /// An id string was empty.
    #[display("id must not be empty")]
    EmptyId,

    /// A color string was empty.
    #[display("color must not be empty")]
    EmptyColor,

    /// A width was zero.
    #[display("width must be positive")]
    ZeroWidth,

    /// A height was zero.
    #[display("height must be positive")]
    ZeroHeight,

    /// Two towers on the same board share an id.
    #[display("duplicate tower id '{id}'")]
    DuplicateTowerId {
        /// The offending id.
        id: String,
    },

    /// A board must have exactly one initial tower.
    #[display("exactly one tower must be marked initial, found {count}")]
    InitialTowerCount {
        /// How many towers were marked initial.
        count: usize,
    },

    /// The goal tower (third position) cannot also be the initial tower.
    #[display("the goal tower cannot be the initial tower")]
    GoalTowerIsInitial,

    /// A board was assembled with more discs than the game supports.
    #[display("{count} discs exceeds the maximum of {max}")]
    TooManyDiscs {
        /// How many discs the towers held.
        count: usize,
        /// The supported maximum.
        max: usize,
    },

    /// A requested disc count fell outside the supported range.
    #[display("disc count {count} outside supported range {min}..={max}")]
    DiscCountOutOfRange {
        /// The requested count.
        count: usize,
        /// The supported minimum.
        min: usize,
        /// The supported maximum.
        max: usize,
    },
}

/// An operation required a top or bottom disc that doesn't exist.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("tower '{tower}' has no discs")]
pub struct EmptyTowerError {
    /// Id of the tower that was empty.
    pub tower: String,
}

/// A move or adjustment violated the rules of play.
///
/// Variants that reject a disc carry it back to the caller, so ownership is
/// never dropped on failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The disc is too wide to rest on the destination's top disc.
    #[display(
        "disc '{}' (width {}) cannot rest on a disc of width {}",
        disc.id(),
        disc.width(),
        resting_width
    )]
    DiscTooLarge {
        /// The rejected disc, returned to the caller.
        disc: Disc,
        /// Width of the disc it would have rested on.
        resting_width: u32,
    },

    /// The disc is too narrow to slide under the current bottom disc.
    #[display(
        "disc '{}' (width {}) cannot slide under a disc of width {}",
        disc.id(),
        disc.width(),
        resting_width
    )]
    DiscTooSmall {
        /// The rejected disc, returned to the caller.
        disc: Disc,
        /// Width of the disc it would have sat beneath.
        resting_width: u32,
    },

    /// The source tower has no disc to move.
    #[display("{_0}")]
    #[from]
    EmptyTower(EmptyTowerError),

    /// No tower on the board carries the given id.
    #[display("unknown tower id '{id}'")]
    UnknownTower {
        /// The unrecognized id.
        id: String,
    },

    /// The game has already ended.
    #[display("game is already over")]
    GameOver,

    /// Disc-count adjustment is only allowed before the game starts.
    #[display("disc count can only change before the game starts")]
    AdjustAfterStart,

    /// The board already holds the maximum number of discs.
    #[display("already at the maximum of {max} discs")]
    AtMaxDiscs {
        /// The supported maximum.
        max: usize,
    },

    /// The board already holds the minimum number of discs.
    #[display("already at the minimum of {min} discs")]
    AtMinDiscs {
        /// The supported minimum.
        min: usize,
    },
}
