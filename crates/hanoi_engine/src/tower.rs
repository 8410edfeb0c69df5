//! Tower: an ordered stack of discs.

use crate::disc::Disc;
use crate::error::{EmptyTowerError, MoveError, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Unique identifier for a tower.
pub type TowerId = String;

/// An ordered peg holding discs; the last element is the top of the stack.
///
/// Disc widths strictly decrease from bottom to top, and every mutating
/// operation preserves that ordering: an insertion that would violate it
/// fails and leaves the stack untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    id: TowerId,
    is_initial: bool,
    width: u32,
    height: u32,
    color: String,
    discs: Vec<Disc>,
}

impl Tower {
    /// Creates an empty tower.
    ///
    /// Exactly one tower on a board is the initial tower, the one holding
    /// all discs at game start. That flag is fixed here for the tower's
    /// lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the id or color is empty, or the width
    /// or height is zero.
    #[instrument(skip(id, color))]
    pub fn new(
        id: impl Into<TowerId>,
        is_initial: bool,
        width: u32,
        height: u32,
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        let color = color.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if color.is_empty() {
            return Err(ValidationError::EmptyColor);
        }
        if width == 0 {
            return Err(ValidationError::ZeroWidth);
        }
        if height == 0 {
            return Err(ValidationError::ZeroHeight);
        }
        Ok(Self {
            id,
            is_initial,
            width,
            height,
            color,
            discs: Vec::new(),
        })
    }

    /// Adds a disc to the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::DiscTooLarge`] (carrying the rejected disc) if
    /// the stack is non-empty and the disc is not strictly narrower than the
    /// current top.
    #[instrument(skip(self, disc), fields(tower = %self.id, disc = %disc.id()))]
    pub fn add_top_disc(&mut self, disc: Disc) -> Result<(), MoveError> {
        if let Some(top) = self.discs.last() {
            if disc.width() >= top.width() {
                return Err(MoveError::DiscTooLarge {
                    resting_width: *top.width(),
                    disc,
                });
            }
        }
        debug!(width = *disc.width(), "Disc added to top");
        self.discs.push(disc);
        Ok(())
    }

    /// Adds a disc beneath the current stack.
    ///
    /// Used for pre-game disc-count adjustment only, never during play.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::DiscTooSmall`] (carrying the rejected disc) if
    /// the stack is non-empty and the disc is not strictly wider than the
    /// current bottom.
    #[instrument(skip(self, disc), fields(tower = %self.id, disc = %disc.id()))]
    pub fn add_bottom_disc(&mut self, disc: Disc) -> Result<(), MoveError> {
        if let Some(bottom) = self.discs.first() {
            if disc.width() <= bottom.width() {
                return Err(MoveError::DiscTooSmall {
                    resting_width: *bottom.width(),
                    disc,
                });
            }
        }
        debug!(width = *disc.width(), "Disc added to bottom");
        self.discs.insert(0, disc);
        Ok(())
    }

    /// Removes and returns the top disc.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTowerError`] if the stack is empty.
    #[instrument(skip(self), fields(tower = %self.id))]
    pub fn remove_top_disc(&mut self) -> Result<Disc, EmptyTowerError> {
        self.discs.pop().ok_or_else(|| EmptyTowerError {
            tower: self.id.clone(),
        })
    }

    /// Removes and returns the bottom disc.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTowerError`] if the stack is empty.
    #[instrument(skip(self), fields(tower = %self.id))]
    pub fn remove_bottom_disc(&mut self) -> Result<Disc, EmptyTowerError> {
        if self.discs.is_empty() {
            return Err(EmptyTowerError {
                tower: self.id.clone(),
            });
        }
        Ok(self.discs.remove(0))
    }

    /// Returns the top disc.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTowerError`] if the stack is empty.
    pub fn top_disc(&self) -> Result<&Disc, EmptyTowerError> {
        self.discs.last().ok_or_else(|| EmptyTowerError {
            tower: self.id.clone(),
        })
    }

    /// Pushes a disc on top without checking the ordering invariant
    /// (unchecked - use [`GameBoard::move_disc`] for validation).
    ///
    /// [`GameBoard::move_disc`]: crate::GameBoard::move_disc
    pub(crate) fn push_top_unchecked(&mut self, disc: Disc) {
        debug_assert!(
            self.discs
                .last()
                .is_none_or(|top| disc.width() < top.width()),
            "push_top_unchecked requires a validated disc"
        );
        self.discs.push(disc);
    }

    /// True if the tower holds at least one disc.
    pub fn has_disc(&self) -> bool {
        !self.discs.is_empty()
    }

    /// Number of discs on the tower.
    pub fn disc_count(&self) -> usize {
        self.discs.len()
    }

    /// Read-only view of the stack, bottom first.
    ///
    /// Ownership of the discs stays with the tower.
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// The tower's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// True if this is the tower holding all discs at game start.
    pub fn is_initial(&self) -> bool {
        self.is_initial
    }

    /// Width of the tower's base in px (display only).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the tower in px (display only).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Display color of the tower.
    pub fn color(&self) -> &str {
        &self.color
    }
}
