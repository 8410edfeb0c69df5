//! Disc value type: the playing piece.

use crate::error::ValidationError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Unique identifier for a disc.
pub type DiscId = String;

/// A sized playing piece; a smaller width may rest above a larger one.
///
/// Discs are immutable after construction. The engine never rewrites a
/// disc's fields mid-game; a disc only ever changes owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Disc {
    /// Unique id of the disc.
    id: DiscId,
    /// Width in px; determines stacking order.
    width: u32,
    /// Height in px (display only).
    height: u32,
    /// Display color: named color, hex, or rgb.
    color: String,
}

impl Disc {
    /// Creates a disc, validating its labels and dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the id or color is empty, or the width
    /// or height is zero.
    #[instrument(skip(id, color))]
    pub fn new(
        id: impl Into<DiscId>,
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
            width,
            height,
            color,
        })
    }
}

impl std::fmt::Display for Disc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}px)", self.id, self.width)
    }
}
