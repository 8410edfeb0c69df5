//! Completed-game summary record and elapsed-time formatting.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// How a recorded game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// All discs reached the goal tower.
    Won,
    /// The session ended before a win.
    GaveUp,
}

/// Summary record of a completed or abandoned game.
///
/// Produced once per session by [`GameBoard::set_game_log`] and handed to the
/// presentation layer for display or persistence; the engine keeps at most
/// the latest record and persists nothing itself.
///
/// [`GameBoard::set_game_log`]: crate::GameBoard::set_game_log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameLog {
    /// When the game clock started.
    started_at: NaiveDateTime,
    /// Number of discs in play.
    number_of_discs: usize,
    /// Minimum number of moves that can win at this disc count.
    moves_to_win: u64,
    /// Moves actually taken.
    your_moves: u64,
    /// Formatted elapsed time.
    elapsed_time: String,
    /// How the game ended.
    status: GameStatus,
}

/// Formats a millisecond duration progressively: seconds only under a
/// minute, minutes and seconds under an hour, hours before that.
///
/// Seconds are rounded to the thousandth place. Negative durations clamp to
/// zero.
pub fn format_elapsed(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = ms / 3_600_000;
    let rem = ms % 3_600_000;
    let minutes = rem / 60_000;
    let seconds = (rem % 60_000) as f64 / 1000.0;
    if hours > 0 {
        format!("{hours} hr {minutes} min {seconds:.3} sec")
    } else if minutes > 0 {
        format!("{minutes} min {seconds:.3} sec")
    } else {
        format!("{seconds:.3} sec")
    }
}

#[cfg(test)]
mod tests {
    use super::format_elapsed;

    #[test]
    fn test_seconds_only_under_a_minute() {
        assert_eq!(format_elapsed(5_000), "5.000 sec");
        assert_eq!(format_elapsed(59_999), "59.999 sec");
    }

    #[test]
    fn test_minutes_under_an_hour() {
        assert_eq!(format_elapsed(60_000), "1 min 0.000 sec");
        assert_eq!(format_elapsed(125_000), "2 min 5.000 sec");
    }

    #[test]
    fn test_hours_and_above() {
        assert_eq!(format_elapsed(3_725_000), "1 hr 2 min 5.000 sec");
        assert_eq!(format_elapsed(3_600_000), "1 hr 0 min 0.000 sec");
    }

    #[test]
    fn test_zero_and_negative_clamp() {
        assert_eq!(format_elapsed(0), "0.000 sec");
        assert_eq!(format_elapsed(-42), "0.000 sec");
    }
}
