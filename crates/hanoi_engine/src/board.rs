//! Game board: the coordinator that mediates all cross-tower moves.

use crate::disc::Disc;
use crate::error::{MoveError, ValidationError};
use crate::invariants::{DiscConservation, InvariantSet, InvariantViolation, OrderedTower};
use crate::log::{GameLog, GameStatus, format_elapsed};
use crate::tower::{Tower, TowerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Number of towers on a board.
pub const TOWER_COUNT: usize = 3;

/// Maximum number of discs in play.
pub const MAX_DISCS: usize = 8;

/// Minimum number of discs for the standard setup.
pub const MIN_DISCS: usize = 3;

/// Position of the goal tower: the third tower by convention.
const GOAL: usize = TOWER_COUNT - 1;

/// Height of a standard disc in px.
pub const DISC_HEIGHT: u32 = 15;

/// Width of a standard tower in px.
pub const TOWER_WIDTH: u32 = 165;

/// Total height of a standard tower in px, column plus base.
pub const TOWER_HEIGHT: u32 = TOWER_COLUMN_HEIGHT + TOWER_BASE_HEIGHT;

const SMALLEST_DISC_WIDTH: u32 = 30;
const DISC_WIDTH_STEP: u32 = 15;
const TOWER_COLUMN_HEIGHT: u32 = 135;
const TOWER_BASE_HEIGHT: u32 = DISC_HEIGHT - 5;
const TOWER_COLOR: &str = "DodgerBlue";

/// Display colors for the standard discs, smallest first.
pub const DISC_COLORS: [&str; MAX_DISCS] = [
    "MediumTurquoise",
    "Indigo",
    "Green",
    "FireBrick",
    "DarkSalmon",
    "DarkSlateGray",
    "DeepPink",
    "DarkSlateBlue",
];

/// Phase of a game, derived from the timers and the win condition.
///
/// `NotStarted` and `InProgress` accept moves; `Won` and `Abandoned` are
/// terminal. The clock fields drive the transitions: the caller stamps the
/// start time on the first interaction, and the end time is stamped by a
/// winning move or by the caller giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GamePhase {
    /// Clock not started; setup adjustments are still allowed.
    NotStarted,
    /// Clock running; only moves are accepted.
    InProgress,
    /// Terminal: all discs reached the goal tower.
    Won,
    /// Terminal: the session ended before a win.
    Abandoned,
}

impl GamePhase {
    /// True for the phases that no longer accept moves.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Abandoned)
    }
}

/// The game board: three towers and the state of the current session.
///
/// All mutation of tower contents funnels through the board, which keeps the
/// disc-count invariant and win detection consistent. The goal tower is the
/// third tower, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBoard {
    towers: [Tower; TOWER_COUNT],
    number_of_discs: usize,
    num_moves: u32,
    start_time: i64,
    end_time: i64,
    selected_disc: Option<Disc>,
    destination_tower: Option<TowerId>,
    game_log: Option<GameLog>,
}

impl GameBoard {
    /// Assembles a board from three towers.
    ///
    /// The disc count is taken from the towers' current contents; afterwards
    /// it only changes through the pre-game adjustment operations.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if tower ids collide, the board does not
    /// have exactly one initial tower, the goal tower is marked initial, or
    /// the towers hold more than [`MAX_DISCS`] discs.
    #[instrument(skip(towers))]
    pub fn new(towers: [Tower; TOWER_COUNT]) -> Result<Self, ValidationError> {
        for (i, tower) in towers.iter().enumerate() {
            if towers[..i].iter().any(|other| other.id() == tower.id()) {
                return Err(ValidationError::DuplicateTowerId {
                    id: tower.id().to_string(),
                });
            }
        }
        let initial_count = towers.iter().filter(|tower| tower.is_initial()).count();
        if initial_count != 1 {
            return Err(ValidationError::InitialTowerCount {
                count: initial_count,
            });
        }
        if towers[GOAL].is_initial() {
            return Err(ValidationError::GoalTowerIsInitial);
        }
        let number_of_discs = towers.iter().map(Tower::disc_count).sum::<usize>();
        if number_of_discs > MAX_DISCS {
            return Err(ValidationError::TooManyDiscs {
                count: number_of_discs,
                max: MAX_DISCS,
            });
        }
        info!(number_of_discs, "Board assembled");
        Ok(Self {
            towers,
            number_of_discs,
            num_moves: 0,
            start_time: 0,
            end_time: 0,
            selected_disc: None,
            destination_tower: None,
            game_log: None,
        })
    }

    /// Builds the standard board: towers `towerA` (initial), `towerB`, and
    /// `towerC`, with `number_of_discs` discs stacked on the initial tower,
    /// widest at the bottom.
    ///
    /// Disc widths run from 30 px upward in 15 px steps, each with its own
    /// display color.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DiscCountOutOfRange`] unless
    /// `number_of_discs` is within [`MIN_DISCS`]`..=`[`MAX_DISCS`].
    #[instrument]
    pub fn standard(number_of_discs: usize) -> Result<Self, ValidationError> {
        if !(MIN_DISCS..=MAX_DISCS).contains(&number_of_discs) {
            return Err(ValidationError::DiscCountOutOfRange {
                count: number_of_discs,
                min: MIN_DISCS,
                max: MAX_DISCS,
            });
        }
        let mut initial = Tower::new("towerA", true, TOWER_WIDTH, TOWER_HEIGHT, TOWER_COLOR)?;
        for i in (0..number_of_discs).rev() {
            let disc = standard_disc(i)?;
            initial
                .add_top_disc(disc)
                .expect("standard discs stack widest first");
        }
        Self::new([
            initial,
            Tower::new("towerB", false, TOWER_WIDTH, TOWER_HEIGHT, TOWER_COLOR)?,
            Tower::new("towerC", false, TOWER_WIDTH, TOWER_HEIGHT, TOWER_COLOR)?,
        ])
    }

    /// Moves the top disc from one tower to another.
    ///
    /// All validation happens before any mutation: either the full move
    /// applies or nothing changes. A move that completes the puzzle stamps
    /// the end time in the same operation.
    ///
    /// Moving a tower onto itself is a no-op and does not count as a move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if either id is unknown, the game is over, the
    /// source tower is empty, or the destination's top disc is not strictly
    /// wider than the disc being moved.
    #[instrument(skip(self))]
    pub fn move_disc(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        let from_idx = self.tower_index(from)?;
        let to_idx = self.tower_index(to)?;

        if self.phase().is_terminal() {
            warn!(from, to, "Move rejected: game is over");
            return Err(MoveError::GameOver);
        }

        // Popping and re-adding the same disc would trip the ordering check
        // against itself, so a self-move short-circuits.
        if from_idx == to_idx {
            debug!(tower = from, "Self-move ignored");
            return Ok(());
        }

        let moving_width = match self.towers[from_idx].top_disc() {
            Ok(disc) => *disc.width(),
            Err(err) => {
                warn!(from, "Move rejected: source tower is empty");
                return Err(MoveError::from(err));
            }
        };
        let resting_width = self.towers[to_idx].top_disc().ok().map(|disc| *disc.width());
        if let Some(resting_width) = resting_width {
            if resting_width <= moving_width {
                warn!(
                    from,
                    to, moving_width, resting_width, "Move rejected: disc too large for destination"
                );
                let disc = self.towers[from_idx]
                    .top_disc()
                    .expect("source checked non-empty above")
                    .clone();
                return Err(MoveError::DiscTooLarge {
                    disc,
                    resting_width,
                });
            }
        }

        // Validated; apply the move.
        let disc = self.towers[from_idx].remove_top_disc()?;
        debug!(disc = %disc.id(), from, to, "Disc moved");
        self.towers[to_idx].push_top_unchecked(disc);
        self.num_moves += 1;

        if self.is_winner() && self.end_time == 0 {
            self.end_time = Utc::now().timestamp_millis();
            info!(moves = self.num_moves, "Game won");
        }
        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    /// Adds a disc beneath the initial tower's stack, as part of pre-game
    /// disc-count adjustment.
    ///
    /// Pairs with [`increment_number_of_discs`]; keeping the counter in sync
    /// with the tower's contents is the caller's responsibility.
    ///
    /// [`increment_number_of_discs`]: GameBoard::increment_number_of_discs
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::AdjustAfterStart`] once the game has started, or
    /// [`MoveError::DiscTooSmall`] if the disc is not strictly wider than the
    /// current bottom disc.
    #[instrument(skip(self, disc), fields(disc = %disc.id()))]
    pub fn add_bottom_disc(&mut self, disc: Disc) -> Result<(), MoveError> {
        if self.phase() != GamePhase::NotStarted {
            return Err(MoveError::AdjustAfterStart);
        }
        self.initial_tower_mut().add_bottom_disc(disc)
    }

    /// Removes and returns the bottom disc of the initial tower, as part of
    /// pre-game disc-count adjustment.
    ///
    /// Pairs with [`decrement_number_of_discs`].
    ///
    /// [`decrement_number_of_discs`]: GameBoard::decrement_number_of_discs
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::AdjustAfterStart`] once the game has started, or
    /// [`MoveError::EmptyTower`] if the initial tower has no discs.
    #[instrument(skip(self))]
    pub fn remove_bottom_disc(&mut self) -> Result<Disc, MoveError> {
        if self.phase() != GamePhase::NotStarted {
            return Err(MoveError::AdjustAfterStart);
        }
        Ok(self.initial_tower_mut().remove_bottom_disc()?)
    }

    /// Raises the disc count ahead of a game.
    ///
    /// The counter is not re-derived from the towers; callers pair this with
    /// [`add_bottom_disc`] to keep the two in sync.
    ///
    /// [`add_bottom_disc`]: GameBoard::add_bottom_disc
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::AdjustAfterStart`] once the game has started, or
    /// [`MoveError::AtMaxDiscs`] at the supported maximum.
    #[instrument(skip(self))]
    pub fn increment_number_of_discs(&mut self) -> Result<(), MoveError> {
        if self.phase() != GamePhase::NotStarted {
            return Err(MoveError::AdjustAfterStart);
        }
        if self.number_of_discs >= MAX_DISCS {
            return Err(MoveError::AtMaxDiscs { max: MAX_DISCS });
        }
        self.number_of_discs += 1;
        debug!(number_of_discs = self.number_of_discs, "Disc count raised");
        Ok(())
    }

    /// Lowers the disc count ahead of a game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::AdjustAfterStart`] once the game has started, or
    /// [`MoveError::AtMinDiscs`] at the supported minimum.
    #[instrument(skip(self))]
    pub fn decrement_number_of_discs(&mut self) -> Result<(), MoveError> {
        if self.phase() != GamePhase::NotStarted {
            return Err(MoveError::AdjustAfterStart);
        }
        if self.number_of_discs <= MIN_DISCS {
            return Err(MoveError::AtMinDiscs { min: MIN_DISCS });
        }
        self.number_of_discs -= 1;
        debug!(number_of_discs = self.number_of_discs, "Disc count lowered");
        Ok(())
    }

    /// Returns every disc to the initial tower and resets the session.
    ///
    /// Counters, timers, and the transient selection clear; the previous game
    /// log record is left in place for the caller to collect.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let mut discs: Vec<Disc> = Vec::with_capacity(self.number_of_discs);
        for tower in &mut self.towers {
            while let Ok(disc) = tower.remove_top_disc() {
                discs.push(disc);
            }
        }
        discs.sort_by(|a, b| b.width().cmp(a.width()));
        let initial = self.initial_tower_mut();
        for disc in discs {
            initial.push_top_unchecked(disc);
        }
        self.num_moves = 0;
        self.start_time = 0;
        self.end_time = 0;
        self.selected_disc = None;
        self.destination_tower = None;
        info!(number_of_discs = self.number_of_discs, "Board restarted");
        debug_assert!(self.check_invariants().is_ok());
    }

    /// True when the goal tower holds every disc in play.
    pub fn is_winner(&self) -> bool {
        self.towers[GOAL].disc_count() == self.number_of_discs
    }

    /// The phase the session is in, derived from the timers and the win
    /// condition.
    pub fn phase(&self) -> GamePhase {
        if self.end_time != 0 {
            if self.is_winner() {
                GamePhase::Won
            } else {
                GamePhase::Abandoned
            }
        } else if self.start_time != 0 {
            GamePhase::InProgress
        } else {
            GamePhase::NotStarted
        }
    }

    /// Elapsed time of a won game, formatted progressively.
    ///
    /// `None` until the game is won.
    pub fn winning_time(&self) -> Option<String> {
        if self.phase() == GamePhase::Won {
            Some(format_elapsed(self.end_time - self.start_time))
        } else {
            None
        }
    }

    /// Produces the summary record for the current session.
    ///
    /// The status is [`GameStatus::Won`] iff the win condition holds at call
    /// time, and [`GameStatus::GaveUp`] otherwise. Unset or garbled timers
    /// clamp the elapsed time to zero. The record replaces any previous one.
    #[instrument(skip(self))]
    pub fn set_game_log(&mut self) {
        let status = if self.is_winner() {
            GameStatus::Won
        } else {
            GameStatus::GaveUp
        };
        let started_at = DateTime::from_timestamp_millis(self.start_time)
            .unwrap_or_default()
            .naive_utc();
        let log = GameLog::new(
            started_at,
            self.number_of_discs,
            self.minimum_moves(),
            u64::from(self.num_moves),
            format_elapsed(self.end_time - self.start_time),
            status,
        );
        info!(%status, moves = self.num_moves, "Game log recorded");
        self.game_log = Some(log);
    }

    /// The latest summary record, if one has been produced.
    pub fn game_log(&self) -> Option<&GameLog> {
        self.game_log.as_ref()
    }

    /// Minimum number of moves that can solve the current disc count:
    /// 2^n - 1.
    pub fn minimum_moves(&self) -> u64 {
        2u64.pow(self.number_of_discs as u32) - 1
    }

    /// Looks up a tower by id.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownTower`] if no tower carries the id.
    pub fn tower(&self, id: &str) -> Result<&Tower, MoveError> {
        Ok(&self.towers[self.tower_index(id)?])
    }

    /// The three towers, in board order.
    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    /// The tower holding all discs at game start.
    pub fn initial_tower(&self) -> &Tower {
        self.towers
            .iter()
            .find(|tower| tower.is_initial())
            .expect("board construction guarantees one initial tower")
    }

    /// The tower that must hold all discs for a win.
    pub fn goal_tower(&self) -> &Tower {
        &self.towers[GOAL]
    }

    /// Number of discs in play.
    pub fn number_of_discs(&self) -> usize {
        self.number_of_discs
    }

    /// Number of moves taken this session.
    pub fn number_of_moves(&self) -> u32 {
        self.num_moves
    }

    /// Game start in ms since the Unix epoch; 0 when unset.
    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    /// Game end in ms since the Unix epoch; 0 when unset.
    pub fn end_time(&self) -> i64 {
        self.end_time
    }

    /// Stamps the game start time, in ms since the Unix epoch.
    #[instrument(skip(self))]
    pub fn set_start_time(&mut self, ms: i64) {
        debug!(ms, "Start time set");
        self.start_time = ms;
    }

    /// Stamps the game end time, in ms since the Unix epoch.
    ///
    /// Callers use this to force-end a session ("give up"); a winning move
    /// stamps the end time itself.
    #[instrument(skip(self))]
    pub fn set_end_time(&mut self, ms: i64) {
        debug!(ms, "End time set");
        self.end_time = ms;
    }

    /// The disc currently selected by the driver, if any.
    pub fn selected_disc(&self) -> Option<&Disc> {
        self.selected_disc.as_ref()
    }

    /// Marks a disc as selected, or clears the selection.
    ///
    /// The slot mirrors interaction state for drivers; the disc itself stays
    /// on its tower.
    pub fn set_selected_disc(&mut self, disc: Option<Disc>) {
        self.selected_disc = disc;
    }

    /// The tower currently marked as the move destination, if any.
    pub fn destination_tower(&self) -> Option<&str> {
        self.destination_tower.as_deref()
    }

    /// Marks a tower as the move destination, or clears the mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownTower`] if the id is not on the board.
    pub fn set_destination_tower(&mut self, id: Option<TowerId>) -> Result<(), MoveError> {
        if let Some(ref id) = id {
            self.tower_index(id)?;
        }
        self.destination_tower = id;
        Ok(())
    }

    /// Checks the board's structural invariants.
    ///
    /// # Errors
    ///
    /// Returns one [`InvariantViolation`] per failed invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        <(OrderedTower, DiscConservation)>::check_all(self)
    }

    fn tower_index(&self, id: &str) -> Result<usize, MoveError> {
        self.towers
            .iter()
            .position(|tower| tower.id() == id)
            .ok_or_else(|| MoveError::UnknownTower { id: id.to_string() })
    }

    fn initial_tower_mut(&mut self) -> &mut Tower {
        self.towers
            .iter_mut()
            .find(|tower| tower.is_initial())
            .expect("board construction guarantees one initial tower")
    }
}

/// Builds the standard disc at stack index `i` (0 = smallest).
fn standard_disc(i: usize) -> Result<Disc, ValidationError> {
    Disc::new(
        format!("disc{}", i + 1),
        SMALLEST_DISC_WIDTH + DISC_WIDTH_STEP * i as u32,
        DISC_HEIGHT,
        DISC_COLORS[i],
    )
}
