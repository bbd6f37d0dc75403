//! Cursor types
//!
//! State, direction, overrides and the per-step result handed back to callers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest page number the cursor will ever request
pub const FIRST_PAGE: u32 = 1;

/// Clamp a proposed page number into the valid range (`>= 1`)
pub fn clamp_page(page: i64) -> u32 {
    page.clamp(i64::from(FIRST_PAGE), i64::from(u32::MAX)) as u32
}

// ============================================================================
// Direction
// ============================================================================

/// Traversal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards higher page numbers
    #[default]
    Forward,
    /// Towards lower page numbers
    Backward,
}

impl Direction {
    /// Signed page delta for one step in this direction
    pub fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// The opposite direction
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Backward => f.write_str("backward"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Accepts names (`forward`, `backward`, `fwd`, `back`) and the numeric
    /// form (`1`, `+1`, `-1`).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "fwd" | "f" | "1" | "+1" => Ok(Self::Forward),
            "backward" | "back" | "b" | "-1" => Ok(Self::Backward),
            _ => Err(Error::invalid_argument(
                s,
                "expected forward, backward, 1 or -1",
            )),
        }
    }
}

// ============================================================================
// Cursor State
// ============================================================================

/// Position and heading of a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorState {
    /// Page the next step will fetch (always `>= 1`)
    pub current_page: u32,
    /// Direction of travel
    pub direction: Direction,
}

impl CursorState {
    /// Create a state, clamping the page to `>= 1`
    pub fn new(page: i64, direction: Direction) -> Self {
        Self {
            current_page: clamp_page(page),
            direction,
        }
    }

    /// State one step away from this page, in the given direction
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        Self::new(i64::from(self.current_page) + direction.step(), direction)
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new(i64::from(FIRST_PAGE), Direction::Forward)
    }
}

/// Initial options for a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorOptions {
    /// Starting page (values below 1 clamp to 1)
    pub page: i64,
    /// Starting direction
    pub direction: Direction,
}

impl CursorOptions {
    /// Create cursor options
    pub fn new(page: i64, direction: Direction) -> Self {
        Self { page, direction }
    }
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            page: i64::from(FIRST_PAGE),
            direction: Direction::Forward,
        }
    }
}

impl From<CursorOptions> for CursorState {
    fn from(options: CursorOptions) -> Self {
        Self::new(options.page, options.direction)
    }
}

// ============================================================================
// Boundary Markers
// ============================================================================

/// Whether more pages exist on either side of a fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryMarkers {
    /// A "next" link is present
    pub has_next: bool,
    /// A "previous" link is present
    pub has_prev: bool,
}

impl BoundaryMarkers {
    /// Create boundary markers
    pub fn new(has_next: bool, has_prev: bool) -> Self {
        Self { has_next, has_prev }
    }

    /// Check if there is more to fetch in the given direction
    pub fn has_more(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.has_next,
            Direction::Backward => self.has_prev,
        }
    }
}

// ============================================================================
// Resume Override
// ============================================================================

/// Caller-supplied redirection applied after a step's automatic transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResumeOverride {
    /// Replace the computed direction
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Replace the computed page (values below 1 clamp to 1)
    #[serde(default)]
    pub page: Option<i64>,
}

impl ResumeOverride {
    /// Create an empty override
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to a page and direction
    pub fn to(page: i64, direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            page: Some(page),
        }
    }

    /// Set the page
    #[must_use]
    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the direction
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Check if neither field is set
    pub fn is_empty(&self) -> bool {
        self.direction.is_none() && self.page.is_none()
    }
}

// ============================================================================
// Step Result
// ============================================================================

/// Automatic transition taken after a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Moved one page in the current direction
    Advanced,
    /// Hit a boundary, reversed and moved one page in the new direction
    Bounced,
    /// Page carried no boundary markers, position kept
    Held,
    /// Fetch failed and degraded to an empty page, position kept
    Degraded,
}

impl Transition {
    /// Check if the cursor kept its position
    pub fn is_hold(&self) -> bool {
        matches!(self, Self::Held | Self::Degraded)
    }
}

/// What a single resume produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult<P> {
    /// Fetched page data (an empty page when degraded)
    pub payload: P,
    /// Page number that was fetched in this step
    pub page: u32,
    /// Automatic transition computed from the payload
    pub transition: Transition,
}

impl<P> StepResult<P> {
    /// Check if the fetch degraded to an empty page
    pub fn degraded(&self) -> bool {
        self.transition == Transition::Degraded
    }

    /// Map the payload, keeping page and transition
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> StepResult<Q> {
        StepResult {
            payload: f(self.payload),
            page: self.page,
            transition: self.transition,
        }
    }
}
