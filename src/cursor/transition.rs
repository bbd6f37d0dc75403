//! Pure transition functions
//!
//! The cursor's state changes are computed here from the previous state, the
//! fetched page's boundary markers and the caller's override. Nothing in this
//! file performs I/O.

use super::types::{clamp_page, BoundaryMarkers, CursorState, ResumeOverride, Transition};

/// Compute the automatic next state after fetching `state.current_page`
///
/// - more pages ahead in the current direction: move one page that way
/// - otherwise: reverse and move one page in the new direction
/// - no markers at all: keep the state
pub fn transition(
    state: CursorState,
    markers: Option<BoundaryMarkers>,
) -> (CursorState, Transition) {
    let Some(markers) = markers else {
        return (state, Transition::Held);
    };

    if markers.has_more(state.direction) {
        (state.stepped(state.direction), Transition::Advanced)
    } else {
        (state.stepped(state.direction.reversed()), Transition::Bounced)
    }
}

/// Apply a caller override on top of an already computed state
pub fn apply_override(state: CursorState, redirect: &ResumeOverride) -> CursorState {
    CursorState {
        current_page: redirect.page.map_or(state.current_page, clamp_page),
        direction: redirect.direction.unwrap_or(state.direction),
    }
}
