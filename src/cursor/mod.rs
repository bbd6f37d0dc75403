//! Pagination cursor module
//!
//! A long-lived, resumable cursor over a numbered page collection.
//!
//! # Overview
//!
//! Each call to [`PageCursor::resume`] is one step:
//! 1. fetch the current page from the [`PageSource`]
//! 2. compute the next page and direction from the page's boundary markers
//!    (advance, bounce at an edge, or hold when there are no markers)
//! 3. apply the caller's [`ResumeOverride`], if any
//! 4. hand back a [`StepResult`] for the page that was fetched
//!
//! The cursor never stops by itself and never returns an error. Dropping it
//! ends the traversal.

mod source;
mod transition;
mod types;

pub use source::{FetchOutcome, PageSource, Paginated};
pub use transition::{apply_override, transition};
pub use types::{
    clamp_page, BoundaryMarkers, CursorOptions, CursorState, Direction, ResumeOverride,
    StepResult, Transition, FIRST_PAGE,
};

use futures::Stream;
use tracing::debug;

/// Resumable, bidirectional cursor over a [`PageSource`]
#[derive(Debug)]
pub struct PageCursor<S> {
    /// Where pages come from
    source: S,
    /// Page and direction for the next step
    state: CursorState,
}

impl<S: PageSource> PageCursor<S> {
    /// Create a cursor starting at page 1, moving forward
    pub fn new(source: S) -> Self {
        Self::with_options(source, CursorOptions::default())
    }

    /// Create a cursor from explicit starting options
    pub fn with_options(source: S, options: CursorOptions) -> Self {
        Self {
            source,
            state: options.into(),
        }
    }

    /// State the next step will start from
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Run one step, then apply `redirect` to the state for the next step
    pub async fn resume(&mut self, redirect: Option<ResumeOverride>) -> StepResult<S::Page> {
        let page = self.state.current_page;
        let outcome = self.source.fetch_page(page).await;

        let (payload, markers, degraded) = match outcome {
            FetchOutcome::Fetched(payload) => {
                let markers = payload.boundary_markers();
                (payload, markers, false)
            }
            FetchOutcome::Degraded { payload, reason } => {
                debug!(page, %reason, "Fetch degraded, holding position");
                (payload, None, true)
            }
        };

        let (mut next, mut kind) = transition(self.state, markers);
        if degraded {
            kind = Transition::Degraded;
        }

        if let Some(redirect) = redirect.filter(|r| !r.is_empty()) {
            let redirected = apply_override(next, &redirect);
            debug!(
                page,
                computed = next.current_page,
                next_page = redirected.current_page,
                direction = %redirected.direction,
                "Applying cursor override"
            );
            next = redirected;
        }

        debug!(
            page,
            transition = ?kind,
            next_page = next.current_page,
            direction = %next.direction,
            "Cursor step complete"
        );
        self.state = next;

        StepResult {
            payload,
            page,
            transition: kind,
        }
    }

    /// Run one step without an override
    pub async fn advance(&mut self) -> StepResult<S::Page> {
        self.resume(None).await
    }

    /// Turn the cursor into an unbounded stream of steps without overrides
    pub fn into_stream(self) -> impl Stream<Item = StepResult<S::Page>> {
        futures::stream::unfold(self, |mut cursor| async move {
            let step = cursor.resume(None).await;
            Some((step, cursor))
        })
    }
}
