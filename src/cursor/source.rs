//! Page source abstraction
//!
//! A page source fetches one page by number. It never fails: a transport
//! problem comes back as [`FetchOutcome::Degraded`] carrying an empty page.

use super::types::BoundaryMarkers;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A fetched page that may report its neighbours
pub trait Paginated {
    /// Boundary markers for this page, `None` when the page carries no
    /// pagination metadata
    fn boundary_markers(&self) -> Option<BoundaryMarkers>;
}

/// Generic JSON pages shaped like `{ "info": { "next": ..., "prev": ... } }`
impl Paginated for Value {
    fn boundary_markers(&self) -> Option<BoundaryMarkers> {
        let info = self.get("info")?.as_object()?;
        let present = |key: &str| {
            info.get(key)
                .and_then(Value::as_str)
                .is_some_and(|link| !link.is_empty())
        };
        Some(BoundaryMarkers::new(present("next"), present("prev")))
    }
}

/// Result of asking a source for a page
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<P> {
    /// The remote answered with a page
    Fetched(P),
    /// The fetch failed; `payload` is the empty stand-in page
    Degraded {
        /// Empty page handed to the caller
        payload: P,
        /// Why the fetch failed
        reason: String,
    },
}

impl<P> FetchOutcome<P> {
    /// Create a degraded outcome
    pub fn degraded(payload: P, reason: impl Into<String>) -> Self {
        Self::Degraded {
            payload,
            reason: reason.into(),
        }
    }

    /// Check if this is a degraded outcome
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Get the payload regardless of outcome
    pub fn into_payload(self) -> P {
        match self {
            Self::Fetched(payload) | Self::Degraded { payload, .. } => payload,
        }
    }
}

/// Fetches pages by number for a cursor
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Page payload type
    type Page: Paginated + Send;

    /// Fetch a single page
    async fn fetch_page(&self, page: u32) -> FetchOutcome<Self::Page>;
}

#[async_trait]
impl<S: PageSource + ?Sized> PageSource for Arc<S> {
    type Page = S::Page;

    async fn fetch_page(&self, page: u32) -> FetchOutcome<Self::Page> {
        (**self).fetch_page(page).await
    }
}
