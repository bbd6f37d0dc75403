//! Character API wire models
//!
//! Shapes of the `GET /character?page=N` response.

use crate::cursor::{BoundaryMarkers, Paginated};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pagination metadata of a listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    /// Total number of items in the collection
    pub count: u64,
    /// Total number of pages
    pub pages: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub prev: Option<String>,
}

/// Named link to another resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlInfo {
    pub name: String,
    pub url: String,
}

/// A character as listed by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub species: String,
    /// Subspecies or variant, often empty
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: UrlInfo,
    pub location: UrlInfo,
    /// Avatar URL
    pub image: String,
    /// URLs of the episodes the character appears in
    pub episode: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Absent on non-paginated or degraded responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<PageInfo>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A page of characters
pub type CharactersResponse = PageResponse<Character>;

impl<T> PageResponse<T> {
    /// Page with no items and no pagination metadata
    pub fn empty() -> Self {
        Self {
            info: None,
            results: Vec::new(),
        }
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }
}

impl<T> Default for PageResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Paginated for PageResponse<T> {
    fn boundary_markers(&self) -> Option<BoundaryMarkers> {
        let link = |url: &Option<String>| url.as_deref().is_some_and(|u| !u.is_empty());
        self.info
            .as_ref()
            .map(|info| BoundaryMarkers::new(link(&info.next), link(&info.prev)))
    }
}

impl CharactersResponse {
    /// Character names in page order
    pub fn names(&self) -> Vec<&str> {
        self.results.iter().map(|c| c.name.as_str()).collect()
    }

    /// Short summaries of every character on the page
    pub fn summaries(&self) -> Vec<CharacterSummary> {
        self.results.iter().map(CharacterSummary::from).collect()
    }
}

/// Name, species and episode count of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub name: String,
    pub species: String,
    pub episodes_count: usize,
}

impl From<&Character> for CharacterSummary {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            species: character.species.clone(),
            episodes_count: character.episode.len(),
        }
    }
}
