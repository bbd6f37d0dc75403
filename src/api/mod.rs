//! Character API module
//!
//! The page source behind the cursor: wire models for the character listing
//! and a client that never fails (errors become empty pages).

mod models;
mod service;

pub use models::{
    Character, CharacterSummary, CharactersResponse, PageInfo, PageResponse, UrlInfo,
};
pub use service::CharacterApi;

#[cfg(test)]
mod tests;
