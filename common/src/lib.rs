//! Wanted Watch Common Library
//!
//! CLIとWeb(WASM)で共有される型とコアロジック

pub mod types;
pub mod search;
pub mod state;
pub mod favorites;
pub mod query;
pub mod sample;
pub mod error;

pub use types::{ImageRef, PageResult, WantedRecord};
pub use search::{apply_filters, matches_filters, matches_query, Filters};
pub use state::{reduce, Action, AppState, Pagination};
pub use favorites::{favorites_from_json, favorites_to_json, FAVORITES_KEY};
pub use query::{merge_by_uid, API_BASE_URL, LIST_SORT, SEARCH_FIELDS};
pub use sample::sample_records;
pub use error::{Error, Result};
