//! Error types for the search index client.

mod search_index_error;

pub use search_index_error::SearchIndexError;
