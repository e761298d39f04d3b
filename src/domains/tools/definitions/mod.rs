//! Tool definitions, one file per tool.

pub mod search_docs;

pub use search_docs::{QUERY_DESCRIPTION, SearchDocsParams, SearchDocsTool};
