//! Dictionary queries over the word corpus

mod index;

pub use index::{DictionaryError, DictionaryIndex};
