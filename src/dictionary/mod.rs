//! Dictionary store and prefix index
//!
//! The store merges the selected word-list sources with per-word provenance;
//! the prefix index is the pruning structure built over the merged set.

mod prefix;
mod store;

pub use prefix::PrefixIndex;
pub use store::{
    Dictionary, DictionaryError, DictionarySelection, DictionarySource, Provenance,
};
