//! Tag entry store: entries, fuzzy lookup, and the tag file format

pub mod codec;
pub mod edit_distance;
pub mod persistence;
pub mod tag_entry;
pub mod tag_entry_store;

pub use codec::{decode, encode};
pub use edit_distance::edit_distance;
pub use persistence::{load, save};
pub use tag_entry::TagEntry;
pub use tag_entry_store::TagEntryStore;
