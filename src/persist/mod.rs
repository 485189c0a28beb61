//! Small persisted state: the saved fish list and the last visit date.
//!
//! Both sit on a [`KeyValueStore`]; selection never reads or writes it.

pub(crate) mod kv;
pub(crate) mod my_list;
pub(crate) mod visits;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use my_list::{ListChange, MY_FISH_KEY, SavedFishList};
pub use visits::{LAST_VISIT_KEY, VisitTracker};

#[cfg(test)]
#[path = "../../tests/unit/persist/mod.rs"]
mod tests;
