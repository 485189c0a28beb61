use chrono::NaiveDate;

use super::kv::KeyValueStore;
use crate::foundation::error::AquariumResult;

/// Storage key of the last visit date.
pub const LAST_VISIT_KEY: &str = "aquarium-last-visit-date";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Remembers the last UTC day the tank was opened.
#[derive(Debug)]
pub struct VisitTracker<S> {
    store: S,
}

impl<S: KeyValueStore> VisitTracker<S> {
    /// Track visits in `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return `true` unless `today` is already recorded as the last visit.
    pub fn is_new_day(&self, today: NaiveDate) -> AquariumResult<bool> {
        Ok(self.last_visit()? != Some(today))
    }

    /// Record `today` as the last visit.
    pub fn mark_visited(&mut self, today: NaiveDate) -> AquariumResult<()> {
        self.store
            .set(LAST_VISIT_KEY, &today.format(DATE_FORMAT).to_string())
    }

    /// Last recorded visit. Unparseable values read as no visit.
    pub fn last_visit(&self) -> AquariumResult<Option<NaiveDate>> {
        let Some(raw) = self.store.get(LAST_VISIT_KEY)? else {
            return Ok(None);
        };
        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Some(date)),
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "ignoring malformed last visit date");
                Ok(None)
            }
        }
    }

    /// Forget the visit history.
    pub fn clear(&mut self) -> AquariumResult<()> {
        self.store.remove(LAST_VISIT_KEY)
    }

    /// Give back the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
