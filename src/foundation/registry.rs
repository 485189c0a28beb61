use std::sync::Arc;

use crate::foundation::error::{AquariumError, AquariumResult};

/// Insertion-ordered name → template map with a fixed fallback entry.
///
/// Lookups are exact string matches. Re-registering a name replaces the template in place so the
/// reported order stays stable.
pub(crate) struct Registry<T: ?Sized> {
    kind: &'static str,
    fallback_name: &'static str,
    fallback: Arc<T>,
    entries: Vec<(String, Arc<T>)>,
}

impl<T: ?Sized> Registry<T> {
    pub(crate) fn new(kind: &'static str, fallback_name: &'static str, fallback: Arc<T>) -> Self {
        Self {
            kind,
            fallback_name,
            fallback,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: String, template: Arc<T>) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = template,
            None => self.entries.push((name, template)),
        }
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_ref())
    }

    pub(crate) fn get_or_fallback(&self, name: &str) -> &T {
        match self.lookup(name) {
            Some(t) => t,
            None => {
                tracing::warn!(
                    "{} template \"{name}\" not found, using {}",
                    self.kind,
                    self.fallback_name
                );
                self.fallback.as_ref()
            }
        }
    }

    pub(crate) fn try_get(&self, name: &str) -> AquariumResult<&T> {
        self.lookup(name)
            .ok_or_else(|| AquariumError::unknown_template(format!("{} \"{name}\"", self.kind)))
    }

    pub(crate) fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl<T: ?Sized> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            fallback_name: self.fallback_name,
            fallback: Arc::clone(&self.fallback),
            entries: self.entries.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/registry.rs"]
mod tests;
