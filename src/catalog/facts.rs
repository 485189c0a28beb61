use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use super::model::{FishRecord, Source};

/// A fact joined with its source, ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FactView {
    /// Fact text.
    pub text: String,
    /// Resolved citation; [`Source::unknown`] when the id is not in the map.
    pub source: Source,
    /// Position of the fact within the record.
    pub index: usize,
    /// Number of facts the record has.
    pub total: usize,
}

/// Fact number `index` of `record`, wrapping around the fact count.
pub fn fact_at(
    record: &FishRecord,
    index: usize,
    sources: &BTreeMap<String, Source>,
) -> Option<FactView> {
    let total = record.facts.len();
    if total == 0 {
        return None;
    }
    let index = index % total;
    let fact = &record.facts[index];
    Some(FactView {
        text: fact.text.clone(),
        source: sources
            .get(&fact.source_id)
            .cloned()
            .unwrap_or_else(Source::unknown),
        index,
        total,
    })
}

/// A uniformly chosen fact of `record`.
pub fn random_fact<R: Rng + ?Sized>(
    record: &FishRecord,
    sources: &BTreeMap<String, Source>,
    rng: &mut R,
) -> Option<FactView> {
    if record.facts.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..record.facts.len());
    fact_at(record, index, sources)
}
