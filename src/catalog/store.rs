use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::model::{FishRecord, FishSummary, Source};
use crate::foundation::error::{AquariumError, AquariumResult};

/// Read-only access to fish data.
pub trait FishCatalog {
    /// Summaries of every fish, in catalog order.
    fn index(&self) -> &[FishSummary];

    /// Full record for `id`.
    fn fish_by_id(&self, id: &str) -> Option<&FishRecord>;

    /// Records for `ids` in the given order; unknown ids are skipped.
    fn multiple_fish(&self, ids: &[String]) -> Vec<&FishRecord> {
        ids.iter().filter_map(|id| self.fish_by_id(id)).collect()
    }

    /// Fact sources keyed by id.
    fn sources(&self) -> &BTreeMap<String, Source>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FishFile {
    Wrapped { fish: Vec<FishRecord> },
    Bare(Vec<FishRecord>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndexFile {
    Wrapped { fish: Vec<FishSummary> },
    Bare(Vec<FishSummary>),
}

#[derive(Deserialize)]
struct SourcesFile {
    #[serde(default)]
    sources: BTreeMap<String, Source>,
}

/// In-memory catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<FishRecord>,
    by_id: HashMap<String, usize>,
    index: Vec<FishSummary>,
    sources: BTreeMap<String, Source>,
}

impl Catalog {
    /// Build a catalog from records, deriving the index from them.
    pub fn from_records(
        records: Vec<FishRecord>,
        sources: BTreeMap<String, Source>,
    ) -> AquariumResult<Self> {
        let index = records.iter().map(FishRecord::summary).collect();
        Self::from_parts(records, index, sources)
    }

    /// Build a catalog from records and an explicit index.
    ///
    /// Index entries do not have to match records one to one; selection only sees the index and
    /// lookups only see the records.
    pub fn from_parts(
        records: Vec<FishRecord>,
        index: Vec<FishSummary>,
        sources: BTreeMap<String, Source>,
    ) -> AquariumResult<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if record.id.is_empty() {
                return Err(AquariumError::catalog(format!("fish #{i} has an empty id")));
            }
            if by_id.insert(record.id.clone(), i).is_some() {
                return Err(AquariumError::catalog(format!(
                    "duplicate fish id \"{}\"",
                    record.id
                )));
            }
        }
        Ok(Self {
            records,
            by_id,
            index,
            sources,
        })
    }

    /// Load `fish.json` (required), `index.json` and `sources.json` (optional) from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> AquariumResult<Self> {
        let dir = dir.as_ref();

        let records = match read_json::<FishFile>(&dir.join("fish.json"))? {
            Some(FishFile::Wrapped { fish } | FishFile::Bare(fish)) => fish,
            None => {
                return Err(AquariumError::catalog(format!(
                    "missing fish.json in '{}'",
                    dir.display()
                )));
            }
        };
        let sources = read_json::<SourcesFile>(&dir.join("sources.json"))?
            .map(|s| s.sources)
            .unwrap_or_default();

        let catalog = match read_json::<IndexFile>(&dir.join("index.json"))? {
            Some(IndexFile::Wrapped { fish } | IndexFile::Bare(fish)) => {
                Self::from_parts(records, fish, sources)?
            }
            None => Self::from_records(records, sources)?,
        };
        tracing::debug!(
            dir = %dir.display(),
            records = catalog.records.len(),
            indexed = catalog.index.len(),
            sources = catalog.sources.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a `fish.json` payload and derive the index from it.
    pub fn from_reader<R: Read>(r: R) -> AquariumResult<Self> {
        let file: FishFile = serde_json::from_reader(r)
            .map_err(|e| AquariumError::serde(format!("parse fish JSON: {e}")))?;
        let (FishFile::Wrapped { fish } | FishFile::Bare(fish)) = file;
        Self::from_records(fish, BTreeMap::new())
    }

    /// Every full record in file order.
    pub fn records(&self) -> &[FishRecord] {
        &self.records
    }

    /// Number of full records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return `true` when the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FishCatalog for Catalog {
    fn index(&self) -> &[FishSummary] {
        &self.index
    }

    fn fish_by_id(&self, id: &str) -> Option<&FishRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    fn sources(&self) -> &BTreeMap<String, Source> {
        &self.sources
    }
}

/// `Ok(None)` when the file does not exist.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> AquariumResult<Option<T>> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(AquariumError::catalog(format!(
                "open '{}': {e}",
                path.display()
            )));
        }
    };
    serde_json::from_reader(BufReader::new(f))
        .map(Some)
        .map_err(|e| AquariumError::serde(format!("parse '{}': {e}", path.display())))
}
