use std::collections::HashMap;
use std::path::Path;

use crate::error::{MetaError, Result};
use crate::timing::{Bucket, RelativeTime};

const NUMBER_PLACEHOLDER: &str = "{number}";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Built-in English phrases for every relative-time bucket.
    pub fn english() -> Self {
        let entries = Bucket::ALL
            .iter()
            .map(|bucket| {
                let template = match bucket {
                    Bucket::SecondsAgo => "{number} seconds ago",
                    Bucket::MinutesAgo => "{number} minutes ago",
                    Bucket::HoursAgo => "{number} hours ago",
                    Bucket::DaysAgo => "{number} days ago",
                    Bucket::MonthsAgo => "{number} months ago",
                };
                (bucket.translation_key(), template.to_string())
            })
            .collect();
        Self { entries }
    }

    /// Parse a catalog from TOML text. Non-string leaves are ignored.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(text)?;
        let mut entries = HashMap::new();
        flatten_into(&mut entries, "", &table);
        Ok(Self { entries })
    }

    /// Load a catalog file, keeping English phrases for keys it leaves out.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MetaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = Self::from_toml_str(&text)?;

        let mut catalog = Self::english();
        for bucket in Bucket::ALL {
            if !loaded.contains(&bucket.translation_key()) {
                log::warn!(
                    "catalog {} has no `{}`, using the English phrase",
                    path.display(),
                    bucket.translation_key()
                );
            }
        }
        catalog.entries.extend(loaded.entries);
        Ok(catalog)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key` and substitute `number`. Unknown keys render as the key.
    pub fn translate(&self, key: &str, number: u64) -> String {
        match self.entries.get(key) {
            Some(template) => template.replace(NUMBER_PLACEHOLDER, &number.to_string()),
            None => {
                log::debug!("no phrase for `{key}`");
                key.to_string()
            }
        }
    }

    pub fn phrase(&self, rt: &RelativeTime) -> String {
        self.translate(&rt.bucket.translation_key(), rt.magnitude)
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: &str, table: &toml::Table) {
    for (k, v) in table {
        let key = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        match v {
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            toml::Value::Table(inner) => flatten_into(out, &key, inner),
            _ => log::debug!("skipping non-string catalog entry `{key}`"),
        }
    }
}
