//! Durable category options for the product form.
//!
//! Categories survive dashboard restarts: the full list is stored as a JSON
//! array in a file named after [`STORAGE_KEY`] inside the dashboard data
//! directory. The list starts from [`DEFAULT_CATEGORIES`] and user additions
//! are inserted just before the `"Other"` entry so that `"Other"` stays last.
//!
//! Persistence is full-rewrite on every accepted addition; there is no
//! incremental log to replay or compact.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use indexmap::IndexSet;

/// Storage key the category list is persisted under; the on-disk file is
/// `<data_dir>/customCategories.json`.
pub const STORAGE_KEY: &str = "customCategories";

/// The built-in category options, in display order. `"Other"` is the
/// catch-all and stays last as custom entries are added.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Electronics",
    "Furniture",
    "Kitchen",
    "Clothing",
    "Books",
    "Other",
];

/// Ordered, duplicate-free category options with optional persistence.
#[derive(Clone, Debug)]
pub struct CategoryStore {
    labels: IndexSet<String>,
    path: Option<PathBuf>,
}

impl CategoryStore {
    /// A store seeded with the defaults that never touches disk.
    ///
    /// Used in tests and by embedders that manage persistence themselves.
    pub fn in_memory() -> Self {
        Self {
            labels: Self::default_labels(),
            path: None,
        }
    }

    /// Open the persisted store under `data_dir`.
    ///
    /// Loads the saved list if the file exists and parses; otherwise starts
    /// from the defaults. A file that exists but does not parse is treated
    /// as absent (with a warning) rather than taking the dashboard down.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(format!("{STORAGE_KEY}.json"));

        let labels = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<String>>(&content) {
                Ok(saved) => saved.into_iter().collect(),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "ignoring unreadable category list, falling back to defaults"
                    );
                    Self::default_labels()
                }
            },
            Err(_) => Self::default_labels(),
        };

        Self {
            labels,
            path: Some(path),
        }
    }

    /// Add a category label.
    ///
    /// The label is trimmed first. Returns `Ok(false)` without persisting
    /// when the trimmed label is empty or already present (case-sensitive
    /// comparison, so `"books"` and `"Books"` are distinct entries). On an
    /// accepted addition the full list is rewritten to disk before returning.
    pub fn add(&mut self, label: &str) -> Result<bool> {
        let label = label.trim();
        if label.is_empty() || self.labels.contains(label) {
            return Ok(false);
        }

        match self.labels.get_index_of("Other") {
            Some(index) => {
                self.labels.shift_insert(index, label.to_string());
            }
            None => {
                self.labels.insert(label.to_string());
            }
        }

        self.persist()?;
        Ok(true)
    }

    /// The labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Whether the exact label is present.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn default_labels() -> IndexSet<String> {
        DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
    }

    fn persist(&self) -> Result<()> {
        if let Some(path) = &self.path {
            let snapshot: Vec<&String> = self.labels.iter().collect();
            fs::write(path, serde_json::to_string(&snapshot)?)?;
        }
        Ok(())
    }
}
