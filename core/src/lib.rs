use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use itertools::Itertools;
use serde_json::Value;
use tracing::{debug, trace};

mod index;
mod reference;

pub use index::ReferenceIndex;
pub use reference::{placeholders, Reference};

/// Token file analyzed when no other path is given.
pub const DEFAULT_FILE_PATH: &str = "../design-tokens/tokens.json";

/// Number of leading path segments that make up a category.
const CATEGORY_DEPTH: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("cannot read token document {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed token document {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads the token document at `file_path` and collects its references.
///
/// The whole file is parsed before traversal starts, so a malformed document
/// never yields a partial index.
pub fn analyze(file_path: impl AsRef<Path>) -> Result<ReferenceIndex, AnalyzeError> {
    let path = file_path.as_ref();
    let document = load(path)?;
    debug!(path = %path.display(), "loaded token document");
    Ok(analyze_value(&document))
}

pub fn analyze_value(document: &Value) -> ReferenceIndex {
    let mut index = ReferenceIndex::new();
    let mut path = Vec::new();
    visit_children(document, &mut path, &mut index);
    index
}

fn load(path: &Path) -> Result<Value, AnalyzeError> {
    let file = File::open(path).map_err(|source| AnalyzeError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|err| {
        if err.is_io() {
            AnalyzeError::NotFound {
                path: path.to_path_buf(),
                source: err.into(),
            }
        } else {
            AnalyzeError::Malformed {
                path: path.to_path_buf(),
                source: err,
            }
        }
    })
}

fn visit_children(node: &Value, path: &mut Vec<String>, index: &mut ReferenceIndex) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                visit_entry(key.clone(), value, path, index);
            }
        }
        Value::Array(items) => {
            for (i, value) in items.iter().enumerate() {
                visit_entry(i.to_string(), value, path, index);
            }
        }
        _ => {}
    }
}

fn visit_entry(segment: String, value: &Value, path: &mut Vec<String>, index: &mut ReferenceIndex) {
    path.push(segment);
    if let Value::String(text) = value {
        record_references(text, path, index);
    }
    visit_children(value, path, index);
    path.pop();
}

fn record_references(text: &str, path: &[String], index: &mut ReferenceIndex) {
    for inner in placeholders(text) {
        match Reference::from_placeholder(inner) {
            Some(reference) => {
                let category = category(path);
                debug!(%category, %reference, "found reference");
                index.insert(category, reference);
            }
            None => trace!(placeholder = inner, "skipping placeholder with fewer than three parts"),
        }
    }
}

/// Groups a location by its first two path segments.
fn category(path: &[String]) -> String {
    path.iter().take(CATEGORY_DEPTH).join(".")
}
