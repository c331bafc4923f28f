use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::platform::Platform;
use crate::error::{PsError, Result};

pub const META_FILE: &str = "meta.json";

/// Sort position for directories whose name is not an integer.
const NON_NUMERIC_ID: i64 = 1_000_000_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemMeta {
    pub platform: Platform,
    pub id: u32,
    pub title: String,
    pub tier: u32,
    pub tier_name: String,
    pub tags: Vec<String>,
    pub url: String,
    pub solvedac_url: String,
}

impl ProblemMeta {
    /// Record for platforms without ranking data: every ranking field blank.
    pub fn placeholder(platform: Platform, id: u32) -> Self {
        Self {
            platform,
            id,
            title: String::new(),
            tier: 0,
            tier_name: String::new(),
            tags: Vec::new(),
            url: String::new(),
            solvedac_url: String::new(),
        }
    }

    /// Builds a record from a parsed `meta.json` object. The platform comes
    /// from the directory being scanned; every other field falls back to its
    /// default when absent, null or of the wrong type.
    fn from_fields(platform: Platform, dir_name: &str, fields: &Map<String, Value>) -> Self {
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let number = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
        };

        let tags = fields
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            platform,
            id: number("id")
                .or_else(|| dir_name.parse().ok())
                .unwrap_or(0),
            title: text("title"),
            tier: number("tier").unwrap_or(0),
            tier_name: text("tier_name"),
            tags,
            url: text("url"),
            solvedac_url: text("solvedac_url"),
        }
    }
}

/// One recorded problem found while scanning the root.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub platform: Platform,
    pub dir_name: String,
    pub meta: ProblemMeta,
}

impl IndexEntry {
    fn numeric_id(&self) -> i64 {
        self.dir_name.parse::<i64>().unwrap_or(NON_NUMERIC_ID)
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.platform
            .as_str()
            .cmp(other.platform.as_str())
            .then_with(|| self.numeric_id().cmp(&other.numeric_id()))
            .then_with(|| self.dir_name.cmp(&other.dir_name))
    }
}

pub fn problem_dir(root: &Path, platform: Platform, dir_name: &str) -> PathBuf {
    root.join(platform.as_str()).join(dir_name)
}

/// Reads `root/platform/dir_name/meta.json`. Fails only when the file is
/// unreadable or not a JSON object.
pub fn load(root: &Path, platform: Platform, dir_name: &str) -> Result<ProblemMeta> {
    let path = problem_dir(root, platform, dir_name).join(META_FILE);
    let content = fs::read_to_string(&path).map_err(|e| PsError::io(&path, e))?;
    let fields: Map<String, Value> =
        serde_json::from_str(&content).map_err(|source| PsError::Json { path, source })?;
    Ok(ProblemMeta::from_fields(platform, dir_name, &fields))
}

/// Writes `meta.json` for the record, replacing any previous one.
pub fn save(root: &Path, meta: &ProblemMeta) -> Result<PathBuf> {
    let dir = problem_dir(root, meta.platform, &meta.id.to_string());
    fs::create_dir_all(&dir).map_err(|e| PsError::io(&dir, e))?;

    let path = dir.join(META_FILE);
    let mut content = serde_json::to_string_pretty(meta).map_err(|source| PsError::Json {
        path: path.clone(),
        source,
    })?;
    content.push('\n');

    fs::write(&path, content).map_err(|e| PsError::io(&path, e))?;
    debug!(path = %path.display(), "wrote metadata");
    Ok(path)
}

/// Collects every readable `meta.json` under the known platform directories.
///
/// Missing or unparsable files are left out of the result rather than
/// reported, so one bad record never blocks the index.
pub fn scan_all(root: &Path) -> Vec<IndexEntry> {
    let mut entries = Vec::new();

    for platform in Platform::ALL {
        let base = root.join(platform.as_str());
        let dirs = match fs::read_dir(&base) {
            Ok(dirs) => dirs,
            Err(_) => continue,
        };

        for dir in dirs.flatten() {
            let path = dir.path();
            if !path.is_dir() {
                continue;
            }

            if !path.join(META_FILE).is_file() {
                continue;
            }

            let dir_name = dir.file_name().to_string_lossy().into_owned();
            match load(root, platform, &dir_name) {
                Ok(meta) => entries.push(IndexEntry {
                    platform,
                    dir_name,
                    meta,
                }),
                Err(e) => debug!("skipping unreadable metadata: {}", e),
            }
        }
    }

    entries.sort_by(|a, b| a.sort_cmp(b));
    entries
}
