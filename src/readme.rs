use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PsError, Result};
use crate::models::{meta, IndexEntry};
use crate::scaffold::PROBLEM_FILE;

pub const README_FILE: &str = "README.md";

const MAX_TAGS: usize = 6;

fn render_row(entry: &IndexEntry, has_summary: bool) -> String {
    let platform = entry.platform;
    let id = &entry.dir_name;
    let meta = &entry.meta;

    let rel_dir = format!("{}/{}", platform.as_str(), id);
    let rel_problem = format!("{}/{}", rel_dir, PROBLEM_FILE);
    let rel_code = format!("{}/{}", rel_dir, platform.stub_file());

    let title = if meta.title.is_empty() {
        format!("{} {}", platform.display_name(), id)
    } else {
        meta.title.clone()
    };

    let tags = meta
        .tags
        .iter()
        .take(MAX_TAGS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let mut links = Vec::new();
    if has_summary {
        links.push(format!("[Problem]({})", rel_problem));
    }
    if !meta.url.is_empty() {
        links.push(format!("[BOJ]({})", meta.url));
    }
    if !meta.solvedac_url.is_empty() {
        links.push(format!("[solved.ac]({})", meta.solvedac_url));
    }

    format!(
        "| {} | {} | [{}]({}) | {} | {} | {} |",
        platform.display_name(),
        id,
        title,
        rel_code,
        meta.tier_name,
        tags,
        links.join(" · ")
    )
}

/// Renders the index table. `has_summary` reports whether an entry's
/// `Problem.md` exists.
pub fn render(entries: &[IndexEntry], has_summary: impl Fn(&IndexEntry) -> bool) -> String {
    let mut lines = vec![
        "# PS".to_string(),
        String::new(),
        "## Problems".to_string(),
        String::new(),
        "| Platform | ID | Title | Tier | Tags | Links |".to_string(),
        "|---|---:|---|---|---|---|".to_string(),
    ];
    for entry in entries {
        lines.push(render_row(entry, has_summary(entry)));
    }

    format!("{}\n", lines.join("\n").trim_end())
}

/// Rebuilds `root/README.md` from every recorded problem.
pub fn update(root: &Path) -> Result<PathBuf> {
    let entries = meta::scan_all(root);
    let content = render(&entries, |entry| {
        meta::problem_dir(root, entry.platform, &entry.dir_name)
            .join(PROBLEM_FILE)
            .exists()
    });

    fs::create_dir_all(root).map_err(|e| PsError::io(root, e))?;
    let path = root.join(README_FILE);
    fs::write(&path, content).map_err(|e| PsError::io(&path, e))?;
    debug!(path = %path.display(), problems = entries.len(), "regenerated index");
    Ok(path)
}
