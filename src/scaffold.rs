use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PsError, Result};
use crate::models::meta::problem_dir;
use crate::models::{Platform, ProblemMeta};

pub const PROBLEM_FILE: &str = "Problem.md";

/// Makes sure `root/platform/id/` exists along with an empty solution stub.
/// An existing stub is left untouched.
pub fn ensure_stub(root: &Path, platform: Platform, id: u32) -> Result<PathBuf> {
    let dir = problem_dir(root, platform, &id.to_string());
    fs::create_dir_all(&dir).map_err(|e| PsError::io(&dir, e))?;

    let stub = dir.join(platform.stub_file());
    match OpenOptions::new().write(true).create_new(true).open(&stub) {
        Ok(_) => debug!(path = %stub.display(), "created stub"),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %stub.display(), "stub already present")
        }
        Err(e) => return Err(PsError::io(&stub, e)),
    }

    Ok(stub)
}

pub fn render_problem_md(meta: &ProblemMeta) -> String {
    let mut lines = vec![
        format!("# {} {} - {}", meta.platform.display_name(), meta.id, meta.title),
        String::new(),
        format!("- Difficulty: **{}**", meta.tier_name),
    ];
    if !meta.tags.is_empty() {
        lines.push(format!("- Tags: {}", meta.tags.join(", ")));
    }
    lines.push(format!("- Link: {}", meta.url));
    lines.push(format!("- solved.ac: {}", meta.solvedac_url));
    lines.push(String::new());
    lines.push(
        "> Problem statements are not stored here (generated from solved.ac metadata).".to_string(),
    );

    format!("{}\n", lines.join("\n").trim_end())
}

/// Overwrites the problem's `Problem.md` summary.
pub fn write_problem_md(root: &Path, meta: &ProblemMeta) -> Result<PathBuf> {
    let dir = problem_dir(root, meta.platform, &meta.id.to_string());
    fs::create_dir_all(&dir).map_err(|e| PsError::io(&dir, e))?;

    let path = dir.join(PROBLEM_FILE);
    fs::write(&path, render_problem_md(meta)).map_err(|e| PsError::io(&path, e))?;
    debug!(path = %path.display(), "wrote problem summary");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn a_plus_b() -> ProblemMeta {
        ProblemMeta {
            title: "A+B".to_string(),
            tier: 1,
            tier_name: "Bronze V".to_string(),
            tags: vec!["Math".to_string(), "Implementation".to_string()],
            url: "https://www.acmicpc.net/problem/1000".to_string(),
            solvedac_url: "https://solved.ac/problem/1000".to_string(),
            ..ProblemMeta::placeholder(Platform::Boj, 1000)
        }
    }

    #[test]
    fn test_stub_created_empty() {
        let root = TempDir::new().unwrap();
        let stub = ensure_stub(root.path(), Platform::Boj, 1000).unwrap();

        assert_eq!(stub, root.path().join("boj").join("1000").join("Main.java"));
        assert_eq!(fs::read_to_string(&stub).unwrap(), "");
    }

    #[test]
    fn test_swea_stub_name() {
        let root = TempDir::new().unwrap();
        let stub = ensure_stub(root.path(), Platform::Swea, 42).unwrap();
        assert!(stub.ends_with("swea/42/Solution.java"));
        assert!(stub.is_file());
    }

    #[test]
    fn test_stub_is_idempotent() {
        let root = TempDir::new().unwrap();
        let first = ensure_stub(root.path(), Platform::Codetree, 7).unwrap();
        let second = ensure_stub(root.path(), Platform::Codetree, 7).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "");
    }

    #[test]
    fn test_existing_stub_is_not_truncated() {
        let root = TempDir::new().unwrap();
        let stub = ensure_stub(root.path(), Platform::Boj, 1000).unwrap();
        fs::write(&stub, "public class Main {}\n").unwrap();

        ensure_stub(root.path(), Platform::Boj, 1000).unwrap();
        assert_eq!(fs::read_to_string(&stub).unwrap(), "public class Main {}\n");
    }

    #[test]
    fn test_render_problem_md() {
        let expected = "# BOJ 1000 - A+B\n\
                        \n\
                        - Difficulty: **Bronze V**\n\
                        - Tags: Math, Implementation\n\
                        - Link: https://www.acmicpc.net/problem/1000\n\
                        - solved.ac: https://solved.ac/problem/1000\n\
                        \n\
                        > Problem statements are not stored here (generated from solved.ac metadata).\n";
        assert_eq!(render_problem_md(&a_plus_b()), expected);
    }

    #[test]
    fn test_render_without_tags_omits_line() {
        let mut meta = a_plus_b();
        meta.tags.clear();
        let rendered = render_problem_md(&meta);
        assert!(!rendered.contains("- Tags:"));
        assert!(rendered.contains("- Difficulty: **Bronze V**\n- Link: "));
    }

    #[test]
    fn test_write_problem_md_overwrites() {
        let root = TempDir::new().unwrap();
        let path = write_problem_md(root.path(), &a_plus_b()).unwrap();

        let mut renamed = a_plus_b();
        renamed.title = "A plus B".to_string();
        write_problem_md(root.path(), &renamed).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# BOJ 1000 - A plus B\n"));
        assert_eq!(content.matches("# BOJ").count(), 1);
    }
}
