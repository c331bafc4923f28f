use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::models::{meta, Platform, ProblemMeta};
use crate::readme;
use crate::scaffold::{ensure_stub, write_problem_md};
use crate::solvedac::SolvedAcClient;

pub fn init_problem(root: &Path, platform: Platform, id: u32) -> Result<PathBuf> {
    if platform.is_tracked() {
        let client = SolvedAcClient::new()?;
        init_tracked(root, &client, id)
    } else {
        init_other(root, platform, id)
    }
}

/// BOJ: metadata is fetched before anything is written, so a failed lookup
/// leaves the tree untouched.
pub fn init_tracked(root: &Path, client: &SolvedAcClient, id: u32) -> Result<PathBuf> {
    let problem = client.fetch(id)?;
    info!(id, title = %problem.title, tier = %problem.tier_name, "fetched problem");

    let stub = ensure_stub(root, Platform::Boj, id)?;
    write_problem_md(root, &problem)?;
    meta::save(root, &problem)?;
    readme::update(root)?;
    Ok(stub)
}

pub fn init_other(root: &Path, platform: Platform, id: u32) -> Result<PathBuf> {
    let stub = ensure_stub(root, platform, id)?;
    meta::save(root, &ProblemMeta::placeholder(platform, id))?;
    readme::update(root)?;
    Ok(stub)
}
