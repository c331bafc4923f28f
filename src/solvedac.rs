use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::models::{tier_name, Platform, ProblemMeta};

const API_BASE: &str = "https://solved.ac/api/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolvedAcProblem {
    title_ko: Option<String>,
    title: Option<String>,
    level: Option<Value>,
    tags: Option<Vec<SolvedAcTag>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolvedAcTag {
    key: Option<String>,
    display_names: Option<Vec<DisplayName>>,
}

#[derive(Debug, Default, Deserialize)]
struct DisplayName {
    language: Option<String>,
    name: Option<String>,
}

impl SolvedAcTag {
    fn localized(&self, language: &str) -> Option<&str> {
        self.display_names
            .iter()
            .flatten()
            .find(|d| d.language.as_deref() == Some(language))
            .and_then(|d| d.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Korean name, then English, then the raw key.
    fn resolve(&self) -> Option<String> {
        self.localized("ko")
            .or_else(|| self.localized("en"))
            .or_else(|| self.key.as_deref().filter(|key| !key.is_empty()))
            .map(str::to_string)
    }
}

fn parse_level(level: Option<&Value>) -> u32 {
    let parsed = match level {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.and_then(|l| u32::try_from(l).ok()).unwrap_or(0)
}

impl SolvedAcProblem {
    fn into_meta(self, id: u32) -> ProblemMeta {
        let title = self
            .title_ko
            .filter(|t| !t.is_empty())
            .or(self.title.filter(|t| !t.is_empty()))
            .unwrap_or_default();
        let tier = parse_level(self.level.as_ref());
        let tags = self
            .tags
            .unwrap_or_default()
            .iter()
            .filter_map(SolvedAcTag::resolve)
            .collect();

        ProblemMeta {
            platform: Platform::Boj,
            id,
            title,
            tier,
            tier_name: tier_name(tier).to_string(),
            tags,
            url: format!("https://www.acmicpc.net/problem/{}", id),
            solvedac_url: format!("https://solved.ac/problem/{}", id),
        }
    }
}

pub struct SolvedAcClient {
    client: Client,
    base_url: String,
}

impl SolvedAcClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ps-init/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Looks up one BOJ problem. Any transport, status or decode failure is
    /// returned as-is; there is no retry.
    pub fn fetch(&self, id: u32) -> Result<ProblemMeta> {
        let url = format!("{}/problem/show", self.base_url);
        debug!(%url, id, "fetching problem metadata");

        let response = self
            .client
            .get(&url)
            .query(&[("problemId", id)])
            .send()?
            .error_for_status()?;
        debug!(status = %response.status(), "solved.ac responded");

        let problem: SolvedAcProblem = response.json()?;
        Ok(problem.into_meta(id))
    }
}
