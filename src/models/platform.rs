use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Boj,
    Swea,
    Codetree,
}

impl Platform {
    /// Scan order of the platform directories under the root.
    pub const ALL: [Platform; 3] = [Platform::Boj, Platform::Swea, Platform::Codetree];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Boj => "boj",
            Platform::Swea => "swea",
            Platform::Codetree => "codetree",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Boj => "BOJ",
            Platform::Swea => "SWEA",
            Platform::Codetree => "CODETREE",
        }
    }

    pub fn stub_file(&self) -> &'static str {
        match self {
            Platform::Swea => "Solution.java",
            Platform::Boj | Platform::Codetree => "Main.java",
        }
    }

    /// Only BOJ problems have solved.ac ranking data.
    pub fn is_tracked(&self) -> bool {
        matches!(self, Platform::Boj)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boj" => Ok(Platform::Boj),
            "swea" => Ok(Platform::Swea),
            "codetree" => Ok(Platform::Codetree),
            _ => Err("platform must be boj|swea|codetree".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!("boj".parse::<Platform>().unwrap(), Platform::Boj);
        assert_eq!("  SWEA ".parse::<Platform>().unwrap(), Platform::Swea);
        assert_eq!("CodeTree".parse::<Platform>().unwrap(), Platform::Codetree);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "leetcode".parse::<Platform>().unwrap_err();
        assert_eq!(err, "platform must be boj|swea|codetree");
        assert!("".parse::<Platform>().is_err());
    }

    #[test]
    fn test_stub_file() {
        assert_eq!(Platform::Boj.stub_file(), "Main.java");
        assert_eq!(Platform::Swea.stub_file(), "Solution.java");
        assert_eq!(Platform::Codetree.stub_file(), "Main.java");
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Codetree).unwrap(), "\"codetree\"");
        assert_eq!(serde_json::to_string(&Platform::Swea).unwrap(), "\"swea\"");
    }
}
