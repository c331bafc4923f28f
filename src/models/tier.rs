const TIER_NAMES: [&str; 31] = [
    "Unrated",
    "Bronze V", "Bronze IV", "Bronze III", "Bronze II", "Bronze I",
    "Silver V", "Silver IV", "Silver III", "Silver II", "Silver I",
    "Gold V", "Gold IV", "Gold III", "Gold II", "Gold I",
    "Platinum V", "Platinum IV", "Platinum III", "Platinum II", "Platinum I",
    "Diamond V", "Diamond IV", "Diamond III", "Diamond II", "Diamond I",
    "Ruby V", "Ruby IV", "Ruby III", "Ruby II", "Ruby I",
];

/// solved.ac level to tier label. Unknown levels are "Unrated".
pub fn tier_name(level: u32) -> &'static str {
    usize::try_from(level)
        .ok()
        .and_then(|i| TIER_NAMES.get(i))
        .copied()
        .unwrap_or(TIER_NAMES[0])
}
