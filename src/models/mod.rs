pub mod config;
pub mod meta;
pub mod platform;
pub mod tier;

// config and meta are accessed as crate::models::config::resolve_root, crate::models::meta::save, ...
pub use meta::{IndexEntry, ProblemMeta};
pub use platform::Platform;
pub use tier::tier_name;
