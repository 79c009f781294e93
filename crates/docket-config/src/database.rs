//! Local libSQL database configuration.

use serde::{Deserialize, Serialize};

/// Path used when nothing else is configured.
pub const DEFAULT_DATABASE_PATH: &str = "docket.db";

fn default_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file path, or `:memory:` for a throwaway store.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the configured store lives only for the process lifetime.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "docket.db");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn memory_path_detected() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
        };
        assert!(config.is_in_memory());
    }
}
