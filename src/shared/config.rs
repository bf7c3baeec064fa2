//! Application configuration. Format tag, meeting file, path resolution.

use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_FORMAT: &str = "json";
pub const DEFAULT_MEETING_PATH: &str = "files/meeting.json";

/// Environment prefix: `MEETING_LOADER_FORMAT`, `MEETING_LOADER_MEETING_PATH`, ...
pub const ENV_PREFIX: &str = "MEETING_LOADER";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Format tag (`json` or `xml`). Read from MEETING_LOADER_FORMAT.
    #[serde(default)]
    pub format: Option<String>,

    /// Path of the root meeting file. Read from MEETING_LOADER_MEETING_PATH.
    #[serde(default)]
    pub meeting_path: Option<String>,

    /// Resolve participant files against the meeting file's directory (default true).
    /// Read from MEETING_LOADER_PARTICIPANTS_RELATIVE_TO_MEETING.
    #[serde(default)]
    pub participants_relative_to_meeting: Option<bool>,
}

impl AppConfig {
    /// Load from the environment and an optional file named by MEETING_LOADER_CONFIG.
    /// `.env` is applied by the caller before this runs.
    pub fn load() -> Result<Self, config::ConfigError> {
        let file = std::env::var(format!("{}_CONFIG", ENV_PREFIX)).ok();
        Self::load_from(file.as_deref().map(Path::new))
    }

    /// Like [`AppConfig::load`] with an explicit config file. Environment wins over the file.
    pub fn load_from(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(file, ENV_PREFIX)
    }

    fn build(file: Option<&Path>, env_prefix: &str) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::from(path));
        }
        c = c.add_source(config::Environment::with_prefix(env_prefix));
        c.build()?.try_deserialize()
    }

    pub fn format_or_default(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }

    pub fn meeting_path_or_default(&self) -> &str {
        self.meeting_path.as_deref().unwrap_or(DEFAULT_MEETING_PATH)
    }

    pub fn participants_relative_to_meeting_or_default(&self) -> bool {
        self.participants_relative_to_meeting.unwrap_or(true)
    }
}
