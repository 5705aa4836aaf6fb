//! Runtime configuration resolved from CLI arguments and environment

use std::path::PathBuf;

use crate::cli::Args;

/// Backend address used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "crew_console=info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        let backend_url = args.backend_url.trim().trim_end_matches('/');
        let backend_url = if backend_url.is_empty() {
            DEFAULT_BACKEND_URL.to_string()
        } else {
            backend_url.to_string()
        };

        Self {
            backend_url,
            log_file: args.log_file.clone().unwrap_or_else(default_log_file),
        }
    }
}

/// Get the path to the default log file
pub fn default_log_file() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "crew-console", "crew-console") {
        proj_dirs.data_dir().join("crew-console.log")
    } else {
        PathBuf::from("crew-console.log")
    }
}
