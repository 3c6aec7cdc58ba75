//! Configuration
//!
//! Settings come from environment variables, with `.env` files layered
//! underneath (see [`load_dotenv`]). [`Config::load`] reads everything once at
//! startup; the result is passed explicitly to whatever needs it.
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee::Config;
//!
//! let config = Config::load(std::path::Path::new("."));
//! println!("{} on port {}", config.app.name, config.server.port);
//! ```

pub mod env;
pub mod providers;

pub use env::{env, load_dotenv, Environment};
pub use providers::{AppConfig, LogFormat, ServerConfig};

use std::path::Path;

/// All configuration for one process
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load `.env` files from `project_root`, then read the environment
    pub fn load(project_root: &Path) -> Self {
        env::load_dotenv(project_root);
        Self::from_env()
    }

    /// Read the process environment only
    pub fn from_env() -> Self {
        Self {
            app: AppConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }
}
