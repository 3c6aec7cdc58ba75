use std::path::Path;

/// Environment type enumeration
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Local,
    Development,
    Staging,
    Production,
    Testing,
    Custom(String),
}

impl Environment {
    /// Detect environment from APP_ENV or default to Local
    pub fn detect() -> Self {
        Self::from_name(std::env::var("APP_ENV").ok().as_deref())
    }

    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("production") => Self::Production,
            Some("staging") => Self::Staging,
            Some("development") => Self::Development,
            Some("testing") => Self::Testing,
            Some("local") | Some("") | None => Self::Local,
            Some(other) => Self::Custom(other.to_string()),
        }
    }

    /// The .env file suffix for this environment
    pub fn env_file_suffix(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Custom(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.env_file_suffix())
    }
}

/// Load environment variables from .env files with proper precedence
///
/// Precedence (later files override earlier):
/// 1. .env
/// 2. .env.local
/// 3. .env.{environment}
/// 4. .env.{environment}.local
/// 5. Actual system environment variables (highest priority)
pub fn load_dotenv(project_root: &Path) -> Environment {
    let env = Environment::detect();
    let suffix = env.env_file_suffix();

    // dotenvy never overwrites a variable that is already set, so files are
    // loaded from most to least specific.
    let files = [
        format!(".env.{}.local", suffix),
        format!(".env.{}", suffix),
        ".env.local".to_string(),
        ".env".to_string(),
    ];
    for file in files {
        let path = project_root.join(&file);
        if dotenvy::from_path(&path).is_ok() {
            tracing::debug!(file = %path.display(), "loaded env file");
        }
    }

    env
}

/// Get an environment variable with a default value
///
/// Unset or unparseable values fall back to `default`.
///
/// # Example
/// ```
/// use marquee::config::env;
///
/// let port: u16 = env("MARQUEE_DOC_PORT", 3000);
/// assert_eq!(port, 3000);
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_names() {
        assert_eq!(Environment::from_name(None), Environment::Local);
        assert_eq!(Environment::from_name(Some("production")), Environment::Production);
        assert_eq!(
            Environment::from_name(Some("preview")),
            Environment::Custom("preview".to_string())
        );
        assert_eq!(Environment::Staging.to_string(), "staging");
    }

    #[test]
    fn env_falls_back_on_missing_keys() {
        let value: u16 = env("MARQUEE_TEST_SURELY_UNSET_KEY", 42);
        assert_eq!(value, 42);
    }
}
