use std::path::{Path, PathBuf};

use serde_derive::Deserialize;

use crate::{
    error::{ApiError, Result},
    util::logging::{self, LogLevel},
};

pub const DEFAULT_BASE_URL: &str = "https://api.fitbit.com/1/user";
pub const DEFAULT_USER_ID: &str = "-";
pub const SECRETS_FILE: &str = "secrets.toml";
pub const SECRETS_ENV: &str = "FITBIT_SECRETS";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_true() -> bool {
    true
}

/// `[logging]` table: component codes to silence or to log verbosely.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LogSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub quiet: Vec<String>,

    #[serde(default)]
    pub verbose: Vec<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            quiet: Vec::new(),
            verbose: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SheetsSecrets {
    pub access_token: String,
    pub spreadsheet_id: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub access_token: String,

    #[serde(default = "default_user_id")]
    pub user_id: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub logging: LogSettings,

    #[serde(default)]
    pub sheets: Option<SheetsSecrets>,
}

impl Config {
    pub fn new(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            user_id: default_user_id(),
            base_url: default_base_url(),
            verbose: false,
            logging: LogSettings::default(),
            sheets: None,
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ApiError::Config(e.to_string()))
    }

    pub fn read_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ApiError::Config(format!("unable to open {}: {}", path.display(), e)))?;

        Config::parse(&content)
    }

    /// `$FITBIT_SECRETS` when set, otherwise `secrets.toml` in the working directory.
    pub fn secrets_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(SECRETS_ENV) {
            return Ok(PathBuf::from(path));
        }

        std::env::current_dir()
            .map(|dir| dir.join(SECRETS_FILE))
            .map_err(|e| ApiError::Config(e.to_string()))
    }

    pub fn load() -> Result<Self> {
        Config::read_from_file(&Config::secrets_path()?)
    }

    /// Pushes the global level and the per-component flags into the process logger.
    pub fn apply_logging(&self) {
        logging::set_global_logging(self.logging.enabled);

        if self.verbose {
            logging::set_global_level(LogLevel::VERBOSE);
        }
        for cc in &self.logging.verbose {
            logging::enable_cc(cc, LogLevel::VERBOSE);
        }
        for cc in &self.logging.quiet {
            logging::disable_cc(cc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn minimal_secrets_get_defaults() {
        let config = Config::parse(r#"access_token = "abc""#).unwrap();

        assert_eq!(config, Config::new("abc"));
        assert_eq!(config.user_id, "-");
        assert_eq!(config.base_url, "https://api.fitbit.com/1/user");
    }

    #[test]
    fn full_secrets_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
access_token = "abc"
user_id = "7XYZ12"
verbose = true

[logging]
quiet = ["FitbitApi"]

[sheets]
access_token = "sheet-token"
spreadsheet_id = "1AbC"
"#
        )
        .unwrap();

        let config = Config::read_from_file(file.path()).unwrap();

        assert_eq!(config.user_id, "7XYZ12");
        assert!(config.verbose);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.quiet, vec!["FitbitApi".to_string()]);
        assert_eq!(config.sheets.unwrap().spreadsheet_id, "1AbC");
    }

    #[test]
    fn missing_token_is_a_config_error() {
        assert!(matches!(
            Config::parse(r#"user_id = "-""#),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::read_from_file(&dir.path().join("secrets.toml"));

        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
