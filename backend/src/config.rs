//! Server settings read from the environment.
//!
//! | variable             | default          |
//! |----------------------|------------------|
//! | `FORMS_HOST`         | `127.0.0.1`      |
//! | `FORMS_PORT`         | `8080`           |
//! | `FORMS_DB_PATH`      | `forms.sqlite`   |
//! | `FORMS_OPEN_BROWSER` | `true`           |
//!
//! Unparseable values fall back to the default with a warning.

use log::warn;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file holding saved forms. Created on first use.
    pub db_path: PathBuf,
    /// Open the default browser on the app URL after start-up.
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: PathBuf::from("forms.sqlite"),
            open_browser: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(host) = lookup("FORMS_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("FORMS_PORT") {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("FORMS_PORT={} is not a valid port, using {}", port, config.port),
            }
        }
        if let Some(path) = lookup("FORMS_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(flag) = lookup("FORMS_OPEN_BROWSER") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.open_browser = true,
                "0" | "false" | "no" => config.open_browser = false,
                _ => warn!("FORMS_OPEN_BROWSER={} is not a boolean, ignoring", flag),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.db_path, PathBuf::from("forms.sqlite"));
        assert!(config.open_browser);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("FORMS_HOST", "0.0.0.0"),
            ("FORMS_PORT", "9000"),
            ("FORMS_DB_PATH", "/tmp/forms.db"),
            ("FORMS_OPEN_BROWSER", "no"),
        ]));
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.db_path, PathBuf::from("/tmp/forms.db"));
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("FORMS_PORT", "eighty"),
            ("FORMS_OPEN_BROWSER", "maybe"),
        ]));
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
    }
}
