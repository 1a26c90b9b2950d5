//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of the spreadsheet API that receives captured emails
    /// Example: https://docspace.example.com
    pub capture_api_url: Option<String>,

    /// Bearer token for the spreadsheet API
    pub capture_api_token: Option<String>,

    /// Identifier of the spreadsheet file rows are appended to
    pub capture_file_id: Option<String>,

    /// Emit Strict-Transport-Security on every response
    pub hsts: bool,

    /// Report spreadsheet write failures to the caller instead of
    /// answering with success
    pub surface_capture_failures: bool,
}

/// Credentials needed to forward a captured email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget {
    pub api_url: String,
    pub token: String,
    pub file_id: String,
}

impl CaptureTarget {
    /// Row insertion endpoint for the configured file
    pub fn rows_url(&self) -> String {
        format!(
            "{}/api/2.0/files/{}/rows",
            self.api_url.trim_end_matches('/'),
            self.file_id
        )
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let flag = |name: &str| var(name).is_some_and(|v| parse_flag(&v));

        Self {
            capture_api_url: var("CAPTURE_API_URL"),
            capture_api_token: var("CAPTURE_API_TOKEN"),
            capture_file_id: var("CAPTURE_FILE_ID"),
            hsts: flag("SECURITY_HSTS"),
            surface_capture_failures: flag("CAPTURE_SURFACE_FAILURES"),
        }
    }

    /// All three capture settings, or `None` if any is missing
    pub fn capture_target(&self) -> Option<CaptureTarget> {
        Some(CaptureTarget {
            api_url: self.capture_api_url.clone()?,
            token: self.capture_api_token.clone()?,
            file_id: self.capture_file_id.clone()?,
        })
    }

    /// Check if email capture is fully configured
    pub fn has_capture(&self) -> bool {
        self.capture_target().is_some()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_config() -> Config {
        Config {
            capture_api_url: Some("https://docs.example.com".to_string()),
            capture_api_token: Some("token-123".to_string()),
            capture_file_id: Some("42".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_capture_target_with_all_fields() {
        let target = full_config().capture_target().unwrap();

        assert_eq!(target.api_url, "https://docs.example.com");
        assert_eq!(target.token, "token-123");
        assert_eq!(target.file_id, "42");
    }

    #[test]
    fn test_capture_target_missing_any_field() {
        let mut config = full_config();
        config.capture_api_token = None;
        assert!(config.capture_target().is_none());
        assert!(!config.has_capture());

        let mut config = full_config();
        config.capture_file_id = None;
        assert!(!config.has_capture());

        let mut config = full_config();
        config.capture_api_url = None;
        assert!(!config.has_capture());
    }

    #[test]
    fn test_rows_url() {
        let target = full_config().capture_target().unwrap();
        assert_eq!(
            target.rows_url(),
            "https://docs.example.com/api/2.0/files/42/rows"
        );
    }

    #[test]
    fn test_rows_url_trims_trailing_slash() {
        let mut config = full_config();
        config.capture_api_url = Some("https://docs.example.com/".to_string());
        assert_eq!(
            config.capture_target().unwrap().rows_url(),
            "https://docs.example.com/api/2.0/files/42/rows"
        );
    }

    #[test]
    fn test_defaults_are_off() {
        let config = Config::default();
        assert!(!config.hsts);
        assert!(!config.surface_capture_failures);
        assert!(!config.has_capture());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(parse_flag("on"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CAPTURE_API_URL", "https://docs.example.com"),
            ("CAPTURE_API_TOKEN", "token-123"),
            ("CAPTURE_FILE_ID", "42"),
            ("SECURITY_HSTS", "true"),
            ("CAPTURE_SURFACE_FAILURES", "0"),
        ]);
        let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        let target = config.capture_target().unwrap();
        assert_eq!(target.api_url, "https://docs.example.com");
        assert_eq!(target.token, "token-123");
        assert_eq!(target.file_id, "42");
        assert!(config.hsts);
        assert!(!config.surface_capture_failures);
    }

    #[test]
    fn test_config_from_lookup_blank_is_unset() {
        let config = Config::from_lookup(|name| match name {
            "CAPTURE_API_URL" => Some("https://docs.example.com".to_string()),
            "CAPTURE_API_TOKEN" => Some("   ".to_string()),
            "CAPTURE_FILE_ID" => Some("42".to_string()),
            "CAPTURE_SURFACE_FAILURES" => Some("yes".to_string()),
            _ => None,
        });

        assert!(config.capture_target().is_none());
        assert!(!config.hsts);
        assert!(config.surface_capture_failures);
    }

    #[test]
    fn test_config_from_env() {
        // No other test reads or writes these variables
        unsafe {
            std::env::set_var("CAPTURE_API_URL", "https://sheets.example.com");
            std::env::set_var("CAPTURE_API_TOKEN", "env-token");
            std::env::set_var("CAPTURE_FILE_ID", "7");
            std::env::set_var("SECURITY_HSTS", "on");
            std::env::set_var("CAPTURE_SURFACE_FAILURES", "true");
        }

        let config = Config::from_env();
        let target = config.capture_target().unwrap();
        assert_eq!(target.rows_url(), "https://sheets.example.com/api/2.0/files/7/rows");
        assert_eq!(target.token, "env-token");
        assert!(config.hsts);
        assert!(config.surface_capture_failures);
    }
}
