//! configuration validation stuff
use crate::{config::options::*, validator, validator_nested};

/// trait for validating config structs
pub trait Validate {
    /// validate the config
    fn validate(&self) -> Result<(), Vec<String>>;

    /// check if the config is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// whether a string is an absolute http(s) url
fn is_http_url(v: &str) -> bool {
    url::Url::parse(v).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

validator! { PackageCfg,
    name => |v: &String| !v.trim().is_empty(),
        "must not be empty";
    identifier => |v: &String| !v.trim().is_empty() && !v.contains(char::is_whitespace),
        "must be non-empty and contain no whitespace";
    version => |v: &String| !v.trim().is_empty(),
        "must not be empty";
}

validator! { ServerCfg,
    host => |v: &String| !v.trim().is_empty(),
        "must not be empty";
    port => |v: &u16| *v > 0,
        "must be greater than 0";
}

validator! { OutputCfg,
    dir => |v: &String| !v.trim().is_empty(),
        "must not be empty";
    cdn => |v: &String| v.is_empty() || is_http_url(v),
        "must be empty or an http(s) url";
    marketing_url => |v: &String| v.is_empty() || is_http_url(v),
        "must be empty or an http(s) url";
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

validator! { LoggingConfig,
    level => |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str()),
        "must be one of: trace, debug, info, warn, error, off";
}

validator_nested! { Settings,
    fields: {}
    nested: {
        package;
        server;
        output;
        logging;
    }
}

/// format validation errors
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().is_valid());
    }

    #[test]
    fn test_nested_errors_are_prefixed() {
        let mut cfg = Settings::default();
        cfg.server = Some(ServerCfg {
            port: Some(0),
            ..ServerCfg::default()
        });
        cfg.output = Some(OutputCfg {
            cdn: Some("not a url".into()),
            ..OutputCfg::default()
        });

        let errors = cfg.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "server.port: must be greater than 0".to_string(),
                "output.cdn: must be empty or an http(s) url".to_string(),
            ]
        );
    }

    #[test]
    fn test_log_level() {
        let mut logging = LoggingConfig::default();
        assert!(logging.is_valid());

        logging.level = Some("LOUD".into());
        assert!(!logging.is_valid());
    }

    #[test]
    fn test_urls() {
        assert!(is_http_url("https://cdn.jsdelivr.net/gh/user/repo@latest/dist"));
        assert!(is_http_url("http://localhost:8001"));
        assert!(!is_http_url("cdn.example/pkg"));
    }

    #[test]
    fn test_format_errors() {
        let out = format_validation_errors(&["a: bad".into(), "b: worse".into()]);
        assert_eq!(
            out,
            "Configuration validation failed:\n  1. a: bad\n  2. b: worse\n"
        );
    }
}
