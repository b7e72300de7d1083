//! error handling stuff
use {miette::Diagnostic, std::path::PathBuf, thiserror::Error};

#[derive(Debug, Error, Diagnostic)]
/// An error
pub enum ThemeError {
    /// the palette source file doesn't exist
    #[error("source file not found: {}", .0.display())]
    #[diagnostic(
        code(skthemer::missing_source),
        help("point --from-index at an existing HTML/CSS file")
    )]
    MissingSource(PathBuf),

    /// the variable mapping file doesn't exist
    #[error("vars file not found: {}", .0.display())]
    #[diagnostic(
        code(skthemer::missing_vars),
        help("point --vars at an existing JSON file")
    )]
    MissingVars(PathBuf),

    /// the variable mapping file isn't a JSON object of strings
    #[error("vars file {} is not a JSON object of strings: {source}", .path.display())]
    #[diagnostic(code(skthemer::malformed_vars))]
    MalformedVars {
        /// the offending file
        path: PathBuf,
        /// what serde_json complained about
        source: serde_json::Error,
    },

    /// a `KEY=VALUE` override without a `=`
    #[error("--set expects KEY=VALUE, got: {0}")]
    #[diagnostic(code(skthemer::malformed_override))]
    MalformedOverride(String),

    /// a `KEY=VALUE` override with nothing before the `=`
    #[error("empty KEY in --set: {0}")]
    #[diagnostic(code(skthemer::empty_key))]
    EmptyKey(String),

    /// nothing ended up in the variable mapping
    #[error("no variables generated, use --from-index, --vars or --set")]
    #[diagnostic(code(skthemer::no_variables))]
    NoVariables,

    /// an IO error
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),

    /// a json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// a rocket error, flattened since rocket's errors panic if dropped unhandled
    #[error("server error: {0}")]
    Rocket(String),

    /// a miette hook install error
    #[error("error installing miette hook: {0}")]
    MietteInstall(#[from] miette::InstallError),

    /// a report from color_eyre
    #[error("{0}")]
    EyreReport(#[from] color_eyre::Report),

    /// a custom error
    #[error("error: {0}")]
    Other(String),
}

impl ThemeError {
    /// whether this error came from resolving the user's input
    ///
    /// those are reported as a single line and exit with code 2, everything
    /// else is an unexpected fault
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingSource(_)
                | Self::MissingVars(_)
                | Self::MalformedVars { .. }
                | Self::MalformedOverride(_)
                | Self::EmptyKey(_)
                | Self::NoVariables
        )
    }

    /// the process exit code this error maps to
    pub fn exit_code(&self) -> u8 {
        if self.is_input_error() { 2 } else { 1 }
    }
}

impl From<String> for ThemeError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

impl From<rocket::Error> for ThemeError {
    fn from(value: rocket::Error) -> Self {
        Self::Rocket(value.to_string())
    }
}

/// A result using [`ThemeError`] as the `Err` variant
pub type Result<T, U = ThemeError> = miette::Result<T, U>;

/// bail
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::ThemeError::from(String::from($msg)))
    };

    ($err:expr $(,)?) => {
        return Err($crate::error::ThemeError::from($err))
    };

    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::ThemeError::from(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_exit_with_two() {
        assert_eq!(ThemeError::NoVariables.exit_code(), 2);
        assert_eq!(ThemeError::MalformedOverride("x".into()).exit_code(), 2);
        assert_eq!(ThemeError::EmptyKey("=v".into()).exit_code(), 2);
        assert_eq!(
            ThemeError::MissingSource(PathBuf::from("index.html")).exit_code(),
            2
        );
    }

    #[test]
    fn test_faults_exit_with_one() {
        let io = std::io::Error::other("disk on fire");
        assert_eq!(ThemeError::from(io).exit_code(), 1);
        assert_eq!(ThemeError::from("boom".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ThemeError::MalformedOverride("novalue".into()).to_string(),
            "--set expects KEY=VALUE, got: novalue"
        );
        assert_eq!(
            ThemeError::MissingVars(PathBuf::from("vars.json")).to_string(),
            "vars file not found: vars.json"
        );
    }
}
