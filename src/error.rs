use miette::Diagnostic;
use thiserror::Error;

/// Main error type for doctag operations.
///
/// The tag parser itself never fails; these cover the file, config and
/// output layers around it.
#[derive(Error, Diagnostic, Debug)]
pub enum DocError {
    #[error("IO error: {0}")]
    #[diagnostic(code(doctag::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(doctag::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(doctag::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(doctag::output))]
    Output { message: String },
}

pub type Result<T> = std::result::Result<T, DocError>;
