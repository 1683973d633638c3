// ⚠️ Error Types - Everything that can stop a merge run
// Any error is fatal for the run: there are no retries and no partial output.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LineupError {
    /// A list, schedule or config file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// A list file has no author line.
    EmptyList { path: PathBuf },
    /// A schedule line that does not follow `<act>,<start> - <end>`.
    MalformedLine {
        file: String,
        line: usize,
        content: String,
        reason: String,
    },
    /// Config JSON parse or validation error.
    ConfigParse(String),
}

impl LineupError {
    pub fn malformed(file: &str, line: usize, content: &str, reason: impl Into<String>) -> Self {
        LineupError::MalformedLine {
            file: file.to_string(),
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LineupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::EmptyList { path } => {
                write!(f, "list '{}' is empty (expected an author name on the first line)", path.display())
            }
            Self::MalformedLine { file, line, content, reason } => {
                write!(f, "{file}:{line}: {reason}: '{content}'")
            }
            Self::ConfigParse(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for LineupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
