use std::fmt;

/// the failure kinds of the sweep pipeline.
///
/// everything that happens on the simulate-and-extract path is eventually
/// collapsed to a `0.0` result by the reporting step, but the kind is kept
/// distinct here so the logs can tell a crashed simulator from unparsable
/// output. `InvalidSelector` is the exception: it is a caller error and is
/// never collapsed.
#[derive(Debug)]
pub enum SweepError {
    /// missing environment variable or unreadable configuration
    Config(String),
    /// an expected field could not be found in the simulator output
    Parse { field: &'static str },
    /// the target selector string is not one of the recognized choices
    InvalidSelector(String),
    /// an external tool exited nonzero
    Subprocess { command: String, code: Option<i32> },
    Io(std::io::Error),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Config(msg) => write!(f, "configuration error: {}", msg),
            SweepError::Parse { field } => {
                write!(f, "missing field `{}` in simulator output", field)
            }
            SweepError::InvalidSelector(key) => {
                write!(f, "unrecognised target selector `{}`", key)
            }
            SweepError::Subprocess { command, code } => match code {
                Some(code) => write!(f, "`{}` exited with status {}", command, code),
                None => write!(f, "`{}` was terminated by a signal", command),
            },
            SweepError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SweepError {
    fn from(e: std::io::Error) -> Self {
        SweepError::Io(e)
    }
}
