use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error opening file: {}: {source}", path.display())]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("Error reading input: {0}")]
    Read(#[source] io::Error),

    #[error("Error writing to file: {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Error writing output")]
    Stdout(#[source] io::Error),
}

impl ConvertError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileOpen { .. } | Self::Read(_) | Self::Write { .. } | Self::Stdout(_) => {
                ExitCode::Failure
            }
        }
    }

    /// True when stdout was closed by the downstream reader.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Stdout(err) => matches!(
                err.kind(),
                io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
            ),
            _ => false,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
