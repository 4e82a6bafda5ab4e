//! Stream access modes.
//!
//! A [`Mode`] fixes, at construction time, whether a stream instance permits
//! read operations, write operations, or both. The capability set is derived
//! from the variant once; operations only ever ask the two predicate
//! methods, there is no per-call token parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Access capability of a stream, fixed for the life of the instance.
///
/// The default mode is [`Mode::ReadWrite`]: a stream constructed without an
/// explicit mode is fully read and write capable.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Read operations only.
    ReadOnly,
    /// Write operations only.
    WriteOnly,
    /// Opened for appending. Append streams answer both capability queries
    /// positively.
    Append,
    /// Full read and write capability.
    #[default]
    ReadWrite,
}

impl Mode {
    /// Returns true if streams in this mode permit read operations.
    #[inline]
    pub fn is_readable(&self) -> bool {
        matches!(self, Mode::ReadOnly | Mode::Append | Mode::ReadWrite)
    }

    /// Returns true if streams in this mode permit write operations.
    #[inline]
    pub fn is_writable(&self) -> bool {
        matches!(self, Mode::WriteOnly | Mode::Append | Mode::ReadWrite)
    }

    /// The short open-mode token conventionally naming this mode.
    pub fn token(&self) -> &'static str {
        match self {
            Mode::ReadOnly => "r",
            Mode::WriteOnly => "w",
            Mode::Append => "a",
            Mode::ReadWrite => "rw",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::ReadOnly => "read-only",
            Mode::WriteOnly => "write-only",
            Mode::Append => "append",
            Mode::ReadWrite => "read-write",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an open-mode token that is not in the
/// closed set accepted by [`Mode::from_str`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown stream mode token: {token:?}")]
pub struct UnknownModeToken {
    token: String,
}

/// Parses the conventional short tokens: `"r"`, `"w"`, `"a"` and `"rw"`.
impl FromStr for Mode {
    type Err = UnknownModeToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(Mode::ReadOnly),
            "w" => Ok(Mode::WriteOnly),
            "a" => Ok(Mode::Append),
            "rw" => Ok(Mode::ReadWrite),
            token => Err(UnknownModeToken { token: token.to_string() }),
        }
    }
}
