// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Diagnostics(String),
    Playback(PlaybackError),
}

/// Failures reported by the media engine behind a player.
///
/// None of these ever reach the control overlay as an error: a failed
/// player simply reports that it is not playing.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// The media file could not be fetched (DNS, TLS, HTTP status, timeout).
    Network(String),

    /// The container or codec is not supported by the engine.
    UnsupportedFormat,

    /// Decoding failed during playback.
    Decoding(String),

    /// Generic error with raw message.
    Other(String),
}

impl PlaybackError {
    /// Categorizes a raw engine message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("network")
            || msg_lower.contains("connection")
            || msg_lower.contains("timed out")
            || msg_lower.contains("http")
            || msg_lower.contains("dns")
        {
            return PlaybackError::Network(msg.to_string());
        }

        if msg_lower.contains("unsupported") || msg_lower.contains("unknown format") {
            return PlaybackError::UnsupportedFormat;
        }

        if msg_lower.contains("decode")
            || msg_lower.contains("corrupt")
            || msg_lower.contains("packet")
        {
            return PlaybackError::Decoding(msg.to_string());
        }

        PlaybackError::Other(msg.to_string())
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Network(msg) => write!(f, "Network error: {}", msg),
            PlaybackError::UnsupportedFormat => write!(f, "Unsupported media format"),
            PlaybackError::Decoding(msg) => write!(f, "Decoding failed: {}", msg),
            PlaybackError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Diagnostics(e) => write!(f, "Diagnostics Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Diagnostics(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
