// SPDX-License-Identifier: MPL-2.0
//! Media duration and position arithmetic.

/// Total media length as reported by the media engine.
///
/// The length is unknown until the engine has loaded the media's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MediaDuration {
    /// Metadata has not loaded yet (or the engine could not determine it).
    #[default]
    Unknown,
    /// Duration in seconds, always finite and strictly positive.
    Known(f64),
}

impl MediaDuration {
    /// Builds a duration from engine-reported seconds.
    ///
    /// Engines report indefinite or invalid lengths as NaN, infinity or
    /// zero; all of those map to [`MediaDuration::Unknown`].
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self::Known(secs)
        } else {
            Self::Unknown
        }
    }

    /// Returns the duration in seconds if known.
    #[must_use]
    pub fn secs(self) -> Option<f64> {
        match self {
            Self::Known(secs) if secs.is_finite() && secs > 0.0 => Some(secs),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_known(self) -> bool {
        self.secs().is_some()
    }
}

impl From<Option<f64>> for MediaDuration {
    fn from(secs: Option<f64>) -> Self {
        secs.map_or(Self::Unknown, Self::from_secs)
    }
}

/// Position as a fraction of the duration, for the scrub slider.
///
/// Not clamped: a position reported past the end yields a value above 1.
#[must_use]
pub fn normalized_position(position_secs: f64, duration_secs: f64) -> f64 {
    position_secs / duration_secs
}
