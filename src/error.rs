//! Crate-level error types.

use std::fmt;

/// Errors produced by the terrella crate.
///
/// Expected "nothing found" outcomes (a ray missing the globe, no point
/// within the similarity cutoff) are not errors; they are `None` results.
/// The variants here are precondition violations and I/O or parse failures.
#[derive(Debug)]
pub enum GlobeError {
    /// Viewport with zero width or height.
    DegenerateViewport {
        /// Viewport width in pixels.
        width: u32,
        /// Viewport height in pixels.
        height: u32,
    },
    /// Sphere radius that is negative or not finite.
    InvalidRadius(f32),
    /// Latitude/longitude pair that is not finite.
    InvalidCoordinate {
        /// Latitude in degrees.
        lat: f32,
        /// Longitude in degrees.
        lng: f32,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// JSON dataset parsing failure.
    DatasetParse(String),
}

impl fmt::Display for GlobeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateViewport { width, height } => {
                write!(f, "degenerate viewport: {width}x{height}")
            }
            Self::InvalidRadius(r) => write!(f, "invalid sphere radius: {r}"),
            Self::InvalidCoordinate { lat, lng } => {
                write!(f, "invalid coordinate: lat={lat}, lng={lng}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::DatasetParse(msg) => {
                write!(f, "dataset parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GlobeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlobeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_dimensions() {
        let err = GlobeError::DegenerateViewport {
            width: 0,
            height: 480,
        };
        assert_eq!(err.to_string(), "degenerate viewport: 0x480");
    }

    #[test]
    fn io_error_is_exposed_as_source() {
        use std::error::Error;
        let err = GlobeError::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(GlobeError::InvalidRadius(-1.0).source().is_none());
    }
}
