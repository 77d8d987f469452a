//! Error types for pattern seeding and mesh output.
//!
//! Seeding is the only part of the core that can fail. Stepping and surface
//! synthesis are total; their degraded cases are reported through `tracing`
//! instead.

use thiserror::Error;

/// A seed pattern does not fit the requested grid.
///
/// Callers probing for a workable grid size recover from exactly this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "grid too small for pattern '{pattern}': {width}x{height} given, \
         at least {min_width}x{min_height} required"
    )]
    GridTooSmall {
        pattern: &'static str,
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },

    #[error("grid too small for pattern 'cross': bar length {bar_length} does not fit in {width}x{height}")]
    BarTooLong {
        bar_length: usize,
        width: usize,
        height: usize,
    },

    #[error("cell ({x}, {y}) lies outside the {width}x{height} grid")]
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("malformed pattern: {0}")]
    MalformedPattern(String),
}

/// Failure while persisting a mesh.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to write mesh: {0}")]
    Io(#[from] std::io::Error),

    #[error("mesh has {0} triangles, more than a binary STL header can count")]
    TooManyTriangles(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_too_small_message() {
        let err = ConfigurationError::GridTooSmall {
            pattern: "glider",
            width: 3,
            height: 3,
            min_width: 4,
            min_height: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("grid too small for pattern"));
        assert!(msg.contains("glider"));
        assert!(msg.contains("4x4"));
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigurationError>();
        assert_send_sync::<SinkError>();
    }
}
