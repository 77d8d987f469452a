//! Smallest square grid a pattern can be seeded on.
//!
//! Doubles the size until a probe succeeds, then bisects between the last
//! failing and first succeeding size. Only [`ConfigurationError`] counts as a
//! failed probe; the search assumes success is monotone in the size.

use tracing::debug;

use crate::automaton::{steps, Pattern, SeedParams};
use crate::error::ConfigurationError;

/// Smallest `size <= limit` for which `probe(size)` succeeds.
///
/// Returns `None` when nothing up to `limit` works.
pub fn minimum_size<F>(limit: usize, mut probe: F) -> Option<usize>
where
    F: FnMut(usize) -> Result<(), ConfigurationError>,
{
    let mut try_size = |size: usize| {
        let result = probe(size);
        debug!(size, ok = result.is_ok(), "probed size");
        result.is_ok()
    };

    if limit == 0 {
        return None;
    }
    if try_size(1) {
        return Some(1);
    }

    let mut failing = 1;
    let mut passing = None;
    while passing.is_none() {
        if failing >= limit {
            return None;
        }
        let size = failing.saturating_mul(2).min(limit);
        if try_size(size) {
            passing = Some(size);
        } else {
            failing = size;
        }
    }

    let mut passing = passing?;
    while passing - failing > 1 {
        let size = failing + (passing - failing) / 2;
        if try_size(size) {
            passing = size;
        } else {
            failing = size;
        }
    }
    Some(passing)
}

/// Smallest square grid on which `pattern` seeds and runs for `generations`.
pub fn minimum_pattern_size(
    pattern: Pattern,
    generations: usize,
    params: &SeedParams,
    limit: usize,
) -> Option<usize> {
    minimum_size(limit, |size| {
        let seed = pattern.seed(size, size, params)?;
        steps(&seed, generations, false);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn too_small(size: usize) -> ConfigurationError {
        ConfigurationError::GridTooSmall {
            pattern: "test",
            width: size,
            height: size,
            min_width: 0,
            min_height: 0,
        }
    }

    #[test]
    fn test_finds_threshold() {
        for threshold in 1..40 {
            let found = minimum_size(100, |size| {
                if size >= threshold {
                    Ok(())
                } else {
                    Err(too_small(size))
                }
            });
            assert_eq!(found, Some(threshold), "threshold {}", threshold);
        }
    }

    #[test]
    fn test_limit_is_respected() {
        let mut probed = Vec::new();
        let found = minimum_size(10, |size| {
            probed.push(size);
            Err(too_small(size))
        });
        assert_eq!(found, None);
        assert!(probed.iter().all(|&size| size <= 10));
        assert_eq!(minimum_size(0, |_| Ok(())), None);
    }

    #[test]
    fn test_threshold_at_limit() {
        let found = minimum_size(12, |size| if size >= 12 { Ok(()) } else { Err(too_small(size)) });
        assert_eq!(found, Some(12));
    }

    #[test]
    fn test_pattern_minimums() {
        let params = SeedParams::default();
        assert_eq!(minimum_pattern_size(Pattern::Glider, 3, &params, 64), Some(4));
        assert_eq!(minimum_pattern_size(Pattern::Methuselah, 3, &params, 64), Some(5));
        assert_eq!(minimum_pattern_size(Pattern::RPentomino, 3, &params, 64), Some(4));
        assert_eq!(minimum_pattern_size(Pattern::Cross, 3, &params, 64), Some(3));
    }
}
