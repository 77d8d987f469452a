//! Sculpt creation and destruction.

use tracing::warn;

use crate::automaton::{Pattern, SeedParams};
use crate::state::Sculpt;

/// Seeds a pattern, runs it and synthesizes its surface.
///
/// `pattern` codes: 0 glider, 1 methuselah, 2 r-pentomino, 3 cross, 4 random.
/// `seed` drives the random pattern and is ignored by the others.
///
/// # Returns
/// A pointer to a new Sculpt, or null for an unknown pattern code or a grid
/// too small for the pattern.
///
/// # Safety
/// The returned pointer must eventually be freed with `ls_destroy()`.
#[no_mangle]
pub extern "C" fn ls_create_seeded(
    pattern: u8,
    width: u32,
    height: u32,
    generations: u32,
    seed: u64,
) -> *mut Sculpt {
    let Some(pattern) = Pattern::from_code(pattern) else {
        warn!(code = pattern, "unknown pattern code");
        return std::ptr::null_mut();
    };

    let params = SeedParams {
        seed: Some(seed),
        ..SeedParams::default()
    };
    match Sculpt::seeded(
        pattern,
        width as usize,
        height as usize,
        generations as usize,
        &params,
    ) {
        Ok(sculpt) => Box::into_raw(Box::new(sculpt)),
        Err(err) => {
            warn!(%err, "cannot create sculpt");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a sculpt and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ls_create_seeded()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ls_destroy(ptr: *mut Sculpt) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let sculpt = ls_create_seeded(0, 10, 10, 4, 0);
            assert!(!sculpt.is_null());

            // Should not crash
            ls_destroy(sculpt);
        }
    }

    #[test]
    fn test_create_rejects_bad_input() {
        assert!(ls_create_seeded(9, 10, 10, 4, 0).is_null());
        assert!(ls_create_seeded(1, 4, 4, 4, 0).is_null());
        assert!(ls_create_seeded(4, 0, 10, 4, 0).is_null());
    }

    #[test]
    fn test_destroy_null() {
        unsafe {
            // Should not crash
            ls_destroy(ptr::null_mut());
        }
    }
}
