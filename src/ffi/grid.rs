//! Volume dimensions and voxel queries.

use crate::state::Sculpt;

/// Writes the volume's width, height and depth (generation count).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Sculpt, or null
/// - the out pointers must be valid for writes, or null
///
/// # Returns
/// 0 on success, 1 if any pointer is null.
#[no_mangle]
pub unsafe extern "C" fn ls_get_dimensions(
    ptr: *const Sculpt,
    width: *mut u32,
    height: *mut u32,
    depth: *mut u32,
) -> i32 {
    if ptr.is_null() || width.is_null() || height.is_null() || depth.is_null() {
        return 1;
    }

    let (w, h, d) = (*ptr).dimensions();
    *width = w as u32;
    *height = h as u32;
    *depth = d as u32;
    0
}

/// Gets the occupancy of voxel `(x, y, z)`, where `z` is the generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Sculpt, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn ls_get_cell(ptr: *const Sculpt, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let sculpt = &*ptr;
    u8::from(sculpt.cell(x as isize, y as isize, z as isize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_dimensions() {
        unsafe {
            let sculpt = lifecycle::ls_create_seeded(0, 10, 12, 4, 0);
            let (mut w, mut h, mut d) = (0, 0, 0);

            assert_eq!(ls_get_dimensions(sculpt, &mut w, &mut h, &mut d), 0);
            assert_eq!((w, h, d), (10, 12, 5));

            lifecycle::ls_destroy(sculpt);
        }
    }

    #[test]
    fn test_glider_cells() {
        unsafe {
            let sculpt = lifecycle::ls_create_seeded(0, 10, 10, 4, 0);

            // Generation 0 is the seed; generation 4 is shifted by (+1, +1).
            assert_eq!(ls_get_cell(sculpt, 2, 1, 0), 1);
            assert_eq!(ls_get_cell(sculpt, 0, 0, 0), 0);
            assert_eq!(ls_get_cell(sculpt, 3, 2, 4), 1);
            assert_eq!(ls_get_cell(sculpt, 2, 1, 4), 0);

            lifecycle::ls_destroy(sculpt);
        }
    }

    #[test]
    fn test_out_of_bounds_access() {
        unsafe {
            let sculpt = lifecycle::ls_create_seeded(0, 10, 10, 4, 0);

            assert_eq!(ls_get_cell(sculpt, -1, 0, 0), 0);
            assert_eq!(ls_get_cell(sculpt, 10, 0, 0), 0);
            assert_eq!(ls_get_cell(sculpt, 2, 1, 5), 0);
            assert_eq!(ls_get_cell(sculpt, 2, 1, -1), 0);

            lifecycle::ls_destroy(sculpt);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let (mut w, mut h, mut d) = (0, 0, 0);
            assert_eq!(ls_get_dimensions(ptr::null(), &mut w, &mut h, &mut d), 1);
            assert_eq!(ls_get_cell(ptr::null(), 0, 0, 0), 0);

            let sculpt = lifecycle::ls_create_seeded(0, 10, 10, 1, 0);
            assert_eq!(ls_get_dimensions(sculpt, ptr::null_mut(), &mut h, &mut d), 1);
            lifecycle::ls_destroy(sculpt);
        }
    }
}
