//! Access to the synthesized surface.

use std::ffi::{c_char, CStr};

use tracing::warn;

use crate::state::Sculpt;
use crate::stl;

/// Number of triangles in the synthesized surface.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Sculpt, or null
///
/// # Returns
/// The triangle count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ls_triangle_count(ptr: *const Sculpt) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).mesh().len() as u64
}

/// Copies triangle vertices into `out` as `x, y, z` triples, 9 floats per
/// triangle, in emission order.
///
/// Only whole triangles are copied; a buffer shorter than the mesh receives a
/// prefix.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Sculpt, or null
/// - `out` must be valid for writes of `len` floats, or null
///
/// # Returns
/// Number of triangles written.
#[no_mangle]
pub unsafe extern "C" fn ls_copy_triangles(ptr: *const Sculpt, out: *mut f32, len: usize) -> u64 {
    if ptr.is_null() || out.is_null() {
        return 0;
    }

    let mesh = (*ptr).mesh();
    let count = mesh.len().min(len / 9);
    let out = std::slice::from_raw_parts_mut(out, count * 9);

    for (chunk, triangle) in out.chunks_exact_mut(9).zip(mesh.iter()) {
        for (slot, vertex) in chunk.chunks_exact_mut(3).zip(triangle.vertices) {
            slot.copy_from_slice(&vertex.to_array());
        }
    }
    count as u64
}

/// Number of overhanging voxels that could not get a support wedge.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Sculpt, or null
#[no_mangle]
pub unsafe extern "C" fn ls_floater_count(ptr: *const Sculpt) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).floater_count() as u64
}

/// Saves the surface as binary STL.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Sculpt, or null
/// - `path` must be a NUL-terminated UTF-8 string, or null
///
/// # Returns
/// 0 on success, 1 on a null pointer or invalid path, 2 if writing fails.
#[no_mangle]
pub unsafe extern "C" fn ls_write_stl(ptr: *const Sculpt, path: *const c_char) -> i32 {
    if ptr.is_null() || path.is_null() {
        return 1;
    }

    let Ok(path) = CStr::from_ptr(path).to_str() else {
        return 1;
    };

    match stl::save_stl(path, (*ptr).mesh()) {
        Ok(()) => 0,
        Err(err) => {
            warn!(%err, path, "cannot save STL");
            2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_copy_triangles() {
        unsafe {
            let sculpt = lifecycle::ls_create_seeded(0, 10, 10, 4, 0);
            let count = ls_triangle_count(sculpt) as usize;
            assert!(count > 0);

            let mut buffer = vec![f32::NAN; count * 9];
            assert_eq!(ls_copy_triangles(sculpt, buffer.as_mut_ptr(), buffer.len()), count as u64);
            assert!(buffer.iter().all(|v| v.is_finite()));
            assert_eq!(buffer, (*sculpt).mesh().to_flat_vertices());

            lifecycle::ls_destroy(sculpt);
        }
    }

    #[test]
    fn test_copy_into_short_buffer() {
        unsafe {
            let sculpt = lifecycle::ls_create_seeded(0, 10, 10, 4, 0);

            let mut buffer = vec![-1.0f32; 20];
            assert_eq!(ls_copy_triangles(sculpt, buffer.as_mut_ptr(), buffer.len()), 2);
            assert!(buffer[18..].iter().all(|&v| v == -1.0));

            lifecycle::ls_destroy(sculpt);
        }
    }

    #[test]
    fn test_write_stl() {
        let dir = tempfile::tempdir().unwrap();
        let path = CString::new(dir.path().join("glider.stl").to_str().unwrap()).unwrap();

        unsafe {
            let sculpt = lifecycle::ls_create_seeded(0, 10, 10, 4, 0);
            assert_eq!(ls_write_stl(sculpt, path.as_ptr()), 0);
            assert_eq!(ls_floater_count(sculpt), 0);
            lifecycle::ls_destroy(sculpt);
        }

        assert!(dir.path().join("glider.stl").exists());
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            assert_eq!(ls_triangle_count(ptr::null()), 0);
            assert_eq!(ls_floater_count(ptr::null()), 0);
            assert_eq!(ls_copy_triangles(ptr::null(), ptr::null_mut(), 0), 0);
            assert_eq!(ls_write_stl(ptr::null(), ptr::null()), 1);
        }
    }
}
