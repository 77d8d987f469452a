//! Binary STL output.
//!
//! Layout: 80-byte header, little-endian `u32` triangle count, then 50 bytes
//! per triangle (facet normal, three vertices, all `f32` LE, and a zero `u16`
//! attribute word).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::SinkError;
use crate::surface::{Mesh, Triangle};

pub const HEADER_SIZE: usize = 80;
pub const TRIANGLE_SIZE: usize = 50;

// Must not start with "solid", which readers take as ASCII STL.
const HEADER_TEXT: &[u8] = b"life-sculpt binary STL";

fn write_vec3<W: Write>(writer: &mut W, v: glam::Vec3) -> Result<(), SinkError> {
    for c in v.to_array() {
        writer.write_all(&c.to_le_bytes())?;
    }
    Ok(())
}

fn write_triangle<W: Write>(writer: &mut W, triangle: &Triangle) -> Result<(), SinkError> {
    write_vec3(writer, triangle.unit_normal())?;
    for v in triangle.vertices {
        write_vec3(writer, v)?;
    }
    writer.write_all(&0u16.to_le_bytes())?;
    Ok(())
}

/// Write `mesh` to any writer.
pub fn write_stl<W: Write>(writer: &mut W, mesh: &Mesh) -> Result<(), SinkError> {
    let count = u32::try_from(mesh.len()).map_err(|_| SinkError::TooManyTriangles(mesh.len()))?;

    let mut header = [0u8; HEADER_SIZE];
    header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
    writer.write_all(&header)?;
    writer.write_all(&count.to_le_bytes())?;

    for triangle in mesh.iter() {
        write_triangle(writer, triangle)?;
    }

    writer.flush()?;
    Ok(())
}

/// Save `mesh` to a file, replacing it if it exists.
pub fn save_stl<P: AsRef<Path>>(path: P, mesh: &Mesh) -> Result<(), SinkError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_stl(&mut writer, mesh)?;
    debug!(path = %path.display(), triangles = mesh.len(), "wrote STL");
    Ok(())
}
