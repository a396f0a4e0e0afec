//! Grid primitives (plane, cube)

use glam::Vec3;
use tracing::warn;

use crate::types::{MeshBuilder, MeshBuilderColor};

/// Generate a plane mesh on the XZ plane (Y = 0)
///
/// # Arguments
/// * `width` - Size along X axis
/// * `depth` - Size along Z axis
/// * `width_segments` - Number of X subdivisions (min 1, max 255)
/// * `depth_segments` - Number of Z subdivisions (min 1, max 255)
///
/// # Returns
/// Mesh with `(width_segments + 1) × (depth_segments + 1)` vertices
///
/// # UV Mapping
/// - U maps 0→1 along X axis (left to right)
/// - V maps 1→0 along Z axis (near edge at V = 1)
pub fn generate_plane<M: MeshBuilder + Default>(
    width: f32,
    depth: f32,
    width_segments: u32,
    depth_segments: u32,
) -> M {
    let (width, depth) = clamp_plane_sizes(width, depth);
    let width_segments = width_segments.clamp(1, 255);
    let depth_segments = depth_segments.clamp(1, 255);

    let mut mesh = M::default();

    for iz in 0..=depth_segments {
        let v = iz as f32 / depth_segments as f32;
        let z = v * depth - depth * 0.5;

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let x = u * width - width * 0.5;

            mesh.add_vertex(Vec3::new(x, 0.0, z), Vec3::Y, (u, 1.0 - v));
        }
    }

    emit_grid_triangles(&mut mesh, 0, width_segments, depth_segments);
    mesh
}

/// Generate a plane mesh with one flat vertex color
///
/// Same layout as [`generate_plane`], with the given RGBA color assigned
/// to every vertex.
pub fn generate_plane_colored<M: MeshBuilderColor + Default>(
    width: f32,
    depth: f32,
    width_segments: u32,
    depth_segments: u32,
    color: [f32; 4],
) -> M {
    let (width, depth) = clamp_plane_sizes(width, depth);
    let width_segments = width_segments.clamp(1, 255);
    let depth_segments = depth_segments.clamp(1, 255);

    let mut mesh = M::default();

    for iz in 0..=depth_segments {
        let v = iz as f32 / depth_segments as f32;
        let z = v * depth - depth * 0.5;

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let x = u * width - width * 0.5;

            mesh.add_vertex_colored(Vec3::new(x, 0.0, z), Vec3::Y, (u, 1.0 - v), color);
        }
    }

    emit_grid_triangles(&mut mesh, 0, width_segments, depth_segments);
    mesh
}

fn clamp_plane_sizes(width: f32, depth: f32) -> (f32, f32) {
    let width = if width < 0.0 {
        warn!("generate_plane: width must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        width
    };

    let depth = if depth < 0.0 {
        warn!("generate_plane: depth must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        depth
    };

    (width, depth)
}

/// Generate a cube mesh with per-axis subdivisions
///
/// # Arguments
/// * `width` - Size along X axis
/// * `height` - Size along Y axis
/// * `depth` - Size along Z axis
/// * `width_segments` - X subdivisions (min 1, max 64)
/// * `height_segments` - Y subdivisions (min 1, max 64)
/// * `depth_segments` - Z subdivisions (min 1, max 64)
///
/// # Returns
/// Mesh with six independent face grids, face order +X, -X, +Y, -Y, +Z, -Z
///
/// # UV Mapping
/// Each face runs U 0→1 left to right and V 1→0 top to bottom of its grid.
pub fn generate_cube<M: MeshBuilder + Default>(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
) -> M {
    let (width, height, depth) = clamp_cube_sizes(width, height, depth);
    let ws = width_segments.clamp(1, 64);
    let hs = height_segments.clamp(1, 64);
    let ds = depth_segments.clamp(1, 64);

    let mut mesh = M::default();

    for face in cube_faces(width, height, depth, ws, hs, ds) {
        build_cube_face(&mut mesh, &face);
    }

    mesh
}

/// Generate a cube mesh with one flat color per face
///
/// Same layout as [`generate_cube`]; `face_colors` is indexed by face id
/// 0..5 in the order +X, -X, +Y, -Y, +Z, -Z.
pub fn generate_cube_colored<M: MeshBuilderColor + Default>(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
    face_colors: [[f32; 4]; 6],
) -> M {
    let (width, height, depth) = clamp_cube_sizes(width, height, depth);
    let ws = width_segments.clamp(1, 64);
    let hs = height_segments.clamp(1, 64);
    let ds = depth_segments.clamp(1, 64);

    let mut mesh = M::default();

    for (face, color) in cube_faces(width, height, depth, ws, hs, ds)
        .into_iter()
        .zip(face_colors)
    {
        build_cube_face_colored(&mut mesh, &face, color);
    }

    mesh
}

fn clamp_cube_sizes(width: f32, height: f32, depth: f32) -> (f32, f32, f32) {
    let width = if width < 0.0 {
        warn!("generate_cube: width must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        width
    };

    let height = if height < 0.0 {
        warn!("generate_cube: height must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        height
    };

    let depth = if depth < 0.0 {
        warn!("generate_cube: depth must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        depth
    };

    (width, height, depth)
}

/// One cube face: which axes receive the grid's U, V, and constant-depth
/// components, sign multipliers selecting the outward normal, and the
/// face's grid dimensions.
struct CubeFace {
    axes: [usize; 3],
    u_dir: f32,
    v_dir: f32,
    face_width: f32,
    face_height: f32,
    /// Signed: the sign selects which side of the axis the face sits on
    face_depth: f32,
    grid_x: u32,
    grid_y: u32,
}

fn cube_faces(w: f32, h: f32, d: f32, ws: u32, hs: u32, ds: u32) -> [CubeFace; 6] {
    // Face order +X, -X, +Y, -Y, +Z, -Z (face ids 0..5)
    [
        CubeFace {
            axes: [2, 1, 0],
            u_dir: -1.0,
            v_dir: -1.0,
            face_width: d,
            face_height: h,
            face_depth: w,
            grid_x: ds,
            grid_y: hs,
        },
        CubeFace {
            axes: [2, 1, 0],
            u_dir: 1.0,
            v_dir: -1.0,
            face_width: d,
            face_height: h,
            face_depth: -w,
            grid_x: ds,
            grid_y: hs,
        },
        CubeFace {
            axes: [0, 2, 1],
            u_dir: 1.0,
            v_dir: 1.0,
            face_width: w,
            face_height: d,
            face_depth: h,
            grid_x: ws,
            grid_y: ds,
        },
        CubeFace {
            axes: [0, 2, 1],
            u_dir: 1.0,
            v_dir: -1.0,
            face_width: w,
            face_height: d,
            face_depth: -h,
            grid_x: ws,
            grid_y: ds,
        },
        CubeFace {
            axes: [0, 1, 2],
            u_dir: 1.0,
            v_dir: -1.0,
            face_width: w,
            face_height: h,
            face_depth: d,
            grid_x: ws,
            grid_y: hs,
        },
        CubeFace {
            axes: [0, 1, 2],
            u_dir: -1.0,
            v_dir: -1.0,
            face_width: w,
            face_height: h,
            face_depth: -d,
            grid_x: ws,
            grid_y: hs,
        },
    ]
}

fn cube_face_vertex(face: &CubeFace, ix: u32, iy: u32) -> (Vec3, Vec3, (f32, f32)) {
    let u = ix as f32 / face.grid_x as f32;
    let v = iy as f32 / face.grid_y as f32;
    let x = u * face.face_width - face.face_width * 0.5;
    let y = v * face.face_height - face.face_height * 0.5;

    let mut position = [0.0f32; 3];
    position[face.axes[0]] = x * face.u_dir;
    position[face.axes[1]] = y * face.v_dir;
    position[face.axes[2]] = face.face_depth * 0.5;

    let mut normal = [0.0f32; 3];
    normal[face.axes[2]] = if face.face_depth >= 0.0 { 1.0 } else { -1.0 };

    (
        Vec3::from_array(position),
        Vec3::from_array(normal),
        (u, 1.0 - v),
    )
}

fn build_cube_face<M: MeshBuilder + Default>(mesh: &mut M, face: &CubeFace) {
    let base = mesh.vertex_count() as u32;

    for iy in 0..=face.grid_y {
        for ix in 0..=face.grid_x {
            let (position, normal, uv) = cube_face_vertex(face, ix, iy);
            mesh.add_vertex(position, normal, uv);
        }
    }

    emit_grid_triangles(mesh, base, face.grid_x, face.grid_y);
}

fn build_cube_face_colored<M: MeshBuilderColor + Default>(
    mesh: &mut M,
    face: &CubeFace,
    color: [f32; 4],
) {
    let base = mesh.vertex_count() as u32;

    for iy in 0..=face.grid_y {
        for ix in 0..=face.grid_x {
            let (position, normal, uv) = cube_face_vertex(face, ix, iy);
            mesh.add_vertex_colored(position, normal, uv, color);
        }
    }

    emit_grid_triangles(mesh, base, face.grid_x, face.grid_y);
}

/// Two triangles per grid cell with the shared fixed diagonal:
/// `(a, b, d)` then `(b, c, d)`, where `a` is the cell origin, `b` one
/// row down, `c` one row down and one column right, `d` one column right.
fn emit_grid_triangles<M: MeshBuilder + Default>(
    mesh: &mut M,
    base: u32,
    grid_x: u32,
    grid_y: u32,
) {
    let stride = grid_x + 1;

    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = (base + iy * stride + ix) as u16;
            let b = (base + (iy + 1) * stride + ix) as u16;
            let c = (base + (iy + 1) * stride + ix + 1) as u16;
            let d = (base + iy * stride + ix + 1) as u16;

            mesh.add_triangle(a, b, d);
            mesh.add_triangle(b, c, d);
        }
    }
}
