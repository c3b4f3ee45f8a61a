use serde::{Deserialize, Serialize};

use crate::settings::PageGeometry;

/// Face groups of the page box, in material slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageFace {
    Right,
    Left,
    Top,
    Bottom,
    Front,
    Back,
}

impl PageFace {
    pub const ALL: [PageFace; 6] = [
        PageFace::Right,
        PageFace::Left,
        PageFace::Top,
        PageFace::Bottom,
        PageFace::Front,
        PageFace::Back,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceGroup {
    pub face: PageFace,
    pub start: usize, // first index in `indices`
    pub count: usize,
}

/// Two-bone blend for a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinInfluence {
    pub bones: [usize; 2],
    pub weights: [f32; 2],
}

/// Segmented page box with the hinge at x = 0.
/// Skin influences are computed once here and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    pub groups: Vec<FaceGroup>,
    pub skin: Vec<SkinInfluence>,
}

struct Plane {
    u: usize,
    v: usize,
    w: usize,
    u_dir: f32,
    v_dir: f32,
    width: f32,
    height: f32,
    depth: f32,
    grid_x: usize,
    grid_y: usize,
}

impl Plane {
    /// `axes` is (u, v, w), `size` is (width, height, depth).
    fn new(axes: [usize; 3], dirs: [f32; 2], size: [f32; 3], grid: [usize; 2]) -> Self {
        let [u, v, w] = axes;
        let [u_dir, v_dir] = dirs;
        let [width, height, depth] = size;
        let [grid_x, grid_y] = grid;
        Self {
            u,
            v,
            w,
            u_dir,
            v_dir,
            width,
            height,
            depth,
            grid_x,
            grid_y,
        }
    }
}

impl PageMesh {
    pub fn new(geometry: &PageGeometry) -> Self {
        let mut mesh = Self {
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            groups: Vec::new(),
            skin: Vec::new(),
        };

        let (w, h, d) = (geometry.width, geometry.height, geometry.depth);
        let (sx, sy, sz) = (geometry.segments, 2, 1);

        // x = 0, y = 1, z = 2
        let planes = [
            Plane::new([2, 1, 0], [-1.0, -1.0], [d, h, w], [sz, sy]),
            Plane::new([2, 1, 0], [1.0, -1.0], [d, h, -w], [sz, sy]),
            Plane::new([0, 2, 1], [1.0, 1.0], [w, d, h], [sx, sz]),
            Plane::new([0, 2, 1], [1.0, -1.0], [w, d, -h], [sx, sz]),
            Plane::new([0, 1, 2], [1.0, -1.0], [w, h, d], [sx, sy]),
            Plane::new([0, 1, 2], [-1.0, -1.0], [w, h, -d], [sx, sy]),
        ];

        for (plane, face) in planes.iter().zip(PageFace::ALL) {
            mesh.build_plane(plane, face);
        }

        // move the hinge edge onto the origin
        for p in &mut mesh.positions {
            p[0] += w / 2.0;
        }

        mesh.skin = mesh
            .positions
            .iter()
            .map(|p| skin_influence(p[0], geometry))
            .collect();

        mesh
    }

    fn build_plane(&mut self, plane: &Plane, face: PageFace) {
        let segment_width = plane.width / plane.grid_x as f32;
        let segment_height = plane.height / plane.grid_y as f32;
        let width_half = plane.width / 2.0;
        let height_half = plane.height / 2.0;
        let depth_half = plane.depth / 2.0;
        let grid_x1 = plane.grid_x + 1;
        let grid_y1 = plane.grid_y + 1;

        let base = self.positions.len() as u32;
        let start = self.indices.len();

        for iy in 0..grid_y1 {
            let y = iy as f32 * segment_height - height_half;
            for ix in 0..grid_x1 {
                let x = ix as f32 * segment_width - width_half;

                let mut position = [0.0; 3];
                position[plane.u] = x * plane.u_dir;
                position[plane.v] = y * plane.v_dir;
                position[plane.w] = depth_half;
                self.positions.push(position);

                let mut normal = [0.0; 3];
                normal[plane.w] = if plane.depth > 0.0 { 1.0 } else { -1.0 };
                self.normals.push(normal);

                self.uvs.push([
                    ix as f32 / plane.grid_x as f32,
                    1.0 - iy as f32 / plane.grid_y as f32,
                ]);
            }
        }

        for iy in 0..plane.grid_y {
            for ix in 0..plane.grid_x {
                let a = base + (ix + grid_x1 * iy) as u32;
                let b = base + (ix + grid_x1 * (iy + 1)) as u32;
                let c = base + (ix + 1 + grid_x1 * (iy + 1)) as u32;
                let d = base + (ix + 1 + grid_x1 * iy) as u32;
                self.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        self.groups.push(FaceGroup {
            face,
            start,
            count: self.indices.len() - start,
        });
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn group(&self, face: PageFace) -> Option<&FaceGroup> {
        self.groups.iter().find(|g| g.face == face)
    }
}

/// Blend between the bone at the start of the vertex's segment and the next one.
pub fn skin_influence(x: f32, geometry: &PageGeometry) -> SkinInfluence {
    let segment_width = geometry.segment_width();
    let last = geometry.bone_count() - 1;
    let scaled = (x / segment_width).max(0.0);
    let bone = (scaled.floor() as usize).min(last);
    let next = (bone + 1).min(last);
    let weight = if next == bone { 0.0 } else { (scaled - bone as f32).clamp(0.0, 1.0) };
    SkinInfluence {
        bones: [bone, next],
        weights: [1.0 - weight, weight],
    }
}
