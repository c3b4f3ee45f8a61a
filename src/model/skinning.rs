// Linear blend skinning of the page box on the CPU.

use nalgebra_glm as glm;

use super::page_mesh::PageMesh;
use super::skeleton::PageSkeleton;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkinnedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Deform every vertex of `mesh` by the current pose of `skeleton`.
pub fn skin_mesh(mesh: &PageMesh, skeleton: &PageSkeleton) -> Vec<SkinnedVertex> {
    let matrices = skeleton.skinning_matrices();
    let mut out = Vec::with_capacity(mesh.vertex_count());

    for (i, influence) in mesh.skin.iter().enumerate() {
        let p = mesh.positions[i];
        let n = mesh.normals[i];
        let rest = glm::vec4(p[0], p[1], p[2], 1.0);
        let normal = glm::vec4(n[0], n[1], n[2], 0.0);

        let mut position = glm::Vec4::zeros();
        let mut blended_normal = glm::Vec4::zeros();
        for (&bone, &weight) in influence.bones.iter().zip(influence.weights.iter()) {
            if weight == 0.0 {
                continue;
            }
            let Some(m) = matrices.get(bone) else {
                continue;
            };
            position += m * rest * weight;
            blended_normal += m * normal * weight;
        }

        let normal3 = glm::vec4_to_vec3(&blended_normal);
        let normal3 = if normal3.norm() > 0.0 { normal3.normalize() } else { normal3 };

        out.push(SkinnedVertex {
            position: [position.x, position.y, position.z],
            normal: [normal3.x, normal3.y, normal3.z],
            uv: mesh.uvs[i],
        });
    }

    out
}

/// Raw bytes for a vertex buffer upload.
pub fn as_bytes(vertices: &[SkinnedVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
