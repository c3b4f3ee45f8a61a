use nalgebra_glm as glm;

use crate::settings::PageGeometry;

/// One joint of the page chain.
/// Only `fold` and `turn` change after construction.
#[derive(Debug, Clone)]
pub struct PageBone {
    pub parent: Option<usize>,
    pub offset: glm::Vec3,
    pub fold: f32, // around local x
    pub turn: f32, // around local y
    pub world: glm::Mat4,
    pub inverse_bind: glm::Mat4,
}

impl PageBone {
    fn new(parent: Option<usize>, offset: glm::Vec3) -> Self {
        Self {
            parent,
            offset,
            fold: 0.0,
            turn: 0.0,
            world: glm::identity(),
            inverse_bind: glm::identity(),
        }
    }

    /// Translation then XYZ euler rotation (fold applied outermost).
    pub fn local_transform(&self) -> glm::Mat4 {
        let translate = glm::translation(&self.offset);
        let fold = glm::rotation(self.fold, &glm::vec3(1.0, 0.0, 0.0));
        let turn = glm::rotation(self.turn, &glm::vec3(0.0, 1.0, 0.0));
        translate * fold * turn
    }
}

/// Linear bone chain along the page's x axis, stored as an arena.
/// Every parent index is lower than its child, so one forward pass resolves the hierarchy.
#[derive(Debug, Clone)]
pub struct PageSkeleton {
    bones: Vec<PageBone>,
}

impl PageSkeleton {
    pub fn new(geometry: &PageGeometry) -> Self {
        let segment_width = geometry.segment_width();
        let bones = (0..geometry.bone_count())
            .map(|i| {
                if i == 0 {
                    PageBone::new(None, glm::vec3(0.0, 0.0, 0.0))
                } else {
                    PageBone::new(Some(i - 1), glm::vec3(segment_width, 0.0, 0.0))
                }
            })
            .collect();

        let mut skeleton = Self { bones };
        skeleton.update_world(&glm::identity());
        for bone in &mut skeleton.bones {
            bone.inverse_bind = glm::inverse(&bone.world);
        }
        skeleton
    }

    /// Recompute world matrices with the chain hanging off `root`.
    pub fn update_world(&mut self, root: &glm::Mat4) {
        for i in 0..self.bones.len() {
            let parent_world = match self.bones[i].parent {
                Some(p) => self.bones[p].world,
                None => *root,
            };
            let local = self.bones[i].local_transform();
            self.bones[i].world = parent_world * local;
        }
    }

    pub fn bones(&self) -> &[PageBone] {
        &self.bones
    }

    pub fn bones_mut(&mut self) -> &mut [PageBone] {
        &mut self.bones
    }

    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    pub fn world_position(&self, index: usize) -> Option<glm::Vec3> {
        self.bones.get(index).map(|b| {
            let origin = b.world * glm::vec4(0.0, 0.0, 0.0, 1.0);
            glm::vec4_to_vec3(&origin)
        })
    }

    /// World transform times inverse bind, per bone.
    pub fn skinning_matrices(&self) -> Vec<glm::Mat4> {
        self.bones.iter().map(|b| b.world * b.inverse_bind).collect()
    }
}
