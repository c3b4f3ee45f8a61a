mod page_mesh;
mod skeleton;
mod skinning;

pub use page_mesh::{FaceGroup, PageFace, PageMesh, SkinInfluence, skin_influence};
pub use skeleton::{PageBone, PageSkeleton};
pub use skinning::{SkinnedVertex, as_bytes, skin_mesh};
