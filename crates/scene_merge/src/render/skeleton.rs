//! Skeletons used for skinned meshes

use crate::foundation::math::Transform;

/// One bone of a [`Skeleton`]
#[derive(Debug, Clone)]
pub struct Bone {
    /// Document id of the bone
    pub id: String,
    /// Bone name
    pub name: String,
    /// Bind pose, relative to the parent bone
    pub transform: Transform,
    /// Index of the parent bone, `None` for roots
    pub parent: Option<usize>,
}

/// Bone hierarchy
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    /// Skeleton name
    pub name: String,
    /// Bones in document order
    pub bones: Vec<Bone>,
}

impl Skeleton {
    /// Index of the bone with this document id
    pub fn bone_index(&self, id: &str) -> Option<usize> {
        self.bones.iter().position(|b| b.id == id)
    }

    /// Indices of the bones without a parent
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.bones.iter().enumerate().filter(|(_, b)| b.parent.is_none()).map(|(i, _)| i)
    }

    /// Indices of the direct children of a bone
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.bones.iter().enumerate().filter(move |(_, b)| b.parent == Some(index)).map(|(i, _)| i)
    }

    /// Whether making `parent` the parent of `child` would close a cycle
    pub fn would_cycle(&self, parent: usize, child: usize) -> bool {
        let mut cursor = Some(parent);
        while let Some(i) = cursor {
            if i == child {
                return true;
            }
            cursor = self.bones.get(i).and_then(|b| b.parent);
        }
        false
    }
}
