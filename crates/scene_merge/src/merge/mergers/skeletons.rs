//! Skeletons merger

use std::sync::Arc;

use crate::document::{Document, SkeletonRecord};
use crate::merge::{ContextValue, MergeError, Merger, ResolutionContext};
use crate::render::{Bone, Skeleton};
use crate::scene::Scene;

/// Builds one skeleton per skeleton record
///
/// Links of the bone graph that name unknown bones, give a bone a second
/// parent or close a cycle are logged and skipped.
pub struct SkeletonsMerger;

fn build_skeleton(record: &SkeletonRecord) -> Skeleton {
    let mut skeleton = Skeleton {
        name: record.name.clone().unwrap_or_else(|| record.id.clone()),
        bones: record
            .bones
            .iter()
            .map(|b| Bone {
                id: b.id.clone(),
                name: b.name.clone().unwrap_or_else(|| b.id.clone()),
                transform: b.transform.to_transform(),
                parent: None,
            })
            .collect(),
    };

    for link in &record.bones_graph {
        let (Some(parent), Some(child)) = (skeleton.bone_index(&link.parent), skeleton.bone_index(&link.child)) else {
            log::warn!("Skeleton '{}': link {} -> {} names an unknown bone. Skip.", record.id, link.parent, link.child);
            continue;
        };
        if skeleton.bones[child].parent.is_some() {
            log::warn!("Skeleton '{}': bone {} already has a parent. Skip.", record.id, link.child);
            continue;
        }
        if skeleton.would_cycle(parent, child) {
            log::warn!("Skeleton '{}': link {} -> {} closes a cycle. Skip.", record.id, link.parent, link.child);
            continue;
        }
        skeleton.bones[child].parent = Some(parent);
    }

    skeleton
}

impl Merger for SkeletonsMerger {
    fn name(&self) -> &'static str {
        "skeletons"
    }

    fn apply(&self, doc: &Document, _scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        for record in &doc.skeletons {
            ctx.put(record.id.clone(), ContextValue::Skeleton(Arc::new(build_skeleton(record))));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BoneLink, BoneRecord};

    fn bone(id: &str) -> BoneRecord {
        BoneRecord { id: id.into(), name: None, transform: Default::default() }
    }

    fn link(parent: &str, child: &str) -> BoneLink {
        BoneLink { parent: parent.into(), child: child.into() }
    }

    #[test]
    fn test_bone_hierarchy() {
        let record = SkeletonRecord {
            id: "s1".into(),
            name: None,
            bones: vec![bone("hip"), bone("spine"), bone("head")],
            bones_graph: vec![link("hip", "spine"), link("spine", "head")],
        };
        let skeleton = build_skeleton(&record);

        assert_eq!(skeleton.roots().collect::<Vec<_>>(), vec![0]);
        assert_eq!(skeleton.children(1).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_bad_links_skipped() {
        let record = SkeletonRecord {
            id: "s1".into(),
            name: None,
            bones: vec![bone("a"), bone("b")],
            bones_graph: vec![link("a", "ghost"), link("a", "b"), link("b", "a"), link("a", "b")],
        };
        let skeleton = build_skeleton(&record);

        assert_eq!(skeleton.bones[1].parent, Some(0));
        assert_eq!(skeleton.bones[0].parent, None);
    }
}
