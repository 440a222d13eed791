//! Nodes merger

use crate::document::Document;
use crate::merge::{ContextValue, MergeError, Merger, ResolutionContext};
use crate::scene::{Node, Scene};

/// Creates one scene node per node record, attached under the root
pub struct NodesMerger;

impl Merger for NodesMerger {
    fn name(&self) -> &'static str {
        "nodes"
    }

    fn apply(&self, doc: &Document, scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        for record in &doc.nodes {
            let name = record.name.clone().unwrap_or_else(|| record.id.clone());
            let key = scene.add_node(Node::with_transform(name, record.transform.to_transform()));
            ctx.put(record.id.clone(), ContextValue::Node(key));
        }
        Ok(())
    }
}
