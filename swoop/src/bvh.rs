mod axis;
mod bounding_box;
mod builder;

use log::info;

pub use self::axis::*;
pub use self::bounding_box::*;
use self::builder::Builder;
use crate::models::{Node, NodeKind, WaldTriangle};
use crate::{BuildOptions, Primitive};

/// A finished hierarchy; owns the node array and the Wald-triangle buffer
/// and is read-only from here on, so sharing it across traversal threads is
/// fine.
#[derive(Clone, Debug)]
pub struct Bvh {
    nodes: Vec<Node>,
    triangles: Vec<WaldTriangle>,
}

impl Bvh {
    /// Builds the hierarchy; returns `None` when there is nothing to build
    /// over.
    pub fn build(
        primitives: &[Primitive],
        options: BuildOptions,
    ) -> Option<Self> {
        if primitives.is_empty() {
            return None;
        }

        let options = options.clamped();
        let (nodes, triangles, leaf_count) =
            Builder::new(primitives, options).run();

        if options.statistics {
            info!("bvh: {} nodes, {} leaves", nodes.len(), leaf_count);

            info!(
                "bvh: {} triangles/leaf",
                primitives.len() as f32 / leaf_count as f32
            );
        }

        Some(Self { nodes, triangles })
    }

    /// The flattened tree; the root sits at index zero.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn triangles(&self) -> &[WaldTriangle] {
        &self.triangles
    }

    /// Walks the whole tree asserting its structural invariants; meant for
    /// tests and debugging sessions.
    pub fn validate(&self) {
        let end = self.validate_subtree(0, None);

        assert_eq!(end, self.nodes.len());
    }

    /// Checks one subtree and returns the index just past it, which pins
    /// down the array layout: every subtree is contiguous, the left child
    /// sits right after its parent and the right child right after the left
    /// subtree.
    fn validate_subtree(&self, id: usize, parent: Option<&Node>) -> usize {
        let node = &self.nodes[id];

        if let Some(parent) = parent {
            assert!(node.min().cmpge(parent.min()).all());
            assert!(node.max().cmple(parent.max()).all());
        }

        match node.kind() {
            NodeKind::Internal => {
                let offset = node.child_offset() as usize;

                assert!(offset >= 2);
                assert!(node.axis() < 3);

                let left_end = self.validate_subtree(id + 1, Some(node));

                assert_eq!(left_end, id + offset);

                self.validate_subtree(id + offset, Some(node))
            }

            NodeKind::TriangleLeaf => {
                let first = node.first_triangle() as usize;
                let count = self.triangles[first].leaf_size() as usize;

                assert!(count >= 1);
                assert!(first + count <= self.triangles.len());

                for triangle in &self.triangles[first..first + count] {
                    assert_eq!(count as u32, triangle.leaf_size());
                }

                id + 1
            }

            NodeKind::IntersectorLeaf => id + 1,
        }
    }
}
