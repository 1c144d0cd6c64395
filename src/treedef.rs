//! Capability descriptor decoupling tree algorithms from tree storage.

use generational_arena::Index;

use crate::arena::TreeArena;

/// Navigation capabilities over some tree representation.
///
/// Any storage that can enumerate a node's children and name its parent is
/// queryable by the algorithms in [`crate::query`]; they never touch the
/// representation directly. `Node` is a cheap handle whose equality is node
/// identity, not content equality.
pub trait TreeDef {
    type Node: Copy + PartialEq;

    /// Children of `node`, insertion order preserved.
    fn children_of(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Parent of `node`, None only for the root.
    fn parent_of(&self, node: Self::Node) -> Option<Self::Node>;
}

/// The arena is its own descriptor: indices are the node handles, and the
/// accessors read the node's stored parent/children fields.
impl<T> TreeDef for TreeArena<T> {
    type Node = Index;

    fn children_of(&self, node: Index) -> Vec<Index> {
        self.get_node(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn parent_of(&self, node: Index) -> Option<Index> {
        self.get_node(node).and_then(|n| n.parent)
    }
}
