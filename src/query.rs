//! Stateless queries over any [`TreeDef`]: path computation and lowest
//! common ancestor.
//!
//! Nothing here knows about [`crate::arena::TreeArena`]; all navigation goes
//! through the descriptor, so the algorithms work for any representation
//! that can supply child and parent accessors.

use itertools::Itertools;
use tracing::instrument;

use crate::treedef::TreeDef;

/// Ancestor chain of `node`, root first, `node` itself last. O(depth).
#[instrument(level = "trace", skip_all)]
pub fn ancestor_chain<D: TreeDef>(def: &D, node: D::Node) -> Vec<D::Node> {
    let mut chain = vec![node];
    let mut current = node;
    while let Some(parent) = def.parent_of(current) {
        chain.push(parent);
        current = parent;
    }
    chain.reverse();
    chain
}

/// Slash-joined path from the root to `node`, each ancestor mapped through
/// the caller-supplied extractor. The root is the first segment.
#[instrument(level = "debug", skip_all)]
pub fn path<D, F>(def: &D, node: D::Node, extract: F) -> String
where
    D: TreeDef,
    F: Fn(D::Node) -> String,
{
    ancestor_chain(def, node).into_iter().map(extract).join("/")
}

/// Deepest node that is an ancestor of (or equal to) both `a` and `b`.
///
/// Walks both root-to-node chains from the root end and keeps the last
/// index at which they still agree. Returns `a` itself when `a == b`, the
/// ancestor in the colinear case, and None only when the two nodes live in
/// disconnected trees. O(depth(a) + depth(b)).
#[instrument(level = "debug", skip_all)]
pub fn lowest_common_ancestor<D: TreeDef>(def: &D, a: D::Node, b: D::Node) -> Option<D::Node> {
    let chain_a = ancestor_chain(def, a);
    let chain_b = ancestor_chain(def, b);

    chain_a
        .into_iter()
        .zip(chain_b)
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .last()
}

/// Pre-order traversal of the subtree rooted at `start`, children in
/// insertion order. Explicit stack, no recursion.
#[instrument(level = "trace", skip_all)]
pub fn preorder<D: TreeDef>(def: &D, start: D::Node) -> Vec<D::Node> {
    let mut visited = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        visited.push(current);
        // Push children in reverse order for left-to-right traversal
        for child in def.children_of(current).into_iter().rev() {
            stack.push(child);
        }
    }
    visited
}
