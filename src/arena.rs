use std::fmt;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::error::{TreeError, TreeResult};
use crate::query;

/// Tree node in the arena-based hierarchy structure.
///
/// Identity is the arena `Index`, not the content: two nodes carrying equal
/// content are still distinct entities.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Payload for this node
    pub content: T,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, insertion order preserved
    pub children: Vec<Index>,
}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// Arena-based tree structure for efficient hierarchy management.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Trees are built once and treated as immutable afterwards; all queries
/// take `&self`.
#[derive(Debug)]
pub struct TreeArena<T> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<T>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl<T> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self, content))]
    pub fn insert_node(&mut self, content: T, parent: Option<Index>) -> Index {
        let node = TreeNode {
            content,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode<T>> {
        self.arena.get_mut(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Content of the node at `idx`, if present.
    #[instrument(level = "trace", skip(self))]
    pub fn content(&self, idx: Index) -> Option<&T> {
        self.arena.get(idx).map(|node| &node.content)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator<'_, T> {
        TreeIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects all leaf nodes (nodes with no children), left to right.
    ///
    /// Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<Index> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    #[instrument(level = "trace", skip(self))]
    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<Index>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                leaves.push(node_idx);
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }

    /// Descends from `start` by matching each key against a child's content
    /// at that level, first match in insertion order.
    ///
    /// The content of `start` itself is not matched; the first key selects
    /// among its children.
    #[instrument(level = "debug", skip_all)]
    pub fn find_by_path<K>(&self, start: Index, keys: &[K]) -> TreeResult<Index>
    where
        T: PartialEq<K>,
        K: fmt::Display,
    {
        let mut current = start;
        for (depth, key) in keys.iter().enumerate() {
            let node = self
                .get_node(current)
                .ok_or(TreeError::NodeNotFound(current))?;
            current = node
                .children
                .iter()
                .copied()
                .find(|&child| {
                    self.get_node(child)
                        .map(|c| c.content == *key)
                        .unwrap_or(false)
                })
                .ok_or_else(|| TreeError::PathNotFound {
                    segment: key.to_string(),
                    depth,
                })?;
        }
        Ok(current)
    }

    /// Pre-order search of the subtree rooted at `start` for the first node
    /// whose content equals `key`, children visited in insertion order.
    #[instrument(level = "debug", skip_all)]
    pub fn find_by_content<K>(&self, start: Index, key: &K) -> TreeResult<Index>
    where
        T: PartialEq<K>,
        K: fmt::Display,
    {
        query::preorder(self, start)
            .into_iter()
            .find(|&idx| {
                self.get_node(idx)
                    .map(|node| node.content == *key)
                    .unwrap_or(false)
            })
            .ok_or_else(|| TreeError::ContentNotFound(key.to_string()))
    }
}

impl<T: fmt::Display> TreeArena<T> {
    /// Serializes the tree into its indentation form: one line per node,
    /// leading-space count encoding depth, exact child order.
    ///
    /// Feeding the lines back through `TreeBuilder` reproduces the tree.
    #[instrument(level = "debug", skip(self))]
    pub fn to_string_deep(&self) -> String {
        let mut lines = Vec::new();
        if let Some(root) = self.root {
            self.collect_lines(root, 0, &mut lines);
        }
        lines.join("\n")
    }

    #[instrument(level = "trace", skip(self, lines))]
    fn collect_lines(&self, node_idx: Index, depth: usize, lines: &mut Vec<String>) {
        if let Some(node) = self.get_node(node_idx) {
            lines.push(format!("{}{}", " ".repeat(depth), node.content));
            for &child in &node.children {
                self.collect_lines(child, depth + 1, lines);
            }
        }
    }

    /// Renders the tree with box-drawing guides for terminal display.
    #[instrument(level = "debug", skip(self))]
    pub fn to_display_tree(&self) -> Option<Tree<String>> {
        self.root.and_then(|root| self.display_subtree(root))
    }

    fn display_subtree(&self, node_idx: Index) -> Option<Tree<String>> {
        let node = self.get_node(node_idx)?;
        let leaves: Vec<_> = node
            .children
            .iter()
            .filter_map(|&child| self.display_subtree(child))
            .collect();
        Some(Tree::new(node.content.to_string()).with_leaves(leaves))
    }
}

pub struct TreeIterator<'a, T> {
    arena: &'a TreeArena<T>,
    stack: Vec<Index>,
}

impl<'a, T> TreeIterator<'a, T> {
    fn new(arena: &'a TreeArena<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a, T> Iterator for TreeIterator<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a, T> {
    arena: &'a TreeArena<T>,
    stack: Vec<(Index, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    fn new(arena: &'a TreeArena<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, false));
        }
        Self { arena, stack }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
