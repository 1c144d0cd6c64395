//! Structural comparison of two trees.
//!
//! Two trees are structurally equal when every corresponding position holds
//! equal content, with the same number of children in the same order.

use std::fmt;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::TreeArena;
use crate::error::{TreeError, TreeResult};

/// Comparison of two trees, reporting the first divergence in pre-order.
pub struct TreeComparison<'a, T> {
    left: &'a TreeArena<T>,
    right: &'a TreeArena<T>,
}

impl<'a, T> TreeComparison<'a, T>
where
    T: PartialEq + fmt::Display,
{
    pub fn of(left: &'a TreeArena<T>, right: &'a TreeArena<T>) -> Self {
        Self { left, right }
    }

    /// Checks structural equality, returning the first mismatch encountered
    /// in pre-order as [`TreeError::ComparisonMismatch`].
    #[instrument(level = "debug", skip(self))]
    pub fn check(&self) -> TreeResult<()> {
        match (self.left.root(), self.right.root()) {
            (None, None) => Ok(()),
            (Some(left_root), Some(right_root)) => {
                let mut path = Vec::new();
                self.check_node(left_root, right_root, &mut path)
            }
            (left_root, _) => Err(TreeError::ComparisonMismatch {
                path: "<root>".to_string(),
                reason: if left_root.is_some() {
                    "right tree is empty".to_string()
                } else {
                    "left tree is empty".to_string()
                },
            }),
        }
    }

    /// Test-assertion semantics: panics with the mismatch description
    /// unless the trees are structurally identical.
    pub fn assert_equal(&self) {
        if let Err(mismatch) = self.check() {
            panic!("{}", mismatch);
        }
    }

    fn check_node(&self, left: Index, right: Index, path: &mut Vec<String>) -> TreeResult<()> {
        let left_node = self
            .left
            .get_node(left)
            .ok_or(TreeError::NodeNotFound(left))?;
        let right_node = self
            .right
            .get_node(right)
            .ok_or(TreeError::NodeNotFound(right))?;

        if left_node.content != right_node.content {
            return Err(TreeError::ComparisonMismatch {
                path: locate(path),
                reason: format!(
                    "content {:?} != {:?}",
                    left_node.content.to_string(),
                    right_node.content.to_string()
                ),
            });
        }

        // Content agrees at this position; descend under its name
        path.push(left_node.content.to_string());

        if left_node.children.len() != right_node.children.len() {
            let mismatch = TreeError::ComparisonMismatch {
                path: locate(path),
                reason: format!(
                    "child count {} != {}",
                    left_node.children.len(),
                    right_node.children.len()
                ),
            };
            path.pop();
            return Err(mismatch);
        }

        for (&left_child, &right_child) in left_node.children.iter().zip(&right_node.children) {
            if let Err(mismatch) = self.check_node(left_child, right_child, path) {
                path.pop();
                return Err(mismatch);
            }
        }

        path.pop();
        Ok(())
    }
}

/// Slash-joined location of a divergence, `<root>` when it is at the root
/// position itself.
fn locate(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join("/")
    }
}
