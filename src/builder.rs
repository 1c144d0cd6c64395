//! Tree builder for constructing trees from indentation-encoded text
//! fixtures.
//!
//! One line per node, leading-space count = depth, first line is the root.
//! This is a fixture-building utility for deterministic test trees, not a
//! general ingestion path; production trees are assembled directly through
//! [`TreeArena::insert_node`].

use generational_arena::Index;
use regex::Regex;
use tracing::instrument;

use crate::arena::TreeArena;
use crate::error::{TreeError, TreeResult};

/// Constructs trees from indented fixture lines.
pub struct TreeBuilder {
    indent_regex: Regex,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            indent_regex: Regex::new(r"^( *)(.*)$").unwrap(),
        }
    }

    /// Build a tree from fixture text, one node per line.
    #[instrument(level = "debug", skip(self, text))]
    pub fn build_from_str(&self, text: &str) -> TreeResult<TreeArena<String>> {
        let lines: Vec<&str> = text.lines().collect();
        self.build_from_lines(&lines)
    }

    /// Build a tree from fixture lines.
    ///
    /// Indentation rules are enforced fail-fast: a line may go one level
    /// deeper than its predecessor, stay at the same level, or return to any
    /// ancestor level. Anything else, a blank line, a second root, or empty
    /// input is [`TreeError::MalformedFixture`]; no partial tree is
    /// returned.
    #[instrument(level = "debug", skip(self, lines))]
    pub fn build_from_lines(&self, lines: &[&str]) -> TreeResult<TreeArena<String>> {
        if lines.is_empty() {
            return Err(TreeError::MalformedFixture {
                line: 0,
                reason: "empty fixture".to_string(),
            });
        }

        let mut tree = TreeArena::new();
        // stack[d] is the most recent node at depth d, i.e. the ancestor
        // chain of the previously parsed line
        let mut stack: Vec<Index> = Vec::new();

        for (line_no, line) in lines.iter().enumerate() {
            let caps = self.indent_regex.captures(line).unwrap();
            let depth = caps.get(1).unwrap().as_str().len();
            let content = caps.get(2).unwrap().as_str();

            if content.is_empty() {
                return Err(TreeError::MalformedFixture {
                    line: line_no + 1,
                    reason: "blank line".to_string(),
                });
            }
            if stack.is_empty() {
                if depth != 0 {
                    return Err(TreeError::MalformedFixture {
                        line: line_no + 1,
                        reason: "first line must not be indented".to_string(),
                    });
                }
            } else if depth > stack.len() {
                return Err(TreeError::MalformedFixture {
                    line: line_no + 1,
                    reason: format!(
                        "indentation jumps to depth {} from depth {}",
                        depth,
                        stack.len() - 1
                    ),
                });
            } else if depth == 0 {
                return Err(TreeError::MalformedFixture {
                    line: line_no + 1,
                    reason: "multiple roots".to_string(),
                });
            }

            stack.truncate(depth);
            let parent = stack.last().copied();
            let node_idx = tree.insert_node(content.to_string(), parent);
            stack.push(node_idx);
        }

        Ok(tree)
    }
}
