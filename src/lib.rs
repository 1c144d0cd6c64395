//! Generic trees with path-based addressing, ancestor queries, and
//! structural comparison.
//!
//! Trees live in an index-based arena ([`TreeArena`]); the query algorithms
//! ([`query`]) navigate through the [`TreeDef`] capability descriptor and
//! are independent of the arena representation. Test trees are built from
//! indentation-encoded fixtures via [`TreeBuilder`] and serialize back to
//! the same form with [`TreeArena::to_string_deep`].

pub mod arena;
pub mod builder;
pub mod comparison;
pub mod error;
pub mod query;
pub mod treedef;
pub mod util;

pub use arena::{TreeArena, TreeNode};
pub use builder::TreeBuilder;
pub use comparison::TreeComparison;
pub use error::{TreeError, TreeResult};
pub use treedef::TreeDef;
