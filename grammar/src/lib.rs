//! Typed, hashable grammar values built from a grammar description tree.
//!
//! Values are created mutable, filled in, and then frozen. Frozen values
//! compare and hash by their rendering, which makes them usable as keys in the
//! sets and maps of later grammar algorithms.

mod config;
mod error;
pub mod freeze;
mod production;
mod symbol;
mod tag;
pub mod transform;
pub mod tree;

pub use config::Config;
pub use error::{Error, Result};
pub use freeze::{Lockable, Render};
pub use production::Production;
pub use symbol::{Symbol, SymbolKind};
pub use tag::{Handler, Tag};
pub use transform::{Node, Transformer};
pub use tree::{Child, Tree};
