//! In-memory host tree for the composition engine
//!
//! The engine only needs a handful of host primitives: create an element or
//! text node, set an attribute, register a listener, append a child and look
//! a container up by identifier. This module provides them over a plain
//! shared-handle tree so the engine can run (and be tested) anywhere.

mod document;
mod node;


pub use document::Document;
pub use node::{Node, NodeKind};
