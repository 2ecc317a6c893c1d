// Rust guideline compliant 2026-08-18

//! Treescope Core Library
//!
//! This crate provides the foundational components for Treescope, a
//! JSF-style search-expression resolver over component trees:
//! - Component tree arena (handles, naming containers, facets, client ids)
//! - Segment resolvers (wildcard patterns, plain ids, `@` keywords)
//! - Expression parsing and dispatch
//! - JSON tree documents
//! - Configuration
//! - Error types and result handling

pub mod config;
pub mod document;
pub mod error;
pub mod expression;
pub mod resolver;
pub mod tree;

pub use config::{Config, OutputFormat};
pub use document::{NodeDocument, TreeDocument};
pub use error::{Error, Result};
pub use expression::{resolve_expression, DEFAULT_SEPARATOR};
pub use resolver::{
    resolver_for_segment, wildcard_match, IdResolver, PartialIdResolver, SegmentResolver,
};
pub use tree::{validate_id, ComponentTree, Node, NodeId};
