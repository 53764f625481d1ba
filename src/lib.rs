//! Linkup workflow node
//!
//! Exposes the Linkup LinkedIn automation API as resource/operation pairs:
//! a declarative form schema, a per-operation request body builder, and an
//! execution loop that turns each input item into exactly one API call.

#![recursion_limit = "256"]

pub mod config;
pub mod linkup;
pub mod node;
pub mod resource;

pub use config::LinkupConfig;
pub use node::{LinkupNode, NodeItem, NodeParameters};
