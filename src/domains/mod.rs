//! Domains module containing business logic organized by bounded contexts.
//!
//! - `tools`: the analytics report tool and its upstream client
//! - `prompts`: guided-analysis prompt templates
//! - `resources`: embedded documents

pub mod prompts;
pub mod resources;
pub mod tools;
