//! Reusable UI components.

pub mod trust_graph;
