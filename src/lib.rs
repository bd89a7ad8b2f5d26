//! GraphKit - A generic directed graph library with ranked shortest path search
//!
//! This crate provides an index-arena directed graph, classic traversals and
//! the Hoffman-Pavley deviation algorithm for the K best loopless paths
//! between two vertices under a pluggable distance relaxer.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;
