//! Host key-value storage contracts and implementations.
//!
//! # Responsibility
//! - Model the host's durable key-value slot behind one trait.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `set` replaces any prior value under the same key.
//! - Repositories store opaque strings; they never interpret values.

pub mod kv_repo;
