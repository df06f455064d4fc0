//! # u-disjoint
//!
//! Disjoint-set (union-find) primitives for the U-Engine ecosystem.
//!
//! This crate provides one building block: [`UnionFind`], a partition of
//! integer keys into disjoint groups under repeated merging. It is
//! domain-agnostic — it knows nothing about graphs, clustering, or any
//! consumer domain. Callers embed it inside larger algorithms such as
//! cycle detection, connectivity tracking, and Kruskal's minimum
//! spanning tree.
//!
//! ## Modules
//!
//! - [`union_find`] — Sparse disjoint-set forest with path compression
//!   and union by rank
//!
//! ## Design Philosophy
//!
//! - **Amortized guarantees first**: path compression and union by rank
//!   are always on, never optional
//! - **Lazy universe**: a key exists the moment it is mentioned; no
//!   up-front sizing, no insert step, no failure modes
//! - **No unnecessary dependencies**: pure Rust over std collections
//! - **Property-based testing**: partition invariants verified via proptest

pub mod union_find;

pub use union_find::UnionFind;
