//! Kanban boards, lists and cards.
//!
//! The `backend` feature carries the domain model, SQLite storage, the
//! REST API and the `kb` CLI. [`view`] is always built so the wasm
//! frontend shares the client state logic.

#[cfg(feature = "backend")]
pub mod api;
#[cfg(feature = "backend")]
pub mod cli;
#[cfg(feature = "backend")]
pub mod db;
#[cfg(feature = "backend")]
pub mod domain;
#[cfg(feature = "backend")]
pub mod paths;
#[cfg(feature = "backend")]
pub mod serde_utils;
#[cfg(feature = "backend")]
pub mod service;

pub mod view;

#[cfg(all(test, feature = "backend"))]
mod paths_test;
