#![forbid(unsafe_code)]

//! Shared vocabulary for the picomenu menu model.
//!
//! This crate holds the types every other layer agrees on: the canonical
//! input [`Key`] set, the [`ItemKind`] capability tags, and the packed
//! per-item [`ItemFlags`]. It carries no behavior of its own.

pub mod event;
pub mod kind;

pub use event::Key;
pub use kind::{ItemFlags, ItemKind};
