#![forbid(unsafe_code)]

//! Appearance settings for the picomenu menu model.
//!
//! The model stores an [`Appearance`] per page (or falls back to a global
//! one) and hands it to the drawing backend untouched. Keeping the type in
//! its own crate lets renderers depend on it without pulling in the model.

pub mod appearance;

pub use appearance::{Appearance, PointerKind};
