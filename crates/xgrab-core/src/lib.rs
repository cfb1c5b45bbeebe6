//! Core library for xgrab.
//!
//! Detects hoverable media (images, animated GIFs served as video) in the
//! X/Twitter feed DOM, resolves the original-resolution asset URL, and
//! drives downloads. The URL logic (`classify`, `resolve`, `filename`) is
//! pure and unit-testable; the DOM, overlay, and background pieces are thin
//! stateful shells over it.

pub mod classify;
pub mod config;
pub mod dispatch;
pub mod dom;
pub mod fetch;
pub mod filename;
pub mod logging;
pub mod messages;
pub mod overlay;
pub mod resolve;
pub mod stats;
