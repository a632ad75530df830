//! Resolves where the Lottie exporter plugin framework gets copied after a build.
//!
//! [`resolver::resolve`] is the entry point for build tooling: it maps `"DEBUG"` or
//! `"RELEASE"` to the framework bundle and the Animate install directory it belongs in.

pub mod config;
pub mod logging;
pub mod output;
pub mod resolver;

pub use resolver::{resolve, ConfigPathEntry, PathTable};
