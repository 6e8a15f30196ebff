//! # Sundialr Library
//!
//! Internal library for the Sundialr binary application
//!
//! This library exists to enable testing of the rendering internals and provide
//! clean separation between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! The library is organized around one pure pipeline: a sun/moon times record
//! goes in, a rendered raster comes out.
//!
//! - **Data Model**: `times` holds the upstream record and wall-clock parsing
//! - **Geometry**: `angles` maps clock times onto the 24-hour dial, `twilight`
//!   derives first/last light, `layout` resolves label placement
//! - **Rendering**: `render` draws the dial onto an RGBA canvas, `encode`
//!   turns the canvas into a JPEG
//! - **Display**: `format` produces the 12-hour label strings
//! - **Infrastructure**: Configuration, argument parsing, and logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod angles;
pub mod args;
pub mod config;
pub mod constants;
pub mod encode;
pub mod format;
pub mod layout;
pub mod render;
pub mod times;
pub mod twilight;

// Re-export for binary
pub use render::render;
pub use times::{SunTimes, TimeOfDay};
