// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! Interaction core for an interactive 3D globe of labeled points.
//!
//! Terrella owns everything about the globe except drawing it: the orbit
//! camera with smoothed rotation, clamped zoom, and idle spin; pointer
//! picking against the globe sphere; nearest-point search; and the hover
//! focus state machine with its enter/exit transitions and pulsing focus
//! rings.
//!
//! # Key entry points
//!
//! - [`engine::GlobeWidget`] - the widget façade
//! - [`engine::RenderSurface`] - the trait a host implements to draw frames
//! - [`options::Options`] - runtime configuration (camera, picking, focus,
//!   layers, assets, colors, keybindings)
//! - [`picking`] - ray/sphere picking and nearest-point search
//!
//! # Architecture
//!
//! Everything is single-threaded and driven by
//! [`engine::GlobeWidget::tick`]. Delays and periodic behavior (hover
//! debounce, idle spin, transitions, ring pulse) are timers advanced by the
//! tick's elapsed time, so tearing the widget down cannot leave callbacks
//! running.

pub mod camera;
pub mod engine;
pub mod error;
pub mod focus;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{GlobeCommand, GlobeWidget, RenderSurface};
pub use error::GlobeError;
