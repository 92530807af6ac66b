// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven motion and small interactive behaviours for static
//! landing pages, compiled to WebAssembly.
//!
//! The crate reveals cards as they enter the viewport, staggers the hero
//! entrance, counts stat numbers up, tracks scroll position (navbar
//! emphasis, progress bar, parallax), switches tab panels, adds
//! copy-to-clipboard buttons to code blocks, and handles in-page
//! navigation.
//!
//! # Key entry points
//!
//! - [`page::LandingPage`] - wires every behaviour for one document
//! - [`options::Options`] - selectors, thresholds and timings, overridable
//!   from TOML
//! - [`dom`] - the `Element`/`Document`/`Scheduler`/`Clipboard` seams the
//!   behaviours are written against
//!
//! # Architecture
//!
//! Behaviours never touch the browser directly. They are generic over the
//! [`dom`] traits, so the same code runs against the live page (the `web`
//! feature, via `web-sys`) and against an in-memory document in tests.
//! Deferred work (hero timers, counter frames, copy confirmation) goes
//! through a [`dom::Scheduler`] and always runs to completion.

pub mod animation;
pub mod copy;
pub mod dom;
pub mod error;
pub mod events;
pub mod navigation;
pub mod options;
pub mod page;
pub mod scroll;
pub mod tabs;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::MotionError;
pub use options::Options;
pub use page::LandingPage;
