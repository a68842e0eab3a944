//! Demonstration driver for the `dynarray` container.
//!
//! Runs a fixed script of pushes, removals and pops against a
//! [`dynarray::DynamicArray`], printing each resulting state. The binary
//! wires [`DemoConfig::from_env`], [`logging::init`] and [`run_script`]
//! together against stdout.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod logging;
pub mod script;

pub use config::DemoConfig;
pub use script::{run_script, Step, DEMO_SCRIPT};
