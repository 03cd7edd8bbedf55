//! Storage and deterministic execution for the meridian ledger core.
//!
//! The crate is layered leaves-first: [`global_state`] is the ordered
//! key-value store abstraction, [`tracking_copy`] the scratch layer that
//! caches reads and buffers writes over it, [`system`] the ledger logic
//! (balance primitives, actuators, genesis), and [`data_access_layer`] the
//! request/result surface consumed by block assembly.

#![doc(html_root_url = "https://docs.rs/meridian-storage/0.1.0")]
#![warn(missing_docs)]

/// Request and result types for driving the core.
pub mod data_access_layer;
/// Global state logic.
pub mod global_state;
/// System logic: balance ledger, actuators, genesis.
pub mod system;
/// Tracking copy.
pub mod tracking_copy;

pub use tracking_copy::TrackingCopy;
