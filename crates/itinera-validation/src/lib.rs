//! Itinera validation core
//!
//! Pure validation functions for the travel-itinerary request form,
//! compatible with both std and no_std environments. Used by the form
//! engine and the WASM client-side bindings so both sides agree on what
//! counts as valid.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod email;
pub mod numeric;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use string::*;
