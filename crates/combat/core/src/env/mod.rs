//! Environment handles injected into a combat session.
//!
//! Sessions never reach for ambient state; randomness arrives through an
//! [`RngOracle`] chosen by the host.

mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
