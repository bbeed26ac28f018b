//! Replaying adapters: serve recorded interactions instead of live calls.

pub mod clock;

pub use clock::ReplayingClock;
