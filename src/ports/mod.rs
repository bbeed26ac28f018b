//! Port traits at the boundary between the formatter and the outside world.
//!
//! Implementations live in `src/adapters/`.

pub mod clock;

pub use clock::Clock;
