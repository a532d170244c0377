//! Small, self-contained data structures backing the solver core.
//!
//! # Scope
//! `stdx` hosts narrow, allocation-free utilities tuned for fixed-shape
//! sliding-window work rather than general-purpose ergonomics.
//!
//! # Design themes
//! - Compile-time capacity; operations panic on contract violations.
//! - Deterministic state: popped slots are reset, equality is logical.
//!
//! # Module map
//! - `cyclic_queue`: fixed-capacity FIFO with relative indexing from both ends.

pub mod cyclic_queue;

pub use cyclic_queue::CyclicQueue;
