//! OGI Environment Abstraction Layer
//!
//! This crate isolates every source of non-determinism the simulation
//! touches, so the learning agents in `ogi_core` stay pure:
//!
//! - Randomness (`uniform()`, `gaussian()`, `choose_index()`)
//! - Time (`now()`, `system_time()`)
//!
//! The runner owns one [`SeededEntropy`] per scenario and threads it into
//! every agent call by `&mut dyn Entropy`. Tests substitute the scripted
//! sources in [`fakes`] to force specific outcomes.
//!
//! # Example
//!
//! ```
//! use ogi_env::{Entropy, SeededEntropy};
//!
//! let mut a = SeededEntropy::new(42);
//! let mut b = SeededEntropy::new(42);
//! assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
//! ```

mod context;
pub mod fakes;
mod seeded;
mod system_impl;
mod types;

pub use context::{Clock, Entropy};
pub use seeded::{derive_stream_seed, SeededEntropy};
pub use system_impl::SystemClock;
pub use types::AgentId;
