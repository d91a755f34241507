//! # goalswim
//!
//! A planar swimmer that has to reach a random goal, packaged as a
//! reinforcement-learning environment, plus a small runner that rolls out a
//! uniform-random policy and reports episode diagnostics.
//!
//! ## The Crates
//!
//! -   **`goalswim`:** this crate. Command-line parsing lives in [`cli`] and
//!     the rollout loop in [`app`].
//! -   **[`physics`]:** the swimmer body: a chain of rigid segments with
//!     motorised joints moving through a viscous fluid.
//! -   **[`rl`]:** environment traits, the swimmer locomotion environment and
//!     the goal-reaching task layered on top of it.
//!
//! ## Getting Started
//!
//! ```text
//! goalswim --reward-type sparse --episodes 10 --max-steps 500 --seed 3
//! RUST_LOG=debug goalswim --config swimmer.json --goal 2,-1 --json
//! ```

pub mod app;
pub mod cli;

pub use physics;
pub use rl;
