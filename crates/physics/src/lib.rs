#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Swimmer Physics
//!
//! A small planar physics model of a multi-segment swimmer in a viscous
//! medium, used as the base locomotion simulation of the goal-reaching
//! environments in the `rl` crate.
//!
//! ## Key Components
//!
//! -   **Body:** [`SwimmerConfig`] describes the segment chain, its fluid
//!     drag, its joint motors and the integration step. Forward kinematics
//!     live in the [`swimmer`] module.
//! -   **Simulation:** [`SwimmerSim`] in the [`simulation`] module owns the
//!     state and advances it one control step at a time. It also reports
//!     the action bounds and the planar center of mass.
//! -   **Integration:** the [`integrator`] module applies anisotropic drag
//!     (resistive-force theory) to every segment, so undulating the joints
//!     produces net thrust.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{SwimmerConfig, SwimmerSim};
//!
//! let mut sim = SwimmerSim::with_seed(SwimmerConfig::default(), 7)?;
//! sim.reset();
//! sim.step(&[10.0, -10.0])?;
//! let com = sim.center_of_mass();
//! assert!(com.is_finite());
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod error;
pub mod integrator;
pub mod simulation;
pub mod swimmer;
pub mod types;

pub use error::PhysicsError;
pub use simulation::SwimmerSim;
pub use swimmer::SwimmerConfig;
pub use types::{ActionBounds, Segment, SwimmerState, Vec2};
