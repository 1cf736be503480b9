//! Hypotheses for multi-target tracking data association.
//!
//! A [`Hypothesis`] pairs a predicted track state with a detection (or none) and is ranked by
//! quality. A [`JointHypothesis`] combines one hypothesis per track into a complete assignment
//! for one time step and is ranked by an aggregate score.

mod detection;
mod distance_hypothesis;
mod error;
mod hypothesis;
mod joint_hypothesis;
mod state;

pub use detection::Detection;
pub use distance_hypothesis::DistanceHypothesis;
pub use error::{HypothesisError, Result};
pub use hypothesis::{homogeneous_family, Hypothesis, HypothesisFamily};
pub use joint_hypothesis::{DistanceJointHypothesis, JointHypothesis, TrackHypotheses, TrackId};
pub use state::State;
