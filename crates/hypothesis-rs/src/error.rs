use crate::{HypothesisFamily, TrackId};
use thiserror::Error;

/// Errors raised while constructing or comparing hypotheses.
///
/// All of these are data-contract errors detected synchronously; none are transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HypothesisError {
    /// A distance was negative or NaN.
    #[error("invalid hypothesis score: distance {distance} must be >= 0 and not NaN")]
    InvalidScore { distance: f64 },

    /// Two hypotheses of different scoring families were compared.
    #[error("cannot compare {expected} hypothesis with {found} hypothesis")]
    TypeMismatch {
        expected: HypothesisFamily,
        found: HypothesisFamily,
    },

    /// A joint hypothesis was requested over zero tracks.
    #[error("joint hypothesis requires at least one track")]
    EmptyAssignment,

    /// The same track was supplied more than once.
    #[error("track {track_id} supplied more than once")]
    DuplicateTrack { track_id: TrackId },

    /// The per-track hypotheses do not share one scoring family.
    #[error("joint hypothesis mixes scoring families: {families:?}")]
    MixedHypothesisFamily { families: Vec<HypothesisFamily> },

    /// No joint aggregation rule exists for this scoring family.
    #[error("no joint hypothesis is implemented for {family} hypotheses")]
    UnsupportedHypothesisFamily { family: HypothesisFamily },
}

pub type Result<T> = std::result::Result<T, HypothesisError>;
