use crate::*;
use std::{cmp::Ordering, sync::Arc};
use tracing::trace;

/// Validate a distance score. Negative and NaN distances are rejected, `+inf` is accepted
/// (a gated out pairing) and `-0.0` is normalised to `0.0`.
pub(crate) fn validate_distance(distance: f64) -> Result<f64> {
    if distance.is_nan() || distance < 0.0 {
        trace!(distance, "rejecting distance score");
        Err(HypothesisError::InvalidScore { distance })
    } else {
        Ok(distance + 0.0)
    }
}

/// Distance scored hypothesis.
///
/// A smaller distance is a better hypothesis, so `Ord` is reversed with respect to the raw
/// distance: `a > b` if and only if `a.distance() < b.distance()`. `Iterator::max` and
/// `BinaryHeap::pop` therefore return the closest pairing, while an ascending `sort` runs
/// from worst to best. Equality is exact equality of distances.
///
/// Use [`DistanceHypothesis::distance`] when the numeric value is wanted.
#[derive(Debug, Clone)]
pub struct DistanceHypothesis {
    /// Track state predicted forward to the time of the detection.
    prediction: Arc<State>,
    /// Track prediction in measurement space.
    innovation: Arc<State>,
    /// Detection used for the hypothesis, `None` for a missed detection.
    detection: Option<Arc<Detection>>,
    /// Distance between the innovation and the detection.
    distance: f64,
}

impl DistanceHypothesis {
    /// Returns a new DistanceHypothesis
    ///
    /// # Parameters
    ///
    /// * `prediction`: Track state predicted to the time of the detection.
    /// * `innovation`: Track prediction in measurement space.
    /// * `detection`: The detection, or `None` for a missed detection.
    /// * `distance`: Distance between `innovation` and `detection`. Must be `>= 0` and not NaN.
    pub fn new(
        prediction: Arc<State>,
        innovation: Arc<State>,
        detection: Option<Arc<Detection>>,
        distance: f64,
    ) -> Result<DistanceHypothesis> {
        Ok(DistanceHypothesis {
            prediction,
            innovation,
            detection,
            distance: validate_distance(distance)?,
        })
    }

    /// Returns a new DistanceHypothesis with no detection.
    pub fn missed_detection(
        prediction: Arc<State>,
        innovation: Arc<State>,
        distance: f64,
    ) -> Result<DistanceHypothesis> {
        DistanceHypothesis::new(prediction, innovation, None, distance)
    }

    /// Return the distance of the hypothesis
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl Hypothesis for DistanceHypothesis {
    fn prediction(&self) -> &Arc<State> {
        &self.prediction
    }

    fn innovation(&self) -> &Arc<State> {
        &self.innovation
    }

    fn detection(&self) -> Option<&Arc<Detection>> {
        self.detection.as_ref()
    }

    fn family(&self) -> HypothesisFamily {
        HypothesisFamily::Distance
    }

    fn quality_cmp(&self, other: &dyn Hypothesis) -> Result<Ordering> {
        match other.as_distance() {
            Some(other) => Ok(self.cmp(other)),
            None => Err(HypothesisError::TypeMismatch {
                expected: self.family(),
                found: other.family(),
            }),
        }
    }

    fn as_distance(&self) -> Option<&DistanceHypothesis> {
        Some(self)
    }
}

impl PartialEq for DistanceHypothesis {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for DistanceHypothesis {}

impl PartialOrd for DistanceHypothesis {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistanceHypothesis {
    // distance is never NaN or -0.0 so total_cmp agrees with ==
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}
