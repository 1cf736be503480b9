use crate::*;
use std::{
    cmp::Ordering,
    collections::{btree_map, BTreeMap},
    ops::Index,
    sync::Arc,
};
use tracing::debug;

/// A unique track identifier.
pub type TrackId = usize;

/// Per-track hypotheses keyed (and therefore iterated) by ascending track identifier.
pub type TrackHypotheses = BTreeMap<TrackId, Arc<dyn Hypothesis>>;

/// Collect `(track_id, hypothesis)` pairs rejecting any track supplied twice.
fn collect_tracks<I>(hypotheses: I) -> Result<TrackHypotheses>
where
    I: IntoIterator<Item = (TrackId, Arc<dyn Hypothesis>)>,
{
    let mut tracks = TrackHypotheses::new();
    for (track_id, hypothesis) in hypotheses {
        if tracks.insert(track_id, hypothesis).is_some() {
            return Err(HypothesisError::DuplicateTrack { track_id });
        }
    }
    Ok(tracks)
}

/// A complete candidate assignment: one hypothesis per track for one time step.
///
/// The variant is chosen by [`JointHypothesis::from_hypotheses`] from the scoring family of the
/// per-track hypotheses.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum JointHypothesis {
    Distance(DistanceJointHypothesis),
}

impl JointHypothesis {
    /// Build the joint hypothesis matching the scoring family of `hypotheses`.
    ///
    /// # Parameters
    ///
    /// * `hypotheses`: One `(track_id, hypothesis)` pair per track.
    ///
    /// # Returns
    ///
    /// * `DuplicateTrack` if a track identifier appears twice.
    /// * `EmptyAssignment` if there are no tracks.
    /// * `MixedHypothesisFamily` if the hypotheses do not share a scoring family.
    /// * `UnsupportedHypothesisFamily` if there is no joint variant for the family.
    pub fn from_hypotheses<I>(hypotheses: I) -> Result<JointHypothesis>
    where
        I: IntoIterator<Item = (TrackId, Arc<dyn Hypothesis>)>,
    {
        let hypotheses = collect_tracks(hypotheses)?;

        let joint = match homogeneous_family(hypotheses.values().map(|h| &**h))? {
            HypothesisFamily::Distance => {
                JointHypothesis::Distance(DistanceJointHypothesis::from_tracks(hypotheses)?)
            }
            family => return Err(HypothesisError::UnsupportedHypothesisFamily { family }),
        };

        debug!(
            tracks = joint.len(),
            family = %joint.family(),
            "constructed joint hypothesis"
        );

        Ok(joint)
    }

    /// Returns the scoring family of the constituent hypotheses
    pub fn family(&self) -> HypothesisFamily {
        match self {
            JointHypothesis::Distance(_) => HypothesisFamily::Distance,
        }
    }

    /// Returns the joint hypothesis as a DistanceJointHypothesis if it is one
    pub fn as_distance(&self) -> Option<&DistanceJointHypothesis> {
        match self {
            JointHypothesis::Distance(joint) => Some(joint),
        }
    }

    /// Compare by quality. `Greater` means `self` is the better assignment.
    ///
    /// Fails with [`HypothesisError::TypeMismatch`] when the two joint hypotheses have different
    /// scoring families.
    pub fn quality_cmp(&self, other: &JointHypothesis) -> Result<Ordering> {
        if self.family() != other.family() {
            return Err(HypothesisError::TypeMismatch {
                expected: self.family(),
                found: other.family(),
            });
        }

        match (self, other) {
            (JointHypothesis::Distance(a), JointHypothesis::Distance(b)) => Ok(a.cmp(b)),
        }
    }

    /// Returns the per-track hypotheses
    pub fn hypotheses(&self) -> &TrackHypotheses {
        match self {
            JointHypothesis::Distance(joint) => joint.hypotheses(),
        }
    }

    /// Returns the hypothesis for `track_id`
    pub fn get(&self, track_id: &TrackId) -> Option<&Arc<dyn Hypothesis>> {
        self.hypotheses().get(track_id)
    }

    /// Returns true if `track_id` is part of the assignment
    pub fn contains_key(&self, track_id: &TrackId) -> bool {
        self.hypotheses().contains_key(track_id)
    }

    /// Returns the number of tracks
    pub fn len(&self) -> usize {
        self.hypotheses().len()
    }

    /// Always false for a constructed joint hypothesis
    pub fn is_empty(&self) -> bool {
        self.hypotheses().is_empty()
    }

    /// Iterate `(track_id, hypothesis)` in ascending track order
    pub fn iter(&self) -> btree_map::Iter<'_, TrackId, Arc<dyn Hypothesis>> {
        self.hypotheses().iter()
    }

    /// Iterate track identifiers in ascending order
    pub fn keys(&self) -> btree_map::Keys<'_, TrackId, Arc<dyn Hypothesis>> {
        self.hypotheses().keys()
    }

    /// Iterate hypotheses in ascending track order
    pub fn values(&self) -> btree_map::Values<'_, TrackId, Arc<dyn Hypothesis>> {
        self.hypotheses().values()
    }
}

impl Index<&TrackId> for JointHypothesis {
    type Output = Arc<dyn Hypothesis>;

    fn index(&self, track_id: &TrackId) -> &Self::Output {
        &self.hypotheses()[track_id]
    }
}

impl<'a> IntoIterator for &'a JointHypothesis {
    type Item = (&'a TrackId, &'a Arc<dyn Hypothesis>);
    type IntoIter = btree_map::Iter<'a, TrackId, Arc<dyn Hypothesis>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Distance scored joint hypothesis.
///
/// The score is the sum of the constituent distances, added in ascending track order once at
/// construction so the same set of hypotheses always produces the same bits. As with
/// [`DistanceHypothesis`], `Ord` is reversed: a smaller summed distance is greater.
#[derive(Debug, Clone)]
pub struct DistanceJointHypothesis {
    /// Association hypotheses, one per track.
    hypotheses: TrackHypotheses,
    /// Sum of the hypothesis distances.
    distance: f64,
}

impl DistanceJointHypothesis {
    /// Returns a new DistanceJointHypothesis
    ///
    /// # Parameters
    ///
    /// * `hypotheses`: One `(track_id, hypothesis)` pair per track. Every hypothesis must be a
    ///   [`DistanceHypothesis`].
    pub fn new<I>(hypotheses: I) -> Result<DistanceJointHypothesis>
    where
        I: IntoIterator<Item = (TrackId, Arc<dyn Hypothesis>)>,
    {
        DistanceJointHypothesis::from_tracks(collect_tracks(hypotheses)?)
    }

    fn from_tracks(hypotheses: TrackHypotheses) -> Result<DistanceJointHypothesis> {
        match homogeneous_family(hypotheses.values().map(|h| &**h))? {
            HypothesisFamily::Distance => {}
            family => return Err(HypothesisError::UnsupportedHypothesisFamily { family }),
        }

        let distance = hypotheses
            .values()
            .try_fold(0.0, |distance, hypothesis| match hypothesis.as_distance() {
                Some(hypothesis) => Ok(distance + hypothesis.distance()),
                None => Err(HypothesisError::TypeMismatch {
                    expected: HypothesisFamily::Distance,
                    found: hypothesis.family(),
                }),
            })?;

        Ok(DistanceJointHypothesis {
            hypotheses,
            distance,
        })
    }

    /// Returns the summed distance of the joint hypothesis
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the per-track hypotheses
    pub fn hypotheses(&self) -> &TrackHypotheses {
        &self.hypotheses
    }

    /// Returns the hypothesis for `track_id` as a DistanceHypothesis
    pub fn distance_hypothesis(&self, track_id: &TrackId) -> Option<&DistanceHypothesis> {
        self.hypotheses
            .get(track_id)
            .and_then(|hypothesis| hypothesis.as_distance())
    }

    /// Returns the hypothesis for `track_id`
    pub fn get(&self, track_id: &TrackId) -> Option<&Arc<dyn Hypothesis>> {
        self.hypotheses.get(track_id)
    }

    /// Returns true if `track_id` is part of the assignment
    pub fn contains_key(&self, track_id: &TrackId) -> bool {
        self.hypotheses.contains_key(track_id)
    }

    /// Returns the number of tracks
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    /// Always false for a constructed joint hypothesis
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    /// Iterate `(track_id, hypothesis)` in ascending track order
    pub fn iter(&self) -> btree_map::Iter<'_, TrackId, Arc<dyn Hypothesis>> {
        self.hypotheses.iter()
    }
}

impl Index<&TrackId> for DistanceJointHypothesis {
    type Output = Arc<dyn Hypothesis>;

    fn index(&self, track_id: &TrackId) -> &Self::Output {
        &self.hypotheses[track_id]
    }
}

impl<'a> IntoIterator for &'a DistanceJointHypothesis {
    type Item = (&'a TrackId, &'a Arc<dyn Hypothesis>);
    type IntoIter = btree_map::Iter<'a, TrackId, Arc<dyn Hypothesis>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for DistanceJointHypothesis {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for DistanceJointHypothesis {}

impl PartialOrd for DistanceJointHypothesis {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistanceJointHypothesis {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}
