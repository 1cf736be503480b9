use crate::*;
use std::{cmp::Ordering, fmt, sync::Arc};

/// Enumeration type for the scoring strategy used to rank a hypothesis.
///
/// * `Distance` means smaller separation between innovation and detection is better.
/// * `Other` names a scoring strategy defined outside this crate (likelihood, probability, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HypothesisFamily {
    Distance,
    Other(&'static str),
}

impl fmt::Display for HypothesisFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HypothesisFamily::Distance => write!(f, "distance"),
            HypothesisFamily::Other(name) => write!(f, "{name}"),
        }
    }
}

/// A candidate pairing of one predicted track state with one detection, or with no detection.
///
/// Every implementation provides a total order by *quality* through [`Hypothesis::quality_cmp`],
/// where `Ordering::Greater` means `self` is the better hypothesis. The relational helpers
/// (`quality_lt`, `quality_le`, `quality_eq`, `quality_gt`, `quality_ge`) are all derived from
/// that one relation so they cannot disagree.
///
/// Implementations must be immutable once constructed.
pub trait Hypothesis: fmt::Debug + Send + Sync {
    /// Track state predicted forward to the time of the detection.
    fn prediction(&self) -> &Arc<State>;

    /// Track prediction translated into measurement space.
    fn innovation(&self) -> &Arc<State>;

    /// Detection used for this hypothesis, or `None` for a missed detection.
    fn detection(&self) -> Option<&Arc<Detection>>;

    /// Scoring family of this hypothesis.
    fn family(&self) -> HypothesisFamily;

    /// Compare by quality. `Greater` means `self` is better than `other`.
    ///
    /// Fails with [`HypothesisError::TypeMismatch`] if `other` belongs to a different family.
    fn quality_cmp(&self, other: &dyn Hypothesis) -> Result<Ordering>;

    /// Returns this hypothesis as a [`DistanceHypothesis`] if it is one.
    fn as_distance(&self) -> Option<&DistanceHypothesis> {
        None
    }

    /// Returns true if the hypothesis carries no detection.
    fn is_missed_detection(&self) -> bool {
        self.detection().is_none()
    }

    /// `self` is worse than `other`.
    fn quality_lt(&self, other: &dyn Hypothesis) -> Result<bool> {
        Ok(self.quality_cmp(other)? == Ordering::Less)
    }

    /// `self` is worse than or as good as `other`.
    fn quality_le(&self, other: &dyn Hypothesis) -> Result<bool> {
        Ok(self.quality_cmp(other)? != Ordering::Greater)
    }

    /// `self` is exactly as good as `other`.
    fn quality_eq(&self, other: &dyn Hypothesis) -> Result<bool> {
        Ok(self.quality_cmp(other)? == Ordering::Equal)
    }

    /// `self` is better than `other`.
    fn quality_gt(&self, other: &dyn Hypothesis) -> Result<bool> {
        Ok(self.quality_cmp(other)? == Ordering::Greater)
    }

    /// `self` is better than or as good as `other`.
    fn quality_ge(&self, other: &dyn Hypothesis) -> Result<bool> {
        Ok(self.quality_cmp(other)? != Ordering::Less)
    }
}

/// Returns the scoring family shared by every hypothesis in `hypotheses`.
///
/// # Returns
///
/// * `EmptyAssignment` if there are no hypotheses.
/// * `MixedHypothesisFamily` listing every family seen (in first-seen order) if they differ.
pub fn homogeneous_family<'a, I, H>(hypotheses: I) -> Result<HypothesisFamily>
where
    I: IntoIterator<Item = &'a H>,
    H: Hypothesis + ?Sized + 'a,
{
    let mut families: Vec<HypothesisFamily> = Vec::new();
    for hypothesis in hypotheses {
        let family = hypothesis.family();
        if !families.contains(&family) {
            families.push(family);
        }
    }

    match families.len() {
        0 => Err(HypothesisError::EmptyAssignment),
        1 => Ok(families[0]),
        _ => Err(HypothesisError::MixedHypothesisFamily { families }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::*;
    use anyhow::Result;
    use std::{cmp::Ordering, sync::Arc};

    /// Hypothesis from a scoring family this crate has no joint aggregation rule for.
    #[derive(Debug)]
    pub(crate) struct ForeignHypothesis {
        prediction: Arc<State>,
        innovation: Arc<State>,
        detection: Option<Arc<Detection>>,
        family: &'static str,
    }

    impl ForeignHypothesis {
        pub(crate) fn new(family: &'static str) -> ForeignHypothesis {
            ForeignHypothesis {
                prediction: Arc::new(State::new(vec![0.0, 0.0])),
                innovation: Arc::new(State::new(vec![0.0])),
                detection: Some(Arc::new(Detection::new(None, vec![0.0]))),
                family,
            }
        }
    }

    impl Hypothesis for ForeignHypothesis {
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
            HypothesisFamily::Other(self.family)
        }

        fn quality_cmp(&self, other: &dyn Hypothesis) -> crate::Result<Ordering> {
            if other.family() == self.family() {
                Ok(Ordering::Equal)
            } else {
                Err(HypothesisError::TypeMismatch {
                    expected: self.family(),
                    found: other.family(),
                })
            }
        }
    }

    pub(crate) fn distance_hypothesis(distance: f64) -> crate::Result<DistanceHypothesis> {
        DistanceHypothesis::new(
            Arc::new(State::new(vec![0.0, 0.0, 1.0, 1.0])),
            Arc::new(State::new(vec![0.0, 0.0])),
            Some(Arc::new(Detection::new(None, vec![distance, 0.0]))),
            distance,
        )
    }

    #[test]
    fn family_display() {
        assert_eq!(HypothesisFamily::Distance.to_string(), "distance");
        assert_eq!(HypothesisFamily::Other("likelihood").to_string(), "likelihood");
    }

    #[test]
    fn relational_helpers_agree() -> Result<()> {
        let near = distance_hypothesis(1.0)?;
        let far = distance_hypothesis(4.0)?;

        assert!(near.quality_gt(&far)?);
        assert!(near.quality_ge(&far)?);
        assert!(!near.quality_lt(&far)?);
        assert!(!near.quality_le(&far)?);
        assert!(!near.quality_eq(&far)?);

        assert!(far.quality_lt(&near)?);
        assert!(far.quality_le(&near)?);
        assert!(near.quality_eq(&near)?);

        Ok(())
    }

    #[test]
    fn cross_family_comparison_is_type_mismatch() -> Result<()> {
        let distance = distance_hypothesis(1.0)?;
        let likelihood = ForeignHypothesis::new("likelihood");

        assert_eq!(
            distance.quality_cmp(&likelihood),
            Err(HypothesisError::TypeMismatch {
                expected: HypothesisFamily::Distance,
                found: HypothesisFamily::Other("likelihood"),
            })
        );
        assert!(distance.quality_gt(&likelihood).is_err());
        assert!(likelihood.quality_le(&distance).is_err());

        Ok(())
    }

    #[test]
    fn homogeneous() -> Result<()> {
        let a = distance_hypothesis(1.0)?;
        let b = distance_hypothesis(2.0)?;
        let c = ForeignHypothesis::new("likelihood");

        let distances: [&dyn Hypothesis; 2] = [&a, &b];
        let foreign: [&dyn Hypothesis; 1] = [&c];
        let mixed: [&dyn Hypothesis; 3] = [&a, &c, &b];

        assert_eq!(homogeneous_family(distances)?, HypothesisFamily::Distance);
        assert_eq!(
            homogeneous_family(foreign)?,
            HypothesisFamily::Other("likelihood")
        );
        assert_eq!(
            homogeneous_family(mixed),
            Err(HypothesisError::MixedHypothesisFamily {
                families: vec![HypothesisFamily::Distance, HypothesisFamily::Other("likelihood")],
            })
        );
        assert_eq!(
            homogeneous_family(std::iter::empty::<&dyn Hypothesis>()),
            Err(HypothesisError::EmptyAssignment)
        );

        Ok(())
    }
}
