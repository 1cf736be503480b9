use ndarray::*;

/// State represents a track state, either predicted forward in time or translated into measurement space.
///
/// Hypotheses never inspect a State; it is carried so that downstream update steps can use it.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// The state vector.
    state_vector: Array1<f64>,
    /// Optional covariance of the state vector.
    covariance: Option<Array2<f64>>,
    /// Optional timestamp (seconds) the state refers to.
    timestamp: Option<f64>,
}

impl State {
    /// Returns a new State
    ///
    /// # Parameters
    ///
    /// * `state_vector`: The state vector.
    pub fn new(state_vector: Vec<f64>) -> State {
        State {
            state_vector: Array1::from_vec(state_vector),
            covariance: None,
            timestamp: None,
        }
    }

    /// Set covariance
    pub fn with_covariance(mut self, covariance: Array2<f64>) -> Self {
        self.covariance = Some(covariance);
        self
    }

    /// Set timestamp
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Returns the state vector
    pub fn state_vector(&self) -> &Array1<f64> {
        &self.state_vector
    }

    /// Returns the covariance of the state
    pub fn covariance(&self) -> Option<&Array2<f64>> {
        self.covariance.as_ref()
    }

    /// Returns the timestamp of the state
    pub fn timestamp(&self) -> Option<f64> {
        self.timestamp
    }

    /// Returns the dimension of the state vector
    pub fn ndim(&self) -> usize {
        self.state_vector.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use ndarray::*;

    #[test]
    fn builder() {
        let state = State::new(vec![1.0, 2.0, 0.5, 0.5])
            .with_covariance(Array2::eye(4))
            .with_timestamp(3.0);

        assert_eq!(state.state_vector(), &arr1(&[1.0, 2.0, 0.5, 0.5]));
        assert_eq!(state.covariance(), Some(&Array2::<f64>::eye(4)));
        assert_eq!(state.timestamp(), Some(3.0));
        assert_eq!(state.ndim(), 4);
    }
}
