use ndarray::*;
use uuid::Uuid;

/// Detection represents a single observed measurement at one time step.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Unique detection identifier
    id: Uuid,
    /// Measurement vector in measurement space.
    measurement: Array1<f64>,
    /// Optional timestamp (seconds) of the measurement.
    timestamp: Option<f64>,
    /// Optional class identifier.
    class_id: Option<usize>,
}

impl Detection {
    /// Returns a new Detection
    ///
    /// # Parameters
    ///
    /// * `id`: An optional identifier. A random v4 uuid is assigned if `None`.
    /// * `measurement`: The measurement vector.
    pub fn new(id: Option<Uuid>, measurement: Vec<f64>) -> Detection {
        Detection {
            id: id.unwrap_or_else(Uuid::new_v4),
            measurement: Array1::from_vec(measurement),
            timestamp: None,
            class_id: None,
        }
    }

    /// Set timestamp
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set class_id
    pub fn with_class_id(mut self, class_id: usize) -> Self {
        self.class_id = Some(class_id);
        self
    }

    /// Returns the unique id of the detection
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Returns the measurement vector of the detection
    pub fn measurement(&self) -> &Array1<f64> {
        &self.measurement
    }

    /// Returns the timestamp of the detection
    pub fn timestamp(&self) -> Option<f64> {
        self.timestamp
    }

    /// Returns the class identifier of the detection
    pub fn class_id(&self) -> Option<usize> {
        self.class_id
    }
}
