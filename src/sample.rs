use std::collections::BTreeMap;

/// Sample labels, ordered so that rendering is deterministic.
pub type Labels = BTreeMap<String, String>;

/// One observation emitted by a metric for an exposition encoder.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    suffix: Option<&'static str>,
    labels: Labels,
    value: f64,
}

impl Sample {
    pub fn new(value: f64) -> Sample {
        Sample {
            suffix: None,
            labels: Labels::default(),
            value,
        }
    }

    /// Appends a name suffix (e.g. `_sum`) that the encoder joins to the metric name.
    pub fn with_suffix(mut self, suffix: &'static str) -> Sample {
        self.suffix = Some(suffix);
        self
    }

    pub fn labeled(mut self, k: String, v: String) -> Sample {
        self.labels.insert(k, v);
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn suffix(&self) -> Option<&'static str> {
        self.suffix
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}
