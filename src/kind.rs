use super::{Desc, Sample};
use std::fmt;

/// Distinguishes metric types so that a registry or encoder can dispatch without downcasting.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MetricKind {
    Counter,
    Gauge,
    Histogram,
    Summary,
}

impl MetricKind {
    /// The type name used by the text exposition format.
    pub fn as_str(&self) -> &'static str {
        match *self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
            MetricKind::Summary => "summary",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named source of samples.
pub trait Metric {
    /// The kind of every instance of this type.
    const KIND: MetricKind;

    fn desc(&self) -> &Desc;

    /// Hands each current sample to `emit`.
    ///
    /// Values are read when this is called, so an encoder sees the state at the time it
    /// renders rather than at registration.
    fn samples<F: FnMut(Sample)>(&self, emit: F);
}
