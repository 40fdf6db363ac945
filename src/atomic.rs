use super::{Desc, GaugeOps, Metric, MetricKind, Sample};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A gauge that may be shared across threads.
///
/// The value is kept as the bit pattern of an `f64`. Adjustments are compare-and-swap loops so
/// that concurrent `inc`/`dec` calls never lose an update.
pub struct AtomicGauge {
    desc: Desc,
    bits: AtomicU64,
}

impl AtomicGauge {
    pub fn new(desc: Desc) -> AtomicGauge {
        AtomicGauge {
            desc,
            bits: AtomicU64::new(0.0f64.to_bits()),
        }
    }
}

impl GaugeOps for AtomicGauge {
    fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    fn store(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }

    fn add(&self, delta: f64) {
        // The closure never declines, so this always succeeds.
        let _ = self
            .bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |curr| {
                Some((f64::from_bits(curr) + delta).to_bits())
            });
    }
}

impl Metric for AtomicGauge {
    const KIND: MetricKind = MetricKind::Gauge;

    fn desc(&self) -> &Desc {
        &self.desc
    }

    fn samples<F: FnMut(Sample)>(&self, mut emit: F) {
        emit(Sample::new(self.get()));
    }
}

impl fmt::Debug for AtomicGauge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AtomicGauge")
            .field("name", &self.desc.name())
            .field("value", &self.get())
            .finish()
    }
}
