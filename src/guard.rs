//! Scope guards that update a gauge when they are dropped.
//!
//! Dropping happens on every way out of a scope: normal return, `?`, panic unwinding, or a
//! future being dropped before it completes. Each guard updates its gauge exactly once.
//!
//! Guards are generic over the handle they hold, so `&Gauge`, `Rc<Gauge>` and
//! `Arc<AtomicGauge>` all work.

use super::timing::Timing;
use super::{GaugeOps, Metric};
use std::ops::Deref;
use std::thread;
use std::time::{Duration, Instant};

/// Sets its gauge to the seconds elapsed since the guard was created.
#[must_use = "the gauge is set when the guard is dropped"]
pub struct RuntimeGuard<H>
where
    H: Deref,
    H::Target: GaugeOps,
{
    gauge: H,
    start: Instant,
}

impl<H> RuntimeGuard<H>
where
    H: Deref,
    H::Target: GaugeOps,
{
    pub fn new(gauge: H) -> RuntimeGuard<H> {
        RuntimeGuard {
            gauge,
            start: Instant::now(),
        }
    }

    /// Time since the guard was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<H> Drop for RuntimeGuard<H>
where
    H: Deref,
    H::Target: GaugeOps,
{
    fn drop(&mut self) {
        let secs = self.start.elapsed_secs();
        self.gauge.store(secs);
        if thread::panicking() {
            debug!("{}: recorded {}s while unwinding", self.gauge.desc(), secs);
        } else {
            trace!("{}: recorded {}s", self.gauge.desc(), secs);
        }
    }
}

/// Holds one unit of its gauge for as long as it lives.
#[must_use = "the gauge is decremented when the guard is dropped"]
pub struct InflightGuard<H>
where
    H: Deref,
    H::Target: GaugeOps,
{
    gauge: H,
}

impl<H> InflightGuard<H>
where
    H: Deref,
    H::Target: GaugeOps,
{
    /// Increments `gauge` by one.
    pub fn new(gauge: H) -> InflightGuard<H> {
        gauge.inc();
        InflightGuard { gauge }
    }
}

impl<H> Drop for InflightGuard<H>
where
    H: Deref,
    H::Target: GaugeOps,
{
    fn drop(&mut self) {
        self.gauge.dec();
        if thread::panicking() {
            debug!("{}: released while unwinding", self.gauge.desc());
        } else {
            trace!("{}: released, {} in flight", self.gauge.desc(), self.gauge.get());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{AtomicGauge, Desc, Gauge};
    use std::rc::Rc;
    use std::sync::Arc;

    fn desc(name: &str) -> Desc {
        Desc::new(name, "guarded").unwrap()
    }

    #[test]
    fn runtime_guard_sets_on_drop() {
        let g = Gauge::new(desc("guarded_seconds"));
        g.set(-1);
        let timer = RuntimeGuard::new(&g);
        thread::sleep(Duration::from_millis(10));
        assert_eq!(g.get(), -1.0);
        assert!(timer.elapsed() >= Duration::from_millis(10));
        drop(timer);
        assert!(g.get() >= 0.01);
    }

    #[test]
    fn guards_accept_owned_handles() {
        let local = Rc::new(Gauge::new(desc("rc_in_flight")));
        let guard = InflightGuard::new(local.clone());
        assert_eq!(local.get(), 1.0);
        drop(guard);
        assert_eq!(local.get(), 0.0);

        let shared = Arc::new(AtomicGauge::new(desc("arc_seconds")));
        let remote = shared.clone();
        thread::spawn(move || {
            let _timer = RuntimeGuard::new(remote);
            thread::sleep(Duration::from_millis(5));
        })
        .join()
        .unwrap();
        assert!(shared.get() >= 0.005);
    }
}
