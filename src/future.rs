use super::{GaugeOps, InflightGuard, RuntimeGuard};
use futures::{Async, Future, Poll};
use std::ops::Deref;

/// Gauge instrumentation for any `Future`.
pub trait GaugeFutureExt: Future + Sized {
    /// Sets `gauge` to how long this future took, in seconds.
    ///
    /// The clock starts on the first poll. The gauge is set once, when the future resolves
    /// (successfully or not) or when it is dropped before resolving.
    fn timed<H>(self, gauge: H) -> Timed<Self, H>
    where
        H: Deref,
        H::Target: GaugeOps,
    {
        Timed {
            inner: self,
            gauge: Some(gauge),
            guard: None,
        }
    }

    /// Counts this future in `gauge` from its first poll until it resolves or is dropped.
    fn in_flight<H>(self, gauge: H) -> InFlight<Self, H>
    where
        H: Deref,
        H::Target: GaugeOps,
    {
        InFlight {
            inner: self,
            gauge: Some(gauge),
            guard: None,
        }
    }
}

impl<F: Future> GaugeFutureExt for F {}

#[must_use = "futures do nothing unless polled"]
pub struct Timed<F, H>
where
    H: Deref,
    H::Target: GaugeOps,
{
    inner: F,
    gauge: Option<H>,
    guard: Option<RuntimeGuard<H>>,
}

impl<F, H> Future for Timed<F, H>
where
    F: Future,
    H: Deref,
    H::Target: GaugeOps,
{
    type Item = F::Item;
    type Error = F::Error;

    fn poll(&mut self) -> Poll<F::Item, F::Error> {
        if let Some(gauge) = self.gauge.take() {
            self.guard = Some(RuntimeGuard::new(gauge));
        }
        let polled = self.inner.poll();
        if !is_pending(&polled) {
            drop(self.guard.take());
        }
        polled
    }
}

#[must_use = "futures do nothing unless polled"]
pub struct InFlight<F, H>
where
    H: Deref,
    H::Target: GaugeOps,
{
    inner: F,
    gauge: Option<H>,
    guard: Option<InflightGuard<H>>,
}

impl<F, H> Future for InFlight<F, H>
where
    F: Future,
    H: Deref,
    H::Target: GaugeOps,
{
    type Item = F::Item;
    type Error = F::Error;

    fn poll(&mut self) -> Poll<F::Item, F::Error> {
        if let Some(gauge) = self.gauge.take() {
            self.guard = Some(InflightGuard::new(gauge));
        }
        let polled = self.inner.poll();
        if !is_pending(&polled) {
            drop(self.guard.take());
        }
        polled
    }
}

fn is_pending<T, E>(p: &Poll<T, E>) -> bool {
    match *p {
        Ok(Async::NotReady) => true,
        _ => false,
    }
}
