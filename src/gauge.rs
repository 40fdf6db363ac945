use super::timing;
use super::{Desc, InflightGuard, IntoF64, Metric, MetricKind, RuntimeGuard, Sample};
use std::cell::Cell;
use std::fmt;

/// Operations shared by every gauge.
///
/// Implementors provide storage (`get`, `store`, `add`); everything else is built on top, so
/// `Gauge` and `AtomicGauge` behave identically.
pub trait GaugeOps: Metric {
    fn get(&self) -> f64;

    /// Overwrites the value.
    fn store(&self, value: f64);

    /// Adjusts the value by `delta`.
    fn add(&self, delta: f64);

    fn set<V: IntoF64>(&self, value: V) {
        self.store(value.into_f64());
    }

    fn inc(&self) {
        self.add(1.0);
    }

    fn inc_by<V: IntoF64>(&self, value: V) {
        self.add(value.into_f64());
    }

    fn dec(&self) {
        self.add(-1.0);
    }

    fn dec_by<V: IntoF64>(&self, value: V) {
        self.add(-value.into_f64());
    }

    /// Sets the value to the current Unix time in (fractional) seconds.
    fn set_to_current_time(&self) {
        self.store(timing::unix_now());
    }

    /// Returns a guard that sets the value to the seconds elapsed when it is dropped.
    fn start_timer(&self) -> RuntimeGuard<&Self> {
        RuntimeGuard::new(self)
    }

    /// Increments now and returns a guard that decrements when it is dropped.
    fn track_inflight(&self) -> InflightGuard<&Self> {
        InflightGuard::new(self)
    }

    /// Runs `body` and sets the value to how long it took, in seconds.
    ///
    /// The value is updated exactly once however `body` exits, including by panic. Its
    /// result, `Err` or otherwise, is returned unchanged.
    fn measure_runtime<T, F>(&self, body: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _timer = self.start_timer();
        body()
    }

    /// Counts `body` as in flight while it runs.
    ///
    /// Increments by one before `body` and decrements by one however it exits.
    fn count_concurrent<T, F>(&self, body: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _inflight = self.track_inflight();
        body()
    }
}

/// A gauge for use on a single thread.
///
/// All operations take `&self`, so overlapping uses on one thread (nested calls, or futures
/// interleaved on one reactor) are counted correctly. The value lives in a `Cell`, which
/// makes `Gauge` `!Sync`; share an `AtomicGauge` across threads instead.
pub struct Gauge {
    desc: Desc,
    value: Cell<f64>,
}

impl Gauge {
    pub fn new(desc: Desc) -> Gauge {
        Gauge {
            desc,
            value: Cell::new(0.0),
        }
    }
}

impl GaugeOps for Gauge {
    fn get(&self) -> f64 {
        self.value.get()
    }

    fn store(&self, value: f64) {
        self.value.set(value);
    }

    fn add(&self, delta: f64) {
        self.value.set(self.value.get() + delta);
    }
}

impl Metric for Gauge {
    const KIND: MetricKind = MetricKind::Gauge;

    fn desc(&self) -> &Desc {
        &self.desc
    }

    fn samples<F: FnMut(Sample)>(&self, mut emit: F) {
        emit(Sample::new(self.get()));
    }
}

impl fmt::Debug for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Gauge")
            .field("name", &self.desc.name())
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn gauge(name: &str) -> Gauge {
        Gauge::new(Desc::new(name, "test gauge").unwrap())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(gauge("fresh").get(), 0.0);
    }

    #[test]
    fn set_accepts_any_number() {
        let g = gauge("set");
        g.set(42u32);
        assert_eq!(g.get(), 42.0);
        g.set(-7i64);
        assert_eq!(g.get(), -7.0);
        g.set(0.25f32);
        assert_eq!(g.get(), 0.25);
        g.set(std::f64::INFINITY);
        assert_eq!(g.get(), std::f64::INFINITY);
        g.set(std::f64::NAN);
        assert!(g.get().is_nan());
    }

    #[test]
    fn inc_and_dec_default_to_one() {
        let g = gauge("steps");
        g.inc();
        g.inc();
        g.dec();
        assert_eq!(g.get(), 1.0);
        g.dec();
        g.dec();
        assert_eq!(g.get(), -1.0);
    }

    #[test]
    fn body_temperature() {
        let g = gauge("body_temperature_fahrenheit");
        g.set(98.6);
        assert_eq!(g.get(), 98.6);
        g.inc_by(1.8);
        assert!(close(g.get(), 100.4));
        g.dec_by(0.6);
        assert!(close(g.get(), 99.8));
    }

    #[test]
    fn set_to_current_time() {
        let g = gauge("last_run_timestamp_seconds");
        g.set_to_current_time();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs_f64();
        assert!((g.get() - now).abs() < 1.0);
    }

    #[test]
    fn kind_is_constant() {
        assert_eq!(Gauge::KIND, MetricKind::Gauge);
        assert_eq!(<Gauge as Metric>::KIND.as_str(), "gauge");
    }

    #[test]
    fn emits_exactly_one_sample() {
        let g = gauge("one_sample");
        g.set(12.5);
        let mut seen = Vec::new();
        g.samples(|s| seen.push(s));
        assert_eq!(seen, vec![Sample::new(12.5)]);
        assert!(seen[0].labels().is_empty());
        assert_eq!(seen[0].suffix(), None);

        g.inc();
        seen.clear();
        g.samples(|s| seen.push(s));
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].value(), 13.5);
    }

    #[test]
    fn measures_runtime() {
        let g = gauge("work_seconds");
        let out = g.measure_runtime(|| {
            thread::sleep(Duration::from_millis(20));
            "done"
        });
        assert_eq!(out, "done");
        assert!(g.get() >= 0.02);
        assert!(g.get() < 5.0);
    }

    #[test]
    fn measures_runtime_of_failed_body() {
        let g = gauge("failed_work_seconds");
        g.set(-1);
        let out: Result<(), &str> = g.measure_runtime(|| {
            thread::sleep(Duration::from_millis(10));
            Err("boom")
        });
        assert_eq!(out, Err("boom"));
        assert!(g.get() >= 0.01);
    }

    #[test]
    fn measures_runtime_on_early_return() {
        fn parse(g: &Gauge, s: &str) -> Result<u32, std::num::ParseIntError> {
            g.measure_runtime(|| {
                let n: u32 = s.parse()?;
                Ok(n * 2)
            })
        }
        let g = gauge("parse_seconds");
        g.set(-1);
        assert!(parse(&g, "nope").is_err());
        assert!(g.get() >= 0.0);
        assert_eq!(parse(&g, "21"), Ok(42));
    }

    #[test]
    fn measures_runtime_of_panicking_body() {
        let g = gauge("panicked_seconds");
        g.set(-1);
        let res = panic::catch_unwind(AssertUnwindSafe(|| {
            g.measure_runtime(|| -> () { panic!("boom") })
        }));
        let err = res.unwrap_err();
        assert_eq!(err.downcast_ref::<&str>(), Some(&"boom"));
        assert!(g.get() >= 0.0);
    }

    #[test]
    fn counts_nested_work() {
        let g = gauge("in_flight");
        let inner = g.count_concurrent(|| {
            assert_eq!(g.get(), 1.0);
            g.count_concurrent(|| g.get())
        });
        assert_eq!(inner, 2.0);
        assert_eq!(g.get(), 0.0);
    }

    #[test]
    fn counts_from_a_baseline() {
        let g = gauge("in_flight_baseline");
        g.set(5);
        let held: Vec<_> = (0..3).map(|_| g.track_inflight()).collect();
        assert_eq!(g.get(), 8.0);
        drop(held);
        assert_eq!(g.get(), 5.0);
    }

    #[test]
    fn decrements_after_failure() {
        let g = gauge("in_flight_failures");
        let out: Result<(), String> = g.count_concurrent(|| Err("nope".to_owned()));
        assert_eq!(out, Err("nope".to_owned()));
        assert_eq!(g.get(), 0.0);

        let res = panic::catch_unwind(AssertUnwindSafe(|| {
            g.count_concurrent(|| -> () { panic!("boom") })
        }));
        assert!(res.is_err());
        assert_eq!(g.get(), 0.0);
    }

    #[test]
    fn debug_shows_name_and_value() {
        let g = gauge("debugged");
        g.set(2);
        assert_eq!(format!("{:?}", g), "Gauge { name: \"debugged\", value: 2.0 }");
    }
}
