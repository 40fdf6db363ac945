//! A `Future`-aware gauge metric.
//!
//! A gauge holds one floating-point value that may go up and down: a temperature, a queue
//! depth, the number of requests currently being served, the time the last job finished, how
//! long the last job ran. `needle` provides the gauge itself; registering metrics under names
//! and rendering them for a monitoring backend are left to the surrounding library, which reads
//! each metric through `Metric::samples`.
//!
//! ```
//! extern crate futures;
//! extern crate needle;
//!
//! use futures::{Future, future};
//! use needle::{Desc, Gauge, GaugeFutureExt, GaugeOps, Metric};
//! use std::rc::Rc;
//!
//! fn main() {
//!     let in_flight = Rc::new(Gauge::new(Desc::new("jobs_in_flight", "Jobs running.").unwrap()));
//!     let last_run = Gauge::new(Desc::new("job_seconds", "Duration of the last job.").unwrap());
//!
//!     let out = last_run.measure_runtime(|| in_flight.count_concurrent(|| 6 * 7));
//!     assert_eq!(out, 42);
//!     assert_eq!(in_flight.get(), 0.0);
//!
//!     let job = future::lazy(|| Ok::<_, ()>("done")).in_flight(in_flight.clone());
//!     assert_eq!(job.wait(), Ok("done"));
//!
//!     last_run.samples(|s| assert!(s.value() >= 0.0));
//! }
//! ```
//!
//! ## Threads
//!
//! `Gauge` performs no synchronization and is `!Sync`; it suits a single thread or a single
//! reactor, where overlapping futures are still counted correctly. `AtomicGauge` has the same
//! operations and may be shared between threads.

extern crate chrono;
extern crate futures;
#[macro_use]
extern crate log;
extern crate thiserror;

mod atomic;
mod desc;
mod error;
mod future;
mod gauge;
mod guard;
mod kind;
mod sample;
mod timing;
mod value;

pub use atomic::AtomicGauge;
pub use desc::Desc;
pub use error::DescError;
pub use future::{GaugeFutureExt, InFlight, Timed};
pub use gauge::{Gauge, GaugeOps};
pub use guard::{InflightGuard, RuntimeGuard};
pub use kind::{Metric, MetricKind};
pub use sample::{Labels, Sample};
pub use timing::{unix_now, Timing};
pub use value::IntoF64;
