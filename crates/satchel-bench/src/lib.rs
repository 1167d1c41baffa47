//! Wall-clock micro-benchmark timer.
//!
//! Runs a closure N times and reports total elapsed time. This is a
//! stopwatch, not a statistics engine; reach for criterion when warmup,
//! outlier rejection, or comparison matter.
//!
//! # Example
//!
//! ```
//! let timing = satchel_bench::run("noop", 10, || {});
//! assert_eq!(timing.iterations, 10);
//! ```

pub use timer::{Timing, run};

mod timer;
