use std::fmt;
use std::time::{Duration, Instant};

/// Result of a timed run.
#[derive(Clone, Debug)]
pub struct Timing {
    pub label: String,
    pub iterations: u32,
    pub elapsed: Duration,
}

impl Timing {
    /// Mean wall-clock time per iteration.
    pub fn per_iteration(&self) -> Duration {
        if self.iterations == 0 {
            Duration::ZERO
        } else {
            self.elapsed / self.iterations
        }
    }

    /// Print the one-line summary to stdout.
    pub fn report(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} took {:.2}s over {} runs",
            self.label,
            self.elapsed.as_secs_f64(),
            self.iterations
        )
    }
}

/// Run `f` `iterations` times, measuring total elapsed wall-clock time.
pub fn run<F: FnMut()>(label: &str, iterations: u32, mut f: F) -> Timing {
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    Timing {
        label: label.to_string(),
        iterations,
        elapsed: start.elapsed(),
    }
}
