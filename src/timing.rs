//! Step timing for verbose output.

use std::time::Instant;

/// A simple timer for measuring how long a step takes.
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    /// Start a new timer with the given step name.
    pub fn start(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Finish the timer and print the elapsed time.
    pub fn finish(self) {
        println!("{}", format_elapsed(&self.name, self.elapsed_secs()));
    }
}

fn format_elapsed(name: &str, secs: f64) -> String {
    if secs >= 60.0 {
        format!("  [{:.1}m] {}", secs / 60.0, name)
    } else {
        format!("  [{:.1}s] {}", secs, name)
    }
}
