//! Fixed-tick numeric ramp used for the achievement counters.

use std::time::Duration;

/// One animation tick. All ramps step on this cadence regardless of their
/// configured duration.
pub const TICK: Duration = Duration::from_millis(50);

/// Ramps a displayed value from zero to a target over a fixed duration.
///
/// The duration is split into `ceil(duration / TICK)` equal increments; the
/// tick on which the running value reaches the target clamps to exactly the
/// target, so the final rendered value is never an approximation and the
/// ramp terminates regardless of floating-point drift.
#[derive(Debug, Clone)]
pub struct Ramp {
    target: f64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl Ramp {
    pub fn new(target: f64, duration: Duration) -> Self {
        let ticks = duration.as_millis().div_ceil(TICK.as_millis()).max(1);
        Self {
            target,
            increment: target / ticks as f64,
            current: 0.0,
            finished: false,
        }
    }

    /// Advance one tick.
    pub fn step(&mut self) {
        if self.finished {
            return;
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.finished = true;
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.current
    }

    /// Text for the current tick: the floor of the running value while the
    /// ramp is live, the exact target once it has finished, digit-grouped,
    /// with `suffix` appended either way.
    #[must_use]
    pub fn rendered(&self, suffix: &str) -> String {
        let shown = if self.finished {
            self.target
        } else {
            self.current.floor()
        };
        format!("{}{}", format_number(shown), suffix)
    }
}

/// Formats a non-negative number with comma digit grouping, preserving any
/// fractional part (`50000.0` -> `"50,000"`, `3.75` -> `"3.75"`).
#[must_use]
pub fn format_number(value: f64) -> String {
    let grouped = group_digits(value.trunc() as u64);
    match format!("{value}").split_once('.') {
        Some((_, frac)) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

fn group_digits(mut n: u64) -> String {
    let mut parts = Vec::new();
    loop {
        if n < 1000 {
            parts.push(n.to_string());
            break;
        }
        parts.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    parts.reverse();
    parts.join(",")
}
