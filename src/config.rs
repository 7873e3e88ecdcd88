use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Slide sequence and auto-advance pacing.
    pub slideshow: SlideshowOptions,
    /// Counters armed for one-shot visibility triggering.
    pub counters: Vec<CounterSpec>,
    /// Scripted interaction session replayed by the binary.
    pub session: Vec<SessionAction>,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self, Error> {
        if self.slideshow.advance_interval.is_zero() {
            return Err(Error::BadConfig(
                "slideshow.advance-interval must be greater than zero".into(),
            ));
        }
        let mut seen = HashSet::new();
        for counter in &self.counters {
            counter.validate()?;
            if !seen.insert(counter.id.as_str()) {
                return Err(Error::BadConfig(format!(
                    "duplicate counter id `{}`",
                    counter.id
                )));
            }
        }
        Ok(self)
    }

    /// Apply a command-line override of the advance interval, re-checking
    /// the invariant `validated` enforces for the configured value.
    pub fn with_advance_interval(mut self, interval: Option<Duration>) -> Result<Self, Error> {
        if let Some(interval) = interval {
            if interval.is_zero() {
                return Err(Error::BadConfig(
                    "advance interval override must be greater than zero".into(),
                ));
            }
            self.slideshow.advance_interval = interval;
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SlideshowOptions {
    /// Slide labels in display order. An empty list leaves the slideshow inert.
    pub slides: Vec<String>,
    /// Delay between auto-advances; also the delay restored after manual
    /// navigation and after pointer-leave.
    #[serde(with = "humantime_serde")]
    pub advance_interval: Duration,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            advance_interval: Self::default_advance_interval(),
        }
    }
}

impl SlideshowOptions {
    const fn default_advance_interval() -> Duration {
        Duration::from_secs(5)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CounterSpec {
    /// Identifier of the display element this counter renders into.
    pub id: String,
    /// Value the ramp finishes on.
    pub target: f64,
    /// Total ramp duration.
    #[serde(with = "humantime_serde", default = "CounterSpec::default_duration")]
    pub duration: Duration,
    /// Appended verbatim to every rendered frame ("+", "%", ...).
    #[serde(default)]
    pub suffix: String,
    /// Visible fraction of the element required to trigger the ramp.
    #[serde(default = "CounterSpec::default_threshold")]
    pub threshold: f32,
}

impl CounterSpec {
    const fn default_duration() -> Duration {
        Duration::from_secs(2)
    }

    const fn default_threshold() -> f32 {
        0.5
    }

    fn validate(&self) -> Result<(), Error> {
        if self.duration.is_zero() {
            return Err(Error::BadConfig(format!(
                "counter `{}`: duration must be greater than zero",
                self.id
            )));
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(Error::BadConfig(format!(
                "counter `{}`: threshold must be within (0, 1]",
                self.id
            )));
        }
        if !self.target.is_finite() || self.target < 0.0 {
            return Err(Error::BadConfig(format!(
                "counter `{}`: target must be a non-negative number",
                self.id
            )));
        }
        Ok(())
    }
}

/// One scripted user action, dispatched `at` after session start.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SessionAction {
    #[serde(with = "humantime_serde")]
    pub at: Duration,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Action {
    Next,
    Previous,
    GoTo {
        index: usize,
    },
    PointerEnter,
    PointerLeave,
    Reveal {
        id: String,
        #[serde(default = "Action::default_fraction")]
        fraction: f32,
    },
}

impl Action {
    const fn default_fraction() -> f32 {
        1.0
    }
}
