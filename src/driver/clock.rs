use web_time::Instant;

/// A source of elapsed time, sampled once per frame.
pub trait FrameClock {
    /// Seconds since the clock started. Never decreases.
    ///
    /// `f64` keeps sub-frame resolution however long the loop has been running.
    fn elapsed(&mut self) -> f64;
}

/// Wall-clock time, starting at the first sample.
///
/// Uses `web_time`, so it behaves the same in the browser as on native.
#[derive(Clone, Debug, Default)]
pub struct WallClock {
    start: Option<Instant>,
}

impl WallClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for WallClock {
    fn elapsed(&mut self) -> f64 {
        self.start.get_or_insert_with(Instant::now).elapsed().as_secs_f64()
    }
}

/// A deterministic clock advancing by a fixed step at every sample.
///
/// The first sample returns the start time.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStepClock {
    start: f64,
    step: f64,
    samples: u64,
}

impl FixedStepClock {
    /// A clock starting at zero.
    pub fn new(step: f64) -> Self {
        Self::starting_at(0.0, step)
    }

    pub fn starting_at(start: f64, step: f64) -> Self {
        FixedStepClock {
            start,
            step: step.max(0.0),
            samples: 0,
        }
    }
}

impl FrameClock for FixedStepClock {
    fn elapsed(&mut self) -> f64 {
        let t = self.start + self.samples as f64 * self.step;
        self.samples += 1;
        t
    }
}
