/// Default number of simulation ticks allowed per frame.
pub const DEFAULT_MAX_STEPS: u32 = 10;

/// Fraction of a tick forgiven when converting accumulated time to ticks.
const STEP_EPSILON: f32 = 1e-4;

/// Fixed-rate tick clock.
/// Turns variable frame deltas into a whole number of simulation ticks.
pub struct TickClock {
    /// Wall time per tick, in seconds.
    dt: f32,
    /// Frame time not yet spent on a tick.
    accumulator: f32,
    /// Upper bound on ticks produced by a single frame.
    max_steps: u32,
    paused: bool,
}

impl TickClock {
    pub fn new(dt: f32) -> Self {
        Self::with_max_steps(dt, DEFAULT_MAX_STEPS)
    }

    /// Clock that never yields more than `max_steps` ticks per frame.
    /// A zero `max_steps` is raised to one.
    pub fn with_max_steps(dt: f32, max_steps: u32) -> Self {
        let dt = if dt > 0.0 && dt.is_finite() {
            dt
        } else {
            log::warn!("invalid tick length {dt}, falling back to 1/60 s");
            1.0 / 60.0
        };
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
            paused: false,
        }
    }

    /// Add frame time to the accumulator. Returns the number of ticks to run.
    ///
    /// A paused clock swallows the frame time and returns zero. Negative or
    /// non-finite frame deltas are ignored.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if self.paused || !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        // Ratio rounding must not cost a tick at the cap
        let steps = ((self.accumulator / self.dt + STEP_EPSILON) as u32).min(self.max_steps);
        if steps == self.max_steps {
            // Drop backlog beyond the per-frame cap
            self.accumulator = 0.0;
        } else {
            self.accumulator = (self.accumulator - steps as f32 * self.dt).max(0.0);
        }
        steps
    }

    /// Frame time not yet spent on a tick, in seconds.
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pausing also discards any partially accumulated tick.
    pub fn set_paused(&mut self, paused: bool) {
        if paused && !self.paused {
            self.accumulator = 0.0;
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    /// Forget any accumulated frame time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}
