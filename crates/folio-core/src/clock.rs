use instant::Instant;
use std::time::Duration;

/// Timing values handed to the animation step for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the first tick.
    pub elapsed: f32,
    /// Seconds since the previous tick (0 on the first one).
    pub delta: f32,
    /// Number of ticks so far, including this one.
    pub frame: u64,
}

/// Monotonic clock advanced exactly once per frame.
///
/// Elapsed time is accumulated in `f64` and handed out as `f32`; the large
/// gap produced by a backgrounded tab is not clamped.
#[derive(Debug, Default)]
pub struct Clock {
    last: Option<Instant>,
    elapsed: f64,
    last_delta: f64,
    frames: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = match self.last {
            Some(prev) if now > prev => now - prev,
            _ => Duration::ZERO,
        };
        self.last = Some(now);
        self.advance(delta)
    }

    /// Advance by an explicit delta; used by hosts that own their own timing.
    pub fn advance(&mut self, delta: Duration) -> FrameTime {
        let dt = delta.as_secs_f64();
        self.elapsed += dt;
        self.last_delta = dt;
        self.frames += 1;
        self.now()
    }

    pub fn now(&self) -> FrameTime {
        FrameTime {
            elapsed: self.elapsed as f32,
            delta: self.last_delta as f32,
            frame: self.frames,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn last_delta(&self) -> f32 {
        self.last_delta as f32
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
