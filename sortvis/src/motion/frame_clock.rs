use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FrameTick {
    pub should_render: bool,
    pub frames_advanced: u32,
}

/// Paces a shell's redraw loop. Each rendered frame is also the moment the
/// shell ticks its run controller.
#[derive(Debug)]
pub struct FrameClock {
    fps: f32,
    frame_count: u64,
    last_tick: Instant,
    accumulator: Duration,
}

impl FrameClock {
    pub fn new(fps: f32, start: Instant) -> Self {
        Self {
            fps: fps.max(1.0),
            frame_count: 0,
            last_tick: start,
            accumulator: Duration::ZERO,
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.fps)
    }

    pub fn next_deadline(&self) -> Instant {
        let remaining = self
            .frame_duration()
            .checked_sub(self.accumulator)
            .unwrap_or_default();
        self.last_tick + remaining
    }

    pub fn tick(&mut self, now: Instant) -> FrameTick {
        self.accumulator += now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let frame_duration = self.frame_duration();
        let mut advanced = 0u32;
        while self.accumulator >= frame_duration {
            self.accumulator -= frame_duration;
            advanced += 1;
        }

        // Frames we were too slow to draw are dropped, not replayed.
        self.frame_count += u64::from(advanced);
        FrameTick {
            should_render: advanced > 0,
            frames_advanced: advanced,
        }
    }
}
