//! The Animation Clock: cooperative suspension points whose length is
//! derived from a live, externally mutable speed factor.
//!
//! Drivers never sleep. [`AnimationClock::suspend`] returns a [`Delay`]
//! future that stays pending until the host advances the shared "now" past
//! its deadline and polls the run again. The speed factor is read when the
//! suspension is created, so a speed change affects every remaining step of
//! a run without restarting it.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use crate::core::util::AtomicF32;

/// Base units of one standard animation step. At a speed factor of 1.0 a
/// step lasts this many seconds.
pub const STEP_UNITS: f32 = 10.0;

/// Lower bound for the speed factor; zero would make every delay infinite.
pub const MIN_SPEED: f32 = 0.01;

const FAR_FUTURE: Duration = Duration::from_secs(86_400);

/// Single-writer, many-reader speed cell shared between the shell and the
/// running driver.
#[derive(Debug)]
pub struct SpeedFactor {
    inner: AtomicF32,
}

impl SpeedFactor {
    pub fn new(factor: f32) -> Self {
        Self {
            inner: AtomicF32::new(Self::sanitize(factor)),
        }
    }

    pub fn get(&self) -> f32 {
        self.inner.load(Ordering::Acquire)
    }

    pub fn set(&self, factor: f32) {
        self.inner.store(Self::sanitize(factor), Ordering::Release);
    }

    fn sanitize(factor: f32) -> f32 {
        if factor.is_finite() {
            factor.max(MIN_SPEED)
        } else if factor == f32::INFINITY {
            f32::MAX
        } else {
            MIN_SPEED
        }
    }
}

impl Default for SpeedFactor {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[derive(Clone, Debug)]
pub struct AnimationClock {
    speed: Arc<SpeedFactor>,
    now: Rc<Cell<Instant>>,
}

impl AnimationClock {
    pub fn new(speed: Arc<SpeedFactor>, start: Instant) -> Self {
        Self {
            speed,
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn now(&self) -> Instant {
        self.now.get()
    }

    /// Moves host time forward. Time never runs backwards.
    pub fn set_now(&self, now: Instant) {
        if now > self.now.get() {
            self.now.set(now);
        }
    }

    pub fn delay_for(&self, base_units: f32) -> Duration {
        let seconds = base_units.max(0.0) / self.speed.get();
        Duration::try_from_secs_f32(seconds).unwrap_or(Duration::MAX)
    }

    pub fn suspend(&self, base_units: f32) -> Delay {
        let now = self.now.get();
        let deadline = now
            .checked_add(self.delay_for(base_units))
            .unwrap_or_else(|| now + FAR_FUTURE);
        Delay {
            deadline,
            now: Rc::clone(&self.now),
            yielded: false,
        }
    }
}

/// A pending suspension.
///
/// Always yields back to the host at least once, so effects issued before
/// the suspension are visible before the run continues. It does not register
/// a waker: the host re-polls the run on every tick.
#[must_use = "a suspension does nothing unless awaited"]
#[derive(Debug)]
pub struct Delay {
    deadline: Instant,
    now: Rc<Cell<Instant>>,
    yielded: bool,
}

impl Delay {
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

impl Future for Delay {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        if !self.yielded {
            self.yielded = true;
            return Poll::Pending;
        }

        if self.now.get() >= self.deadline {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}
