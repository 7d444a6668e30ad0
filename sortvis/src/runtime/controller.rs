//! The Run Controller owns the authoritative sequence and at most one
//! running driver. Hosts call [`RunController::tick`] once per frame with
//! the current time; the driver advances until its next suspension.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::registry::DriverEntry;
use super::settings::Settings;
use crate::core::logging::{debug, info};
use crate::model::{Element, Sequence, ValueRange, dataset, is_sorted};
use crate::motion::{AnimationClock, SpeedFactor};
use crate::render::{Effects, Stage};
use crate::sorting::{Animator, DriverConfig, DriverFuture, RunStats};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunStatus {
    Running,
    Finished,
}

struct ActiveRun {
    generation: u64,
    future: DriverFuture,
}

pub struct RunController {
    driver: DriverEntry,
    count: usize,
    range: ValueRange,
    speed: Arc<SpeedFactor>,
    clock: AnimationClock,
    stage: Rc<Stage>,
    rng: Rc<RefCell<StdRng>>,
    sequence: Sequence,
    generation: u64,
    active: Option<ActiveRun>,
    result: Option<Sequence>,
    stats: Rc<Cell<RunStats>>,
}

impl RunController {
    /// Generates a fresh dataset from `settings` and starts `driver` on it
    pub fn new(
        driver: DriverEntry,
        settings: &Settings,
        start: Instant,
    ) -> Self {
        let mut controller = Self::idle(driver, settings, start);
        controller.regenerate();
        controller.restart();
        controller
    }

    /// Starts `driver` on a fixed set of values instead of random ones
    pub fn with_values(
        driver: DriverEntry,
        settings: &Settings,
        values: &[u32],
        start: Instant,
    ) -> Self {
        let mut controller = Self::idle(driver, settings, start);
        controller.load_values(values);
        controller
    }

    fn idle(driver: DriverEntry, settings: &Settings, start: Instant) -> Self {
        let speed = Arc::new(SpeedFactor::new(settings.effective_speed()));
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            driver,
            count: settings.count,
            range: settings.value_range(),
            clock: AnimationClock::new(speed.clone(), start),
            speed,
            stage: Rc::new(Stage::new(settings.bar_pitch)),
            rng: Rc::new(RefCell::new(rng)),
            sequence: Vec::new(),
            generation: 0,
            active: None,
            result: None,
            stats: Rc::new(Cell::new(RunStats::default())),
        }
    }

    /// Advances the running driver to its next suspension point, if the
    /// delay it is waiting on has elapsed by `now`.
    pub fn tick(&mut self, now: Instant) -> RunStatus {
        self.clock.set_now(now);

        let Some(run) = self.active.as_mut() else {
            return RunStatus::Finished;
        };

        let mut cx = Context::from_waker(Waker::noop());
        if let Poll::Ready(sorted) = run.future.as_mut().poll(&mut cx) {
            let stats = self.stats.get();
            info!(
                "{} finished run {}: {} comparisons, {} swaps, {} writes",
                self.driver.config.display_name,
                run.generation,
                stats.comparisons,
                stats.swaps,
                stats.writes
            );
            debug_assert!(is_sorted(&sorted));
            self.result = Some(sorted);
            self.active = None;
        }

        self.status()
    }

    pub fn status(&self) -> RunStatus {
        if self.active.is_some() {
            RunStatus::Running
        } else {
            RunStatus::Finished
        }
    }

    /// Takes effect at the driver's next suspension; never restarts
    pub fn set_speed(&self, factor: f32) {
        self.speed.set(factor);
        debug!("Speed set to {}", self.speed.get());
    }

    pub fn set_count(&mut self, count: usize) {
        if count == self.count {
            return;
        }
        info!("Bar count changed from {} to {}", self.count, count);
        self.count = count;
        self.reset();
    }

    /// Regenerates the dataset and restarts the current driver on it
    pub fn reset(&mut self) {
        self.regenerate();
        self.restart();
    }

    pub fn set_driver(&mut self, driver: DriverEntry) {
        info!("Switching to {}", driver.config.display_name);
        self.driver = driver;
        self.reset();
    }

    pub fn load_values(&mut self, values: &[u32]) {
        self.count = values.len();
        self.sequence = dataset::from_values(values);
        self.restart();
    }

    fn regenerate(&mut self) {
        let mut rng = self.rng.borrow_mut();
        self.sequence = dataset::generate(self.count, self.range, &mut *rng);
        debug!(
            "Generated {} values in {}..={}",
            self.count, self.range.min, self.range.max
        );
    }

    fn restart(&mut self) {
        if let Some(stale) = self.active.take() {
            debug!("Dropping run {} before completion", stale.generation);
        }

        self.generation += 1;
        self.stage.clear_lanes();
        self.result = None;
        self.stats = Rc::new(Cell::new(RunStats::default()));

        let animator = Animator::new(
            self.clock.clone(),
            Effects::new(self.stage.clone()),
            self.rng.clone(),
            self.stats.clone(),
        );

        info!(
            "Starting run {}: {} on {} elements",
            self.generation,
            self.driver.config.display_name,
            self.sequence.len()
        );

        self.active = Some(ActiveRun {
            generation: self.generation,
            future: (self.driver.run)(animator, self.sequence.clone()),
        });
    }

    pub fn driver(&self) -> &'static DriverConfig {
        self.driver.config
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn speed(&self) -> f32 {
        self.speed.get()
    }

    pub fn stage(&self) -> &Rc<Stage> {
        &self.stage
    }

    /// The dataset the current run started from
    pub fn sequence(&self) -> &[Element] {
        &self.sequence
    }

    /// The driver's sorted working copy, once it has finished
    pub fn result(&self) -> Option<&[Element]> {
        self.result.as_deref()
    }

    /// Bumped on every restart; shells remount their bars when it changes
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stats(&self) -> RunStats {
        self.stats.get()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::model::values;
    use crate::render::Lane;
    use crate::sorting::default_registry;

    fn settings() -> Settings {
        Settings {
            count: 12,
            seed: Some(42),
            ..Default::default()
        }
    }

    fn controller(name: &str, start: Instant) -> RunController {
        let registry = default_registry().unwrap();
        RunController::new(registry.get(name).unwrap(), &settings(), start)
    }

    fn run_to_end(controller: &mut RunController, mut now: Instant) -> usize {
        let mut ticks = 0;
        while controller.tick(now) == RunStatus::Running {
            now += Duration::from_secs(3600);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn generates_requested_count() {
        let start = Instant::now();
        let controller = controller("insertion", start);

        assert_eq!(controller.sequence().len(), 12);
        assert_eq!(controller.generation(), 1);
        assert_eq!(controller.status(), RunStatus::Running);
        assert!(controller.result().is_none());
    }

    #[test]
    fn runs_to_a_sorted_result() {
        let start = Instant::now();
        let mut controller = controller("quick", start);
        let mut expected = values(controller.sequence());
        expected.sort();

        assert!(run_to_end(&mut controller, start) > 0);

        let result = controller.result().unwrap();
        assert_eq!(values(result), expected);
        assert_eq!(controller.tick(start), RunStatus::Finished);
    }

    #[test]
    fn does_not_advance_before_the_deadline() {
        let start = Instant::now();
        let mut controller = controller("bubble", start);

        controller.tick(start);
        let after_first = controller.stats();
        controller.tick(start);
        controller.tick(start + Duration::from_micros(1));

        assert_eq!(controller.stats(), after_first);
    }

    #[test]
    fn set_count_restarts_only_on_change() {
        let start = Instant::now();
        let mut controller = controller("insertion", start);

        controller.set_count(12);
        assert_eq!(controller.generation(), 1);

        controller.set_count(5);
        assert_eq!(controller.generation(), 2);
        assert_eq!(controller.sequence().len(), 5);
    }

    #[test]
    fn set_speed_keeps_the_run() {
        let start = Instant::now();
        let mut controller = controller("selection", start);
        controller.tick(start);

        controller.set_speed(3.0);

        assert_eq!(controller.speed(), 3.0);
        assert_eq!(controller.generation(), 1);
        assert_eq!(controller.status(), RunStatus::Running);
    }

    #[test]
    fn reset_abandons_the_running_driver() {
        let start = Instant::now();
        let mut controller = controller("merge", start);
        for step in 0..5 {
            controller.tick(start + Duration::from_secs(step * 3600));
        }
        assert!(controller.stats().comparisons > 0);

        controller.reset();

        assert_eq!(controller.generation(), 2);
        assert_eq!(controller.stats(), RunStats::default());
        let stage = controller.stage();
        assert!(stage.lane_contents(Lane::Left).is_empty());
    }

    #[test]
    fn with_values_uses_given_values() {
        let registry = default_registry().unwrap();
        let start = Instant::now();
        let mut controller = RunController::with_values(
            registry.get("merge").unwrap(),
            &settings(),
            &[8, 4, 3, 9, 0, 1],
            start,
        );

        assert_eq!(controller.count(), 6);
        run_to_end(&mut controller, start);
        assert_eq!(
            values(controller.result().unwrap()),
            vec![0, 1, 3, 4, 8, 9]
        );
    }
}
