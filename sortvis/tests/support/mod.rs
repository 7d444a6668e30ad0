use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use sortvis::prelude::*;

/// Far beyond any animation delay, so each tick resumes the driver once
pub const TICK: Duration = Duration::from_secs(3600);

const MAX_TICKS: usize = 1_000_000;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Paint(VisualState),
    Translate(f32),
    Resize(u32),
    Annotate(Option<Marker>),
}

#[derive(Clone, Debug)]
pub struct Record {
    pub lane: Lane,
    /// Lane revision the handle was mounted under (0 for the main lane)
    pub revision: u64,
    /// Index within the lane at mount time
    pub slot: usize,
    pub id: ElementId,
    /// Value at mount time
    pub value: u32,
    pub event: Event,
}

type Log = Rc<RefCell<Vec<Record>>>;

struct RecordingHandle {
    lane: Lane,
    revision: u64,
    slot: usize,
    id: ElementId,
    value: u32,
    log: Log,
}

impl RecordingHandle {
    fn push(&self, event: Event) {
        self.log.borrow_mut().push(Record {
            lane: self.lane,
            revision: self.revision,
            slot: self.slot,
            id: self.id,
            value: self.value,
            event,
        });
    }
}

impl BarHandle for RecordingHandle {
    fn paint(&self, state: VisualState) {
        self.push(Event::Paint(state));
    }

    fn translate(&self, offset: f32) {
        self.push(Event::Translate(offset));
    }

    fn resize(&self, value: u32) {
        self.push(Event::Resize(value));
    }

    fn annotate(&self, marker: Option<Marker>) {
        self.push(Event::Annotate(marker));
    }
}

/// Drives a [`RunController`] on virtual time with recording handles
/// mounted for every lane.
pub struct Harness {
    pub controller: RunController,
    pub initial: Sequence,
    log: Log,
    generation: u64,
    lane_revision: u64,
    now: Instant,
}

impl Harness {
    pub fn new(driver: &str, values: &[u32]) -> Self {
        Self::with_settings(driver, values, &settings(7))
    }

    pub fn with_settings(
        driver: &str,
        values: &[u32],
        settings: &Settings,
    ) -> Self {
        let registry = default_registry().expect("default registry");
        let entry = registry.lookup(driver).expect("known driver");
        let now = Instant::now();
        let controller =
            RunController::with_values(entry, settings, values, now);

        let mut harness = Self {
            initial: controller.sequence().to_vec(),
            controller,
            log: Rc::new(RefCell::new(Vec::new())),
            generation: 0,
            lane_revision: 0,
            now,
        };
        harness.mount();
        harness
    }

    pub fn step(&mut self) -> RunStatus {
        self.mount();
        let status = self.controller.tick(self.now);
        self.now += TICK;
        status
    }

    /// Runs to completion and returns the sorted values
    pub fn run(&mut self) -> Vec<u32> {
        for _ in 0..MAX_TICKS {
            if self.step() == RunStatus::Finished {
                self.mount();
                let result = self.controller.result().expect("result");
                return values(result);
            }
        }
        panic!("driver did not finish within {} ticks", MAX_TICKS);
    }

    pub fn records(&self) -> Vec<Record> {
        self.log.borrow().clone()
    }

    pub fn main_records(&self) -> Vec<Record> {
        self.records()
            .into_iter()
            .filter(|r| r.lane == Lane::Main)
            .collect()
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.initial = self.controller.sequence().to_vec();
        self.log.borrow_mut().clear();
        self.mount();
    }

    fn mount(&mut self) {
        let stage = self.controller.stage().clone();

        if self.generation != self.controller.generation() {
            self.generation = self.controller.generation();
            let elements = self.controller.sequence().to_vec();
            self.mount_lane(&stage, Lane::Main, 0, &elements);
        }

        if self.lane_revision != stage.lane_revision() {
            self.lane_revision = stage.lane_revision();
            let revision = self.lane_revision;
            for lane in [Lane::Left, Lane::Right] {
                let elements = stage.lane_contents(lane);
                self.mount_lane(&stage, lane, revision, &elements);
            }
        }
    }

    fn mount_lane(
        &self,
        stage: &Stage,
        lane: Lane,
        revision: u64,
        elements: &[Element],
    ) {
        let registry = stage.registry(lane);
        registry.clear();
        for (slot, element) in elements.iter().enumerate() {
            let handle = RecordingHandle {
                lane,
                revision,
                slot,
                id: element.id,
                value: element.value,
                log: self.log.clone(),
            };
            registry.register(element.id, Rc::new(handle));
        }
    }
}

pub fn settings(seed: u64) -> Settings {
    Settings {
        seed: Some(seed),
        ..Default::default()
    }
}

pub fn sorted(values: &[u32]) -> Vec<u32> {
    let mut values = values.to_vec();
    values.sort();
    values
}

/// Number of `Finished` paints each main-lane element received
pub fn finished_counts(harness: &Harness) -> HashMap<ElementId, usize> {
    let mut counts = HashMap::default();
    for record in harness.main_records() {
        if record.event == Event::Paint(VisualState::Finished) {
            *counts.entry(record.id).or_insert(0) += 1;
        }
    }
    counts
}

pub fn all_drivers() -> Vec<&'static str> {
    vec!["insertion", "selection", "bubble", "merge", "quick"]
}
