use std::cell::RefCell;
use std::rc::Rc;

use super::effects::{Lane, Stage};
use super::registry::BarView;
use crate::model::Element;
use crate::runtime::controller::RunController;

/// A handle a shell mounted for one element
pub struct MountedBar {
    pub element: Element,
    pub view: Rc<RefCell<BarView>>,
}

impl MountedBar {
    /// Display slot: mount position plus whatever the bar has been moved by
    pub fn slot(&self, pitch: f32) -> f32 {
        self.element.position as f32 + self.view.borrow().offset / pitch
    }
}

/// The in-memory scene shells draw from. Keeps one [`BarView`] per element
/// of every lane registered with the controller's stage, remounting when a
/// new run starts or merge sort publishes new lanes.
#[derive(Default)]
pub struct Board {
    main: Vec<MountedBar>,
    left: Vec<MountedBar>,
    right: Vec<MountedBar>,
    generation: Option<u64>,
    lane_revision: Option<u64>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call before every tick. Returns true when anything was remounted.
    pub fn sync(&mut self, controller: &RunController) -> bool {
        let stage = controller.stage();
        let mut remounted = false;

        if self.generation != Some(controller.generation()) {
            mount(stage, Lane::Main, &mut self.main, controller.sequence());
            self.generation = Some(controller.generation());
            remounted = true;
        }

        if self.lane_revision != Some(stage.lane_revision()) {
            let left = stage.lane_contents(Lane::Left);
            let right = stage.lane_contents(Lane::Right);
            mount(stage, Lane::Left, &mut self.left, &left);
            mount(stage, Lane::Right, &mut self.right, &right);
            self.lane_revision = Some(stage.lane_revision());
            remounted = true;
        }

        remounted
    }

    pub fn mounted(&self, lane: Lane) -> &[MountedBar] {
        match lane {
            Lane::Main => &self.main,
            Lane::Left => &self.left,
            Lane::Right => &self.right,
        }
    }

    /// Main-lane bars showing a terminal state. Equals the bar count once
    /// a run has completed.
    pub fn finished(&self) -> usize {
        self.main
            .iter()
            .filter(|bar| bar.view.borrow().state.is_terminal())
            .count()
    }

    /// Snapshot of a lane in display order
    pub fn bars(&self, lane: Lane, pitch: f32) -> Vec<BarView> {
        let mut mounted: Vec<&MountedBar> = self.mounted(lane).iter().collect();
        if lane == Lane::Main {
            mounted.sort_by(|a, b| a.slot(pitch).total_cmp(&b.slot(pitch)));
        }
        mounted.iter().map(|bar| bar.view.borrow().clone()).collect()
    }
}

fn mount(
    stage: &Stage,
    lane: Lane,
    bars: &mut Vec<MountedBar>,
    elements: &[Element],
) {
    let registry = stage.registry(lane);

    for bar in bars.drain(..) {
        registry.unregister(bar.element.id);
    }

    for element in elements {
        let view = Rc::new(RefCell::new(BarView::new(element.value)));
        registry.register(element.id, view.clone());
        bars.push(MountedBar {
            element: element.clone(),
            view,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::render::VisualState;
    use crate::runtime::controller::RunStatus;
    use crate::runtime::settings::Settings;
    use crate::sorting::default_registry;

    fn controller(name: &str, values: &[u32]) -> RunController {
        let registry = default_registry().unwrap();
        RunController::with_values(
            registry.get(name).unwrap(),
            &Settings::default(),
            values,
            Instant::now(),
        )
    }

    fn run(board: &mut Board, controller: &mut RunController) -> bool {
        let mut now = Instant::now();
        let mut saw_lanes = false;
        loop {
            board.sync(controller);
            saw_lanes |= !board.mounted(Lane::Left).is_empty();
            if controller.tick(now) == RunStatus::Finished {
                return saw_lanes;
            }
            now += Duration::from_secs(3600);
        }
    }

    #[test]
    fn mounts_main_lane_on_first_sync() {
        let controller = controller("insertion", &[3, 1, 2]);
        let mut board = Board::new();

        assert!(board.sync(&controller));
        assert!(!board.sync(&controller));
        assert_eq!(board.mounted(Lane::Main).len(), 3);
        assert_eq!(controller.stage().registry(Lane::Main).len(), 3);
    }

    #[test]
    fn display_order_follows_moves() {
        let mut controller = controller("selection", &[5, 9, 1, 7]);
        let mut board = Board::new();
        run(&mut board, &mut controller);

        let bars = board.bars(Lane::Main, 1.0);
        let shown: Vec<u32> = bars.iter().map(|b| b.value).collect();

        assert_eq!(shown, vec![1, 5, 7, 9]);
        assert!(bars.iter().all(|b| b.state == VisualState::Finished));
        assert_eq!(board.finished(), 4);
        assert!(bars.iter().all(|b| b.marker.is_none()));
    }

    #[test]
    fn merge_lanes_are_mounted_then_cleared() {
        let mut controller = controller("merge", &[4, 2, 8, 6, 1]);
        let mut board = Board::new();

        assert!(run(&mut board, &mut controller));

        board.sync(&controller);
        assert!(board.mounted(Lane::Left).is_empty());
        assert!(board.mounted(Lane::Right).is_empty());
        assert!(controller.stage().registry(Lane::Left).is_empty());

        let shown: Vec<u32> = board
            .bars(Lane::Main, 1.0)
            .iter()
            .map(|b| b.value)
            .collect();
        assert_eq!(shown, vec![1, 2, 4, 6, 8]);
    }

    #[test]
    fn reset_remounts_fresh_identities() {
        let mut controller = controller("bubble", &[2, 1]);
        let mut board = Board::new();
        board.sync(&controller);
        let before = board.mounted(Lane::Main)[0].element.id;

        controller.reset();

        assert!(board.sync(&controller));
        assert_ne!(board.mounted(Lane::Main)[0].element.id, before);
        assert_eq!(controller.stage().registry(Lane::Main).len(), 2);
    }
}
