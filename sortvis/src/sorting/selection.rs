use super::{Animator, DriverConfig, DriverFuture};
use crate::model::Sequence;
use crate::render::{Marker, VisualState};

pub static DRIVER_CONFIG: DriverConfig = DriverConfig {
    name: "selection",
    display_name: "Selection Sort",
    description: "Scans the unsorted suffix for its minimum and swaps it to \
        the front. O(n^2) time, O(1) space, not stable.",
    stable: false,
};

pub fn run(animator: Animator, sequence: Sequence) -> DriverFuture {
    Box::pin(sort(animator, sequence))
}

async fn sort(anim: Animator, mut bars: Sequence) -> Sequence {
    if bars.len() < 2 {
        anim.finish_all(&bars);
        return bars;
    }

    for i in 0..bars.len() {
        let mut min = i;
        anim.mark_special(&bars[min], Marker::Minimum);

        for j in (i + 1)..bars.len() {
            anim.paint([&bars[j]], VisualState::Compare);
            anim.compared();
            anim.pause().await;

            if bars[j].value < bars[min].value {
                // Unmark before marking: one MINIMUM at a time
                anim.remove_special(&bars[min]);
                min = j;
                anim.mark_special(&bars[min], Marker::Minimum);
            } else {
                anim.paint([&bars[j]], VisualState::Neutral);
            }
        }

        anim.paint([&bars[i], &bars[min]], VisualState::Compare);
        anim.pause().await;
        anim.swap(&mut bars, i, min).await;

        anim.remove_special(&bars[i]);
        anim.paint([&bars[min]], VisualState::Neutral);
        anim.finish(&bars[i]);
    }

    bars
}
