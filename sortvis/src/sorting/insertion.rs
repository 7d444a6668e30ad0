use super::{Animator, DriverConfig, DriverFuture};
use crate::model::Sequence;
use crate::render::VisualState;

pub static DRIVER_CONFIG: DriverConfig = DriverConfig {
    name: "insertion",
    display_name: "Insertion Sort",
    description: "Grows a sorted prefix by walking each new element left \
        until it meets a smaller one. O(n^2) time, O(1) space, stable.",
    stable: true,
};

pub fn run(animator: Animator, sequence: Sequence) -> DriverFuture {
    Box::pin(sort(animator, sequence))
}

async fn sort(anim: Animator, mut bars: Sequence) -> Sequence {
    if bars.len() < 2 {
        anim.finish_all(&bars);
        return bars;
    }

    anim.paint(&bars[..1], VisualState::Sorted);

    for i in 1..bars.len() {
        let mut j = i;
        while j > 0 {
            anim.paint([&bars[j], &bars[j - 1]], VisualState::Compare);
            anim.compared();
            anim.pause().await;

            let in_order = bars[j].value >= bars[j - 1].value;
            if !in_order {
                anim.swap(&mut bars, j, j - 1).await;
            }
            anim.paint([&bars[j], &bars[j - 1]], VisualState::Sorted);
            if in_order {
                break;
            }
            j -= 1;
        }
    }

    anim.finish_all(&bars);
    bars
}
