use super::{Animator, DriverConfig, DriverFuture};
use crate::model::Sequence;
use crate::render::VisualState;

pub static DRIVER_CONFIG: DriverConfig = DriverConfig {
    name: "bubble",
    display_name: "Bubble Sort",
    description: "Swaps adjacent out-of-order pairs, floating the largest \
        value to the end of each pass; stops after a pass without swaps. \
        O(n^2) time, O(1) space, stable.",
    stable: true,
};

pub fn run(animator: Animator, sequence: Sequence) -> DriverFuture {
    Box::pin(sort(animator, sequence))
}

async fn sort(anim: Animator, mut bars: Sequence) -> Sequence {
    let n = bars.len();
    if n < 2 {
        anim.finish_all(&bars);
        return bars;
    }

    let mut settled = 0;
    for pass in 0..n - 1 {
        let mut swapped = false;

        for j in 0..n - pass - 1 {
            anim.paint([&bars[j], &bars[j + 1]], VisualState::Compare);
            anim.compared();
            anim.pause().await;

            if bars[j].value > bars[j + 1].value {
                anim.swap(&mut bars, j, j + 1).await;
                swapped = true;
            }
            anim.paint([&bars[j], &bars[j + 1]], VisualState::Neutral);
        }

        anim.finish(&bars[n - 1 - pass]);
        settled += 1;

        if !swapped {
            break;
        }
    }

    anim.finish_all(&bars[..n - settled]);
    bars
}
