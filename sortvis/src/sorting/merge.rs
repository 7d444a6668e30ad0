use std::future::Future;
use std::pin::Pin;

use super::{Animator, DriverConfig, DriverFuture};
use crate::model::{Element, Sequence};
use crate::render::{Lane, VisualState};

pub static DRIVER_CONFIG: DriverConfig = DriverConfig {
    name: "merge",
    display_name: "Merge Sort",
    description: "Splits at the midpoint, sorts both halves, then merges \
        them back through the LEFT and RIGHT lanes. O(n log n) time, O(n) \
        space, stable.",
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

    let end = bars.len() - 1;
    split(&anim, &mut bars, 0, end).await;

    anim.effects().stage().clear_lanes();
    anim.finish_all(&bars);
    bars
}

fn split<'a>(
    anim: &'a Animator,
    bars: &'a mut [Element],
    start: usize,
    end: usize,
) -> Pin<Box<dyn Future<Output = ()> + 'a>> {
    Box::pin(async move {
        if start >= end {
            return;
        }
        let mid = start + (end - start) / 2;
        split(anim, bars, start, mid).await;
        split(anim, bars, mid + 1, end).await;
        merge(anim, bars, start, mid, end).await;
    })
}

async fn merge(
    anim: &Animator,
    bars: &mut [Element],
    start: usize,
    mid: usize,
    end: usize,
) {
    // Lanes hold copies taken before any write to this range
    let left: Sequence = bars[start..=mid].to_vec();
    let right: Sequence = bars[mid + 1..=end].to_vec();
    anim.effects()
        .stage()
        .publish_lanes(left.clone(), right.clone());
    anim.yield_now().await;

    let (mut l, mut r, mut k) = (0, 0, start);

    while l < left.len() && r < right.len() {
        anim.paint_lane(Lane::Left, &left[l], VisualState::Compare);
        anim.paint_lane(Lane::Right, &right[r], VisualState::Compare);
        anim.paint([&bars[k]], VisualState::Minimum);
        anim.compared();
        anim.pause().await;

        // Ties go left
        if left[l].value <= right[r].value {
            take(anim, bars, k, Lane::Left, &left[l]).await;
            l += 1;
        } else {
            take(anim, bars, k, Lane::Right, &right[r]).await;
            r += 1;
        }

        anim.paint([&bars[k]], VisualState::Neutral);
        anim.pause().await;
        k += 1;
    }

    for (lane, rest) in [(Lane::Left, &left[l..]), (Lane::Right, &right[r..])]
    {
        for element in rest {
            anim.paint_lane(lane, element, VisualState::Compare);
            anim.paint([&bars[k]], VisualState::Minimum);
            anim.pause().await;

            take(anim, bars, k, lane, element).await;

            anim.paint([&bars[k]], VisualState::Neutral);
            anim.pause().await;
            k += 1;
        }
    }
}

async fn take(
    anim: &Animator,
    bars: &mut [Element],
    k: usize,
    lane: Lane,
    winner: &Element,
) {
    anim.paint_lane(lane, winner, VisualState::Swap);
    anim.pause().await;
    anim.write(bars, k, winner.value);
    anim.pause().await;
    anim.paint_lane(lane, winner, VisualState::Neutral);
}
