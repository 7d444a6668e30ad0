use std::future::Future;
use std::pin::Pin;

use super::{Animator, DriverConfig, DriverFuture};
use crate::model::{Element, Sequence};
use crate::render::{Marker, VisualState};

pub static DRIVER_CONFIG: DriverConfig = DriverConfig {
    name: "quick",
    display_name: "Quick Sort",
    description: "Hoare-style partition around a random pivot, with LEFT and \
        RIGHT pointers closing in from both ends. O(n log n) expected time, \
        O(log n) space, not stable.",
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

    let end = bars.len() - 1;
    partition(&anim, &mut bars, 0, end).await;
    bars
}

fn partition<'a>(
    anim: &'a Animator,
    bars: &'a mut [Element],
    start: usize,
    end: usize,
) -> Pin<Box<dyn Future<Output = ()> + 'a>> {
    Box::pin(async move {
        if start == end {
            anim.finish(&bars[start]);
            anim.pause().await;
            return;
        }

        let pivot_index = anim.random_index(start..=end);
        anim.mark_special(&bars[pivot_index], Marker::Pivot);
        anim.pause().await;
        if pivot_index != start {
            anim.swap(bars, start, pivot_index).await;
        }
        anim.paint([&bars[start]], VisualState::Pivot);
        anim.pause().await;

        let pivot = bars[start].value;
        let (mut left, mut right) = (start + 1, end);
        show_pointers(anim, bars, start, end, left, right);
        anim.pause().await;

        while left <= right {
            let left_high = anim.check(bars[left].value > pivot).await;
            let right_low = anim.check(bars[right].value < pivot).await;
            let swapped = left_high && right_low;

            if swapped {
                anim.swap(bars, left, right).await;
            }
            if swapped || !left_high {
                anim.remove_special(&bars[left]);
                left += 1;
            }
            if swapped || !right_low {
                anim.remove_special(&bars[right]);
                right -= 1;
            }

            show_pointers(anim, bars, start, end, left, right);
        }

        anim.pause().await;
        if right > start {
            anim.swap(bars, start, right).await;
        }
        anim.pause().await;

        anim.remove_special(&bars[start]);
        anim.remove_special(&bars[right]);
        if left <= end {
            anim.remove_special(&bars[left]);
        }
        anim.finish(&bars[right]);

        if right > start {
            partition(anim, bars, start, right - 1).await;
        }
        if right < end {
            partition(anim, bars, right + 1, end).await;
        }
    })
}

fn show_pointers(
    anim: &Animator,
    bars: &[Element],
    start: usize,
    end: usize,
    left: usize,
    right: usize,
) {
    if left == right {
        anim.mark_special(&bars[left], Marker::LeftRight);
        return;
    }
    if left <= end {
        anim.mark_special(&bars[left], Marker::Left);
    }
    if right > start {
        anim.mark_special(&bars[right], Marker::Right);
    }
}
