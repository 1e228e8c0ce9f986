// Bubble sort trace generation

use crate::array::Element;

/// One frame of the sort animation
///
/// Frames are immutable once generated: each owns a full copy of the working
/// array with the highlight flags baked in, so the playback layer only ever
/// swaps which frame is on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Snapshot of the working array, flags included
    pub array: Vec<Element>,

    /// Indices under comparison, when this is a compare frame
    pub comparing: Option<(usize, usize)>,

    /// Indices being exchanged, when this is a swap frame
    pub swapping: Option<(usize, usize)>,

    /// Last index of the unsettled region for the current pass, or -1 once
    /// every position is settled
    pub sorted_index: isize,
}

/// Number of frames a trace for `n` elements contains: three per adjacent
/// comparison plus the terminal frame.
pub fn step_count(n: usize) -> usize {
    3 * (n * n.saturating_sub(1)) / 2 + 1
}

/// Compute the full bubble sort trace for `elements`.
///
/// Input flags are ignored; the working copy starts unhighlighted. Every
/// `(pass, index)` pair contributes exactly three frames: the comparison,
/// the exchange (or an unhighlighted hold when the pair is already in
/// order), and the post-comparison reset. The trace length therefore
/// depends only on the element count. A single terminal frame marks every
/// element settled.
///
/// Deterministic: the same input always yields an identical trace.
pub fn generate_steps(elements: &[Element]) -> Vec<Step> {
    let n = elements.len();
    let mut working: Vec<Element> = elements
        .iter()
        .map(|e| Element::new(e.value, e.id))
        .collect();
    let mut steps = Vec::with_capacity(step_count(n));

    for i in 0..n.saturating_sub(1) {
        // Positions >= n - i were settled by earlier passes
        let settled_from = n - i;
        let sorted_index = (n - i - 1) as isize;

        for j in 0..n - i - 1 {
            steps.push(capture(
                &working,
                Some((j, j + 1)),
                None,
                settled_from,
                sorted_index,
            ));

            if working[j].value > working[j + 1].value {
                // Swap frame shows the pair pre-exchange; the exchange moves
                // the full records, id included
                steps.push(capture(
                    &working,
                    None,
                    Some((j, j + 1)),
                    settled_from,
                    sorted_index,
                ));
                working.swap(j, j + 1);
            } else {
                steps.push(capture(&working, None, None, settled_from, sorted_index));
            }

            steps.push(capture(&working, None, None, settled_from, sorted_index));
        }
    }

    steps.push(capture(&working, None, None, 0, -1));
    steps
}

/// Snapshot the working array with flags derived from the frame descriptor
fn capture(
    working: &[Element],
    comparing: Option<(usize, usize)>,
    swapping: Option<(usize, usize)>,
    settled_from: usize,
    sorted_index: isize,
) -> Step {
    let array = working
        .iter()
        .enumerate()
        .map(|(position, e)| {
            let mut e = e.clone();
            e.is_comparing = comparing.is_some_and(|(a, b)| position == a || position == b);
            e.is_swapping = swapping.is_some_and(|(a, b)| position == a || position == b);
            e.is_sorted = position >= settled_from;
            e
        })
        .collect();

    Step {
        array,
        comparing,
        swapping,
        sorted_index,
    }
}
