// Integration tests for the playback state machine

use sortty::array::{Element, VALUE_MAX, VALUE_MIN};
use sortty::playback::{Phase, Playback};
use sortty::steps::step_count;

fn playback_over(values: &[i32]) -> Playback {
    let elements = values
        .iter()
        .enumerate()
        .map(|(id, &value)| Element::new(value, id))
        .collect();
    Playback::with_elements(elements)
}

// === LIFECYCLE ===

#[test]
fn test_initial_state_is_idle() {
    let playback = playback_over(&[5, 3, 8, 1]);
    assert_eq!(playback.phase(), Phase::Idle);
    assert_eq!(playback.cursor(), None);
    assert_eq!(playback.total_steps(), 0);
    assert!(playback.current_step().is_none());
}

#[test]
fn test_start_enters_running_at_frame_zero() {
    let mut playback = playback_over(&[5, 3, 8, 1]);
    playback.start();

    assert_eq!(playback.phase(), Phase::Running);
    assert_eq!(playback.cursor(), Some(0));
    assert_eq!(playback.total_steps(), 19);
    assert!(
        playback.elements()[0].is_comparing && playback.elements()[1].is_comparing,
        "first frame should highlight the opening comparison"
    );
}

#[test]
fn test_playback_runs_to_done() {
    let mut playback = playback_over(&[5, 3, 8, 1]);
    playback.start();

    let mut advances = 0;
    while playback.step_forward() {
        advances += 1;
    }

    assert_eq!(advances, playback.total_steps() - 1);
    assert_eq!(playback.phase(), Phase::Done);
    assert_eq!(playback.cursor(), Some(playback.total_steps() - 1));

    let values: Vec<i32> = playback.elements().iter().map(|e| e.value).collect();
    assert_eq!(values, [1, 3, 5, 8]);
    assert!(playback.elements().iter().all(|e| e.is_sorted));
}

#[test]
fn test_displayed_array_tracks_the_cursor() {
    let mut playback = playback_over(&[5, 3, 8, 1]);
    playback.start();

    for _ in 0..5 {
        playback.step_forward();
        let step = playback.current_step().expect("cursor is on a frame");
        assert_eq!(playback.elements(), &step.array[..]);
    }
}

// === GUARDED OPERATIONS ===

#[test]
fn test_start_on_empty_array_is_ignored() {
    let mut playback = playback_over(&[]);
    playback.start();
    assert_eq!(playback.phase(), Phase::Idle);
    assert_eq!(playback.cursor(), None);
    assert_eq!(playback.total_steps(), 0);
}

#[test]
fn test_double_start_neither_restarts_nor_skips() {
    let mut playback = playback_over(&[5, 3, 8, 1]);

    // Rapid double press: the second start must be a no-op
    playback.start();
    playback.start();
    assert_eq!(playback.cursor(), Some(0));
    assert_eq!(playback.total_steps(), 19);

    // Each advance moves the cursor by exactly one
    for expected in 1..playback.total_steps() {
        assert!(playback.step_forward());
        assert_eq!(playback.cursor(), Some(expected));
    }
    assert!(!playback.step_forward(), "advance past the terminal frame");
}

#[test]
fn test_start_while_running_keeps_the_trace() {
    let mut playback = playback_over(&[5, 3, 8, 1]);
    playback.start();
    playback.step_forward();
    playback.step_forward();

    playback.start();
    assert_eq!(playback.cursor(), Some(2), "start mid-run moved the cursor");
    assert_eq!(playback.phase(), Phase::Running);
}

#[test]
fn test_tick_at_done_is_a_no_op() {
    let mut playback = playback_over(&[2, 1]);
    playback.start();
    while playback.step_forward() {}

    assert_eq!(playback.phase(), Phase::Done);
    let at_end = playback.cursor();
    assert!(!playback.step_forward());
    assert_eq!(playback.cursor(), at_end);
}

#[test]
fn test_single_element_completes_immediately() {
    let mut playback = playback_over(&[42]);
    playback.start();

    assert_eq!(playback.phase(), Phase::Done);
    assert_eq!(playback.total_steps(), step_count(1));
    assert!(playback.elements()[0].is_sorted);
}

// === CANCELLATION ===

#[test]
fn test_regenerate_cancels_a_running_sort() {
    let mut playback = playback_over(&[5, 3, 8, 1]);
    playback.start();
    playback.step_forward();
    assert_eq!(playback.phase(), Phase::Running);

    playback.regenerate();
    assert_eq!(playback.phase(), Phase::Idle);
    assert_eq!(playback.cursor(), None);
    assert_eq!(playback.total_steps(), 0);

    // A timer tick scheduled before the reset fires into Idle and must not
    // touch anything
    assert!(!playback.step_forward());
    assert_eq!(playback.cursor(), None);
    assert_eq!(playback.phase(), Phase::Idle);
}

#[test]
fn test_regenerate_produces_a_fresh_unflagged_array() {
    let mut playback = playback_over(&[5, 3, 8, 1]);
    playback.start();
    playback.regenerate();

    let elements = playback.elements();
    assert_eq!(elements.len(), 4);
    for (position, e) in elements.iter().enumerate() {
        assert_eq!(e.id, position);
        assert!((VALUE_MIN..=VALUE_MAX).contains(&e.value));
        assert!(!e.is_comparing && !e.is_swapping && !e.is_sorted);
    }
}

#[test]
fn test_restart_after_done_replays_from_frame_zero() {
    let mut playback = playback_over(&[2, 1]);
    playback.start();
    while playback.step_forward() {}
    assert_eq!(playback.phase(), Phase::Done);

    // The displayed array is now sorted; starting again traces it anew
    playback.start();
    assert_eq!(playback.cursor(), Some(0));
    assert_eq!(playback.phase(), Phase::Running);
    assert!(
        playback.current_step().unwrap().swapping.is_none(),
        "sorted array should produce a swap-free trace"
    );
}

// === MANUAL NAVIGATION ===

#[test]
fn test_step_backward_reenters_running_from_done() {
    let mut playback = playback_over(&[2, 1]);
    playback.start();
    while playback.step_forward() {}

    assert!(playback.step_backward());
    assert_eq!(playback.phase(), Phase::Running);
    assert_eq!(playback.cursor(), Some(playback.total_steps() - 2));
}

#[test]
fn test_step_backward_stops_at_frame_zero() {
    let mut playback = playback_over(&[2, 1]);
    playback.start();

    assert!(!playback.step_backward());
    assert_eq!(playback.cursor(), Some(0));
}

#[test]
fn test_rewind_and_jump() {
    let mut playback = playback_over(&[5, 3, 8, 1]);
    playback.start();
    playback.step_forward();
    playback.step_forward();

    assert!(playback.jump_to_end());
    assert_eq!(playback.phase(), Phase::Done);
    assert_eq!(playback.cursor(), Some(playback.total_steps() - 1));

    assert!(playback.rewind_to_start());
    assert_eq!(playback.phase(), Phase::Running);
    assert_eq!(playback.cursor(), Some(0));
}

#[test]
fn test_navigation_is_inert_while_idle() {
    let mut playback = playback_over(&[5, 3, 8, 1]);

    assert!(!playback.step_forward());
    assert!(!playback.step_backward());
    assert!(!playback.rewind_to_start());
    assert!(!playback.jump_to_end());
    assert_eq!(playback.phase(), Phase::Idle);
    assert_eq!(playback.cursor(), None);
}
