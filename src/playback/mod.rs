// Playback over the precomputed sort trace

use std::time::Duration;

use crate::array::{generate_elements, Element};
use crate::steps::{generate_steps, Step};

/// Delay between automatic playback ticks
pub const TICK_DELAY: Duration = Duration::from_millis(800);

/// Where the controller is in the trace lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No trace computed; a fresh array is on display
    Idle,
    /// A trace exists and frames remain ahead of the cursor
    Running,
    /// The cursor sits on the terminal frame
    Done,
}

/// Cursor-driven playback over a bubble sort trace
///
/// Owns the displayed element vector, the immutable trace, and the cursor
/// into it. All navigation moves only the cursor and re-displays the frame
/// it lands on; the trace itself is never mutated after [`start`] computes
/// it.
///
/// Invariants: `cursor` is `None` exactly in [`Phase::Idle`], and the phase
/// is [`Phase::Done`] exactly when the cursor sits on the last frame.
///
/// [`start`]: Playback::start
#[derive(Debug)]
pub struct Playback {
    /// How many elements `regenerate` produces
    count: usize,

    /// The array currently on display
    elements: Vec<Element>,

    /// Immutable trace; empty while Idle
    steps: Vec<Step>,

    /// Index of the displayed frame; `None` while Idle
    cursor: Option<usize>,

    phase: Phase,
}

impl Playback {
    /// Create a controller displaying a fresh random array of `count`
    /// elements
    pub fn new(count: usize) -> Self {
        Playback {
            count,
            elements: generate_elements(count),
            steps: Vec::new(),
            cursor: None,
            phase: Phase::Idle,
        }
    }

    /// Create a controller displaying a caller-supplied array
    ///
    /// [`regenerate`] keeps producing arrays of the same length.
    ///
    /// [`regenerate`]: Playback::regenerate
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Playback {
            count: elements.len(),
            elements,
            steps: Vec::new(),
            cursor: None,
            phase: Phase::Idle,
        }
    }

    /// Compute the trace for the displayed array and begin playback
    ///
    /// Silently ignored while already Running or when the array is empty.
    pub fn start(&mut self) {
        if self.phase == Phase::Running || self.elements.is_empty() {
            return;
        }

        self.steps = generate_steps(&self.elements);
        self.display(0);
    }

    /// Advance the cursor by one frame
    ///
    /// Only acts while Running, so a timer tick that fires after a reset is
    /// an observable no-op. Returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        // Running guarantees at least one frame ahead
        match self.cursor {
            Some(cursor) => {
                self.display(cursor + 1);
                true
            }
            None => false,
        }
    }

    /// Move the cursor back one frame, re-entering Running from Done
    pub fn step_backward(&mut self) -> bool {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.display(cursor - 1);
                true
            }
            _ => false,
        }
    }

    /// Jump to the first frame of the trace
    pub fn rewind_to_start(&mut self) -> bool {
        if self.cursor.is_none() {
            return false;
        }
        self.display(0);
        true
    }

    /// Jump to the terminal frame
    pub fn jump_to_end(&mut self) -> bool {
        if self.cursor.is_none() {
            return false;
        }
        self.display(self.steps.len() - 1);
        true
    }

    /// Throw away the trace and display a fresh random array
    ///
    /// Usable in every phase. While Running this cancels playback; the phase
    /// guard on [`step_forward`] keeps any still-pending tick inert.
    ///
    /// [`step_forward`]: Playback::step_forward
    pub fn regenerate(&mut self) {
        self.elements = generate_elements(self.count);
        self.steps.clear();
        self.cursor = None;
        self.phase = Phase::Idle;
    }

    /// Put the frame at `index` on display and update the phase
    fn display(&mut self, index: usize) {
        self.elements = self.steps[index].array.clone();
        self.cursor = Some(index);
        self.phase = if index + 1 == self.steps.len() {
            Phase::Done
        } else {
            Phase::Running
        };
    }

    // ========== Getter methods for UI ==========

    /// The array currently on display
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether playback is mid-trace
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Index of the displayed frame; `None` while Idle
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Total number of frames in the trace (0 while Idle)
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// The frame under the cursor, if any
    pub fn current_step(&self) -> Option<&Step> {
        self.cursor.and_then(|cursor| self.steps.get(cursor))
    }
}
