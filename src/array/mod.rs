// Element generation for the visualized array

use rand::Rng;

/// Number of bars in a generated array
pub const ELEMENT_COUNT: usize = 12;

/// Smallest value a generated bar can take (inclusive)
pub const VALUE_MIN: i32 = 10;

/// Largest value a generated bar can take (inclusive)
pub const VALUE_MAX: i32 = 309;

/// A single bar in the visualized array
///
/// The highlight flags are display state baked into each trace frame, not
/// live state: the step generator emits a fresh copy of every element per
/// frame with the flags set for that frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Bar height; the only field the sort orders by
    pub value: i32,

    /// Stable identity assigned at generation time. Follows the element
    /// through swaps and is used for display labels, never for ordering.
    pub id: usize,

    /// One side of the active comparison
    pub is_comparing: bool,

    /// One side of the active exchange
    pub is_swapping: bool,

    /// Part of the settled suffix
    pub is_sorted: bool,
}

impl Element {
    /// Create an unhighlighted element
    pub fn new(value: i32, id: usize) -> Self {
        Element {
            value,
            id,
            is_comparing: false,
            is_swapping: false,
            is_sorted: false,
        }
    }
}

/// Generate `n` elements with fresh random values
pub fn generate_elements(n: usize) -> Vec<Element> {
    generate_elements_with(&mut rand::thread_rng(), n)
}

/// Generate `n` elements drawing values from the provided RNG
///
/// Values are uniform over `VALUE_MIN..=VALUE_MAX`; ids record the initial
/// positions `0..n`.
pub fn generate_elements_with<R: Rng>(rng: &mut R, n: usize) -> Vec<Element> {
    (0..n)
        .map(|id| Element::new(rng.gen_range(VALUE_MIN..=VALUE_MAX), id))
        .collect()
}
