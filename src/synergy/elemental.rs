//! Wu-Xing elemental synergy. Needs no external data.
//!
//! `0.5 · W[primary elements] + 0.3 · cross average + 0.2 · season/direction affinity`
//!
//! The primary element of a category is the element of its upper trigram. The
//! cross average is the mean of `W` over all four (upper|lower) × (upper|lower)
//! element pairs.

use crate::trigram::{Element, Trigram};

/// Element relation weights.
pub const SAME_ELEMENT: f64 = 1.0;
/// Either element generates the other.
pub const GENERATIVE: f64 = 0.8;
/// Either element destroys the other.
pub const CONTROLLING: f64 = 0.3;

/// Symmetric 5×5 element synergy in generating-cycle order.
pub fn element_weight(a: Element, b: Element) -> f64 {
    if a == b {
        SAME_ELEMENT
    } else if a.generates(b) || b.generates(a) {
        GENERATIVE
    } else {
        // Among five elements every distinct pair is either generating or controlling.
        CONTROLLING
    }
}

/// Season/direction affinity of two trigrams.
pub fn affinity(a: Trigram, b: Trigram) -> f64 {
    if a.season() == b.season() {
        0.8
    } else if a.direction() == b.direction() {
        0.7
    } else if a.season().is_adjacent(b.season()) {
        0.6
    } else {
        0.4
    }
}

/// Elemental score in [0, 1].
pub fn elemental_score(a: (Trigram, Trigram), b: (Trigram, Trigram)) -> f64 {
    let (ua, la) = a;
    let (ub, lb) = b;

    let primary = element_weight(ua.element(), ub.element());
    // Grouped so that swapping a and b yields bit-identical sums.
    let cross = (primary
        + element_weight(la.element(), lb.element())
        + (element_weight(ua.element(), lb.element()) + element_weight(la.element(), ub.element())))
        / 4.0;
    let seasonal = (affinity(ua, ub) + affinity(la, lb)) / 2.0;

    (0.5 * primary + 0.3 * cross + 0.2 * seasonal).clamp(0.0, 1.0)
}
