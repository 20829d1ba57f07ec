// src/utilities/scale.rs
//
// progress helpers shared by the node drawing code
// the formulas drive visual timing, keep them exact

use std::f32::consts::PI;

/// `1 / n`. Callers guarantee `n != 0`.
pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Progress left over once partition `i` of `n` has been reached, floored at zero.
pub fn max_scale(value: f32, i: usize, n: usize) -> f32 {
    (value - i as f32 * inverse(n)).max(0.0)
}

/// Maps global progress onto partition `i` of `n`, giving a staggered 0..1 ramp per partition.
pub fn divide_scale(value: f32, i: usize, n: usize) -> f32 {
    inverse(n).min(max_scale(value, i, n)) * n as f32
}

/// Half sine wave: 0 at both ends, 1 at 0.5.
pub fn sinify(value: f32) -> f32 {
    (value * PI).sin()
}
