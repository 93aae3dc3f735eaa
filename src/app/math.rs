use std::{f32::consts::PI, ops::RangeInclusive};

/// Easing curves, see [Interpolation - libGDX](https://libgdx.com/wiki/math-utils/interpolation)
#[derive(Default, Debug, Clone, Copy)]
pub enum Interpolation {
    #[default]
    Linear,
    Sine,
}

impl Interpolation {
    pub fn apply(&self, a: f32) -> f32 {
        match self {
            Self::Linear => a,
            Self::Sine => (1.0 - (a * PI).cos()) / 2.0,
        }
    }
}

#[inline]
pub fn inverse_lerp(range: RangeInclusive<f32>, value: f32) -> f32 {
    let min = *range.start();
    let max = *range.end();
    if min == max {
        1.0
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}
