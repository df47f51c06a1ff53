/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::Float;
use serde::{Deserialize, Serialize};

/// An RGB colour. Also used for per-channel weights (e.g., the
/// coefficients of a colour filter).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spectrum(pub [Float; crate::N_CHANNELS]);

const RADIANCE_COEFFICIENTS: [Float; crate::N_CHANNELS] = [0.265, 0.67, 0.065];

/// The standard Luminious Efficacy of equal white light energy
/// as defined in Radiance
pub const WHITE_EFFICACY: Float = 179.;

impl std::default::Default for Spectrum {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Spectrum {
    pub const BLACK: Self = Self([0.0; crate::N_CHANNELS]);
    pub const WHITE: Self = Self([1.0; crate::N_CHANNELS]);
    pub const RED: Self = Self([1.0, 0.0, 0.0]);
    pub const GREEN: Self = Self([0.0, 1.0, 0.0]);
    pub const BLUE: Self = Self([0.0, 0.0, 1.0]);
    pub const CYAN: Self = Self([0.0, 1.0, 1.0]);

    /// Creates a new Spectrum from its red, green and blue components
    pub const fn new(red: Float, green: Float, blue: Float) -> Self {
        Self([red, green, blue])
    }

    /// Creates a new Spectrum full of equal values `v`
    pub fn gray(v: Float) -> Self {
        Self([v; crate::N_CHANNELS])
    }

    pub fn red(&self) -> Float {
        self.0[0]
    }

    pub fn green(&self) -> Float {
        self.0[1]
    }

    pub fn blue(&self) -> Float {
        self.0[2]
    }

    /// Builds a colour from hue, saturation and lightness, all in `[0,1]`.
    /// The hue wraps around.
    pub fn from_hsl(hue: Float, saturation: Float, lightness: Float) -> Self {
        let h = hue.rem_euclid(1.0);
        let s = saturation.clamp(0., 1.);
        let l = lightness.clamp(0., 1.);
        if s < 1e-12 {
            return Self::gray(l);
        }
        let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
        let p = 2. * l - q;

        fn channel(p: Float, q: Float, t: Float) -> Float {
            let t = t.rem_euclid(1.0);
            if t < 1. / 6. {
                p + (q - p) * 6. * t
            } else if t < 0.5 {
                q
            } else if t < 2. / 3. {
                p + (q - p) * (2. / 3. - t) * 6.
            } else {
                p
            }
        }

        Self([
            channel(p, q, h + 1. / 3.),
            channel(p, q, h),
            channel(p, q, h - 1. / 3.),
        ])
    }

    /// Checks whether `Spectrum::BLACK == self`
    pub fn is_black(&self) -> bool {
        self.0.iter().all(|v| *v < 1e-24)
    }

    /// Calculates a weighted average of RGB colours, returning
    /// a single value representing Radiance
    pub fn radiance(&self) -> Float {
        self.0
            .iter()
            .zip(RADIANCE_COEFFICIENTS.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Calculates a weighted average of RGB colours, returning
    /// a single value representing Luminance
    pub fn luminance(&self) -> Float {
        self.radiance() * WHITE_EFFICACY
    }

    /// Gets the maximum of the R, G, and B values
    pub fn max(&self) -> Float {
        self.0.iter().copied().fold(Float::MIN, Float::max)
    }

    /// Clamps every channel into `[0, 1]`
    pub fn clamped(&self) -> Self {
        let mut data = self.0;
        data.iter_mut().for_each(|v| *v = v.clamp(0., 1.));
        Self(data)
    }
}

impl std::fmt::Display for Spectrum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5} {:.5} {:.5}", self.0[0], self.0[1], self.0[2])
    }
}

impl std::convert::From<Float> for Spectrum {
    fn from(f: Float) -> Self {
        Spectrum([f; crate::N_CHANNELS])
    }
}

/// Implements channel-wise `Spectrum (op) Spectrum` and `Spectrum (op) Float`
macro_rules! impl_channel_op {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl std::ops::$trait for Spectrum {
            type Output = Self;
            fn $fn(self, other: Self) -> Self {
                let mut data = self.0;
                data.iter_mut()
                    .zip(other.0.iter())
                    .for_each(|(this, other)| *this = *this $op *other);
                Self(data)
            }
        }

        impl std::ops::$trait<Float> for Spectrum {
            type Output = Self;
            fn $fn(self, other: Float) -> Self {
                let mut data = self.0;
                data.iter_mut().for_each(|this| *this = *this $op other);
                Self(data)
            }
        }

        impl std::ops::$trait<Spectrum> for Float {
            type Output = Spectrum;
            fn $fn(self, c: Spectrum) -> Spectrum {
                let mut data = c.0;
                data.iter_mut().for_each(|other| *other = self $op *other);
                Spectrum(data)
            }
        }

        impl std::ops::$assign_trait for Spectrum {
            fn $assign_fn(&mut self, other: Self) {
                *self = *self $op other;
            }
        }

        impl std::ops::$assign_trait<Float> for Spectrum {
            fn $assign_fn(&mut self, other: Float) {
                *self = *self $op other;
            }
        }
    };
}

impl_channel_op!(Add, add, AddAssign, add_assign, +);
impl_channel_op!(Sub, sub, SubAssign, sub_assign, -);
impl_channel_op!(Mul, mul, MulAssign, mul_assign, *);
impl_channel_op!(Div, div, DivAssign, div_assign, /);

impl std::iter::Sum for Spectrum {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::BLACK, |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Spectrum, b: Spectrum) {
        for (x, y) in a.0.iter().zip(b.0.iter()) {
            assert!((x - y).abs() < 1e-6, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(Spectrum::default(), Spectrum::BLACK);
        assert!(Spectrum::default().is_black());
        assert!(!Spectrum::WHITE.is_black());
    }

    #[test]
    fn test_ops() {
        let a = Spectrum::new(1., 2., 3.);
        let b = Spectrum::new(0.5, 0.5, 2.);
        assert_close(a + b, Spectrum::new(1.5, 2.5, 5.));
        assert_close(a - b, Spectrum::new(0.5, 1.5, 1.));
        assert_close(a * b, Spectrum::new(0.5, 1., 6.));
        assert_close(a / b, Spectrum::new(2., 4., 1.5));
        assert_close(a * 2., Spectrum::new(2., 4., 6.));
        assert_close(2. * a, Spectrum::new(2., 4., 6.));
        assert_close(a / 2., Spectrum::new(0.5, 1., 1.5));

        let mut c = a;
        c += b;
        c *= 2.;
        assert_close(c, Spectrum::new(3., 5., 10.));
    }

    #[test]
    fn test_sum() {
        let s: Spectrum = vec![Spectrum::RED, Spectrum::GREEN, Spectrum::BLUE]
            .into_iter()
            .sum();
        assert_close(s, Spectrum::WHITE);
    }

    #[test]
    fn test_radiance() {
        assert!((Spectrum::WHITE.radiance() - 1.).abs() < 1e-9);
        assert!((Spectrum::WHITE.luminance() - WHITE_EFFICACY).abs() < 1e-6);
        assert!((Spectrum::new(0.1, 0.7, 0.3).max() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_hsl() {
        assert_close(Spectrum::from_hsl(0., 1., 0.5), Spectrum::RED);
        assert_close(Spectrum::from_hsl(1. / 3., 1., 0.5), Spectrum::GREEN);
        assert_close(Spectrum::from_hsl(2. / 3., 1., 0.5), Spectrum::BLUE);
        assert_close(Spectrum::from_hsl(1., 1., 0.5), Spectrum::RED);
        assert_close(Spectrum::from_hsl(0.3, 0., 0.25), Spectrum::gray(0.25));
        assert_close(Spectrum::from_hsl(0.7, 1., 1.), Spectrum::WHITE);
    }
}
