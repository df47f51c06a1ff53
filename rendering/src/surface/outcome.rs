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

use crate::colour::Spectrum;
use crate::lights::PhongReflectance;
use crate::ray::Ray;
use crate::Float;

/// What a surface does with a ray that hits it
#[derive(Debug, Clone, PartialEq)]
pub enum TransportOutcome {
    /// A colour that does not depend on light sources. Terminal.
    Colour(Spectrum),

    /// A surface that needs to be lit by the scene's light sources. Terminal.
    Lit(PhongReflectance),

    /// A single outgoing ray and the fraction of light it carries
    Continue(Ray, Float),

    /// A single outgoing ray, filtered channel by channel
    Filtered(Ray, Spectrum),

    /// Several outgoing rays with their weights
    Split(Vec<(Ray, Float)>),

    /// Nothing leaves the surface
    Absorbed,
}

impl TransportOutcome {
    /// The fraction of the incident light carried away by the
    /// outgoing rays. Terminal outcomes carry none.
    pub fn total_weight(&self) -> Float {
        match self {
            Self::Colour(_) | Self::Lit(_) | Self::Absorbed => 0.,
            Self::Continue(_, w) => *w,
            Self::Filtered(_, s) => s.max(),
            Self::Split(rays) => rays.iter().map(|(_, w)| w).sum(),
        }
    }

    /// Does this outcome spawn new rays?
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Colour(_) | Self::Lit(_) | Self::Absorbed)
    }
}
