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

use super::{SurfaceTrait, TransportOutcome};
use crate::colour::Spectrum;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use serde::{Deserialize, Serialize};

/// A colour that does not depend on the light sources (i.e., it glows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlowingColour {
    colour: Spectrum,
    shadow_throwing: bool,
}

impl GlowingColour {
    pub fn new(colour: Spectrum) -> Self {
        Self {
            colour,
            shadow_throwing: true,
        }
    }

    accessors! {
        colour: Spectrum => get_colour, set_colour;
        shadow_throwing: bool => get_shadow_throwing, set_shadow_throwing;
    }
}

impl SurfaceTrait for GlowingColour {
    fn id(&self) -> &'static str {
        "GlowingColour"
    }

    fn shade(
        &self,
        _incident: &Ray,
        _hit: &Interaction,
        _ctx: &TraceContext,
        _scene: &Scene,
        _rng: &mut RandGen,
    ) -> TransportOutcome {
        TransportOutcome::Colour(self.colour)
    }

    fn has_shadow_control(&self) -> bool {
        true
    }

    fn is_shadow_throwing(&self) -> bool {
        self.shadow_throwing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::test_utils::*;
    use crate::surface::SurfaceModel;
    use geometry::Vector3D;

    #[test]
    fn test_glow() {
        let model = SurfaceModel::GlowingColour(GlowingColour::new(Spectrum::BLUE));
        let (ray, hit) = flat_hit(1., 2., Vector3D::new(1., 0., -1.));
        assert_eq!(
            shade(&model, &ray, &hit),
            TransportOutcome::Colour(Spectrum::BLUE)
        );
    }
}
