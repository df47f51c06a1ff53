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
use crate::error::{check_range, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use serde::{Deserialize, Serialize};

/// Lets rays through, undeviated, multiplying each colour channel by a coefficient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColourFilter {
    coefficients: Spectrum,
    shadow_throwing: bool,
}

fn check_coefficients(coefficients: Spectrum) -> Result<Spectrum, ConfigError> {
    for c in coefficients.0 {
        check_range("colour filter coefficient", c, 0., 1.)?;
    }
    Ok(coefficients)
}

impl ColourFilter {
    /// Creates a `ColourFilter` that does not throw shadows
    pub fn new(coefficients: Spectrum) -> Result<Self, ConfigError> {
        Ok(Self {
            coefficients: check_coefficients(coefficients)?,
            shadow_throwing: false,
        })
    }

    accessors! {
        shadow_throwing: bool => get_shadow_throwing, set_shadow_throwing;
    }

    pub fn get_coefficients(&self) -> Spectrum {
        self.coefficients
    }

    pub fn set_coefficients(&mut self, coefficients: Spectrum) -> Result<(), ConfigError> {
        self.coefficients = check_coefficients(coefficients)?;
        Ok(())
    }
}

impl SurfaceTrait for ColourFilter {
    fn id(&self) -> &'static str {
        "ColourFilter"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_coefficients(self.coefficients)?;
        Ok(())
    }

    fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        _ctx: &TraceContext,
        _scene: &Scene,
        _rng: &mut RandGen,
    ) -> TransportOutcome {
        let ray = incident.advanced_to(hit.point());
        TransportOutcome::Filtered(ray, self.coefficients)
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
    fn test_filter() -> Result<(), String> {
        let coefficients = Spectrum::new(1., 0.5, 0.);
        let model = SurfaceModel::ColourFilter(ColourFilter::new(coefficients).map_err(|e| e.to_string())?);
        let d = Vector3D::new(1., 1., -1.).get_normalized();
        let (ray, hit) = flat_hit(0., 0., d);
        match shade(&model, &ray, &hit) {
            TransportOutcome::Filtered(r, c) => {
                assert_eq!(c, coefficients);
                assert!(r.direction().compare(d));
                assert!(r.origin().compare(hit.point()));
            }
            other => return Err(format!("Expecting Filtered, found {:?}", other)),
        }
        assert!(!model.is_shadow_throwing());
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert!(ColourFilter::new(Spectrum::new(1.2, 0., 0.)).is_err());
        assert!(ColourFilter::new(Spectrum::new(0.2, -0.1, 0.)).is_err());
    }
}
