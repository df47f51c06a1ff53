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

//! The optical behaviours that can be attached to the objects
//! in a [`crate::Scene`].
//!
//! Every model is a plain struct in its own module; [`SurfaceModel`]
//! gathers them all and dispatches on them. Models never change
//! while shading, so they can be shared by every thread in a render.

use crate::error::{check_range, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// The fraction of light transmitted (or reflected) by surfaces
/// that do not specify anything else
pub const DEFAULT_TRANSMISSION_COEFFICIENT: Float = 0.96;

/// Writes `get_*` and `set_*` methods for plain (`Copy`) parameters
/// that need no validation
macro_rules! accessors {
    ($($field:ident: $ty:ty => $get:ident, $set:ident;)*) => {
        $(
            #[doc = concat!("Gets `", stringify!($field), "`")]
            pub fn $get(&self) -> $ty {
                self.$field
            }

            #[doc = concat!("Sets `", stringify!($field), "`")]
            pub fn $set(&mut self, $field: $ty) {
                self.$field = $field;
            }
        )*
    };
}

/// Writes `get_transmission_coefficient` and a validating
/// `set_transmission_coefficient`
macro_rules! coefficient_accessors {
    () => {
        /// Gets the transmission coefficient
        pub fn get_transmission_coefficient(&self) -> Float {
            self.transmission_coefficient
        }

        /// Sets the transmission coefficient, which must be in `[0,1]`
        pub fn set_transmission_coefficient(
            &mut self,
            transmission_coefficient: Float,
        ) -> Result<(), crate::error::ConfigError> {
            self.transmission_coefficient = crate::error::check_range(
                "transmission_coefficient",
                transmission_coefficient,
                0.,
                1.,
            )?;
            Ok(())
        }
    };
}

/// Writes `get_pixel_diffraction` and a validating `set_pixel_diffraction`
macro_rules! pixel_diffraction_accessors {
    () => {
        pub fn get_pixel_diffraction(&self) -> PixelDiffraction {
            self.pixel_diffraction
        }

        /// Sets the diffraction approximations, checking their parameters
        pub fn set_pixel_diffraction(
            &mut self,
            pixel_diffraction: PixelDiffraction,
        ) -> Result<(), crate::error::ConfigError> {
            pixel_diffraction.validate()?;
            self.pixel_diffraction = pixel_diffraction;
            Ok(())
        }
    };
}

mod surface_trait;
pub use surface_trait::SurfaceTrait;

mod outcome;
pub use outcome::TransportOutcome;

pub mod basis;
pub use basis::BasisKind;
pub mod optics;
mod pixel_diffraction;
pub use pixel_diffraction::{DiffractionKernel, PixelDiffraction};

mod colour;
pub use colour::Colour;
mod glowing_colour;
pub use glowing_colour::GlowingColour;
mod colour_filter;
pub use colour_filter::ColourFilter;
mod transparent;
pub use transparent::Transparent;
mod reflective;
pub use reflective::Reflective;
mod beam_splitter;
pub use beam_splitter::BeamSplitter;
mod phase_conjugating;
pub use phase_conjugating::PhaseConjugating;
mod refractive;
pub use refractive::Refractive;
mod refractive_complex;
pub use refractive_complex::{NonPhysicalPolicy, RefractiveComplex};
mod metric_interface;
pub use metric_interface::{MetricInterface, RefractionType};
mod lorentz_transform_interface;
pub use lorentz_transform_interface::LorentzTransformInterface;
mod galileo_transform_interface;
pub use galileo_transform_interface::GalileoTransformInterface;
mod ideal_thin_lens;
pub use ideal_thin_lens::IdealThinLensSurface;
mod glens;
pub use glens::GlensSurface;
mod confocal_lenslet_arrays;
pub use confocal_lenslet_arrays::ConfocalLensletArrays;
mod gclas;
pub use gclas::{GeneralisedConfocalLensletArrays, TransmissionCoefficientMethod};
mod rectangular_lenslet_array;
pub use rectangular_lenslet_array::RectangularLensletArray;
mod lenticular_array;
pub use lenticular_array::LenticularArray;
mod cylindrical_lens_hologram;
pub use cylindrical_lens_hologram::PhaseHologramOfCylindricalLens;
mod radial_lenticular_hologram;
pub use radial_lenticular_hologram::PhaseHologramOfRadialLenticularArray;
mod rotationally_symmetric_hologram;
pub use rotationally_symmetric_hologram::RotationallySymmetricPhaseHologram;
mod azimuthal_hologram;
pub use azimuthal_hologram::AzimuthalPhaseHologram;
mod alvarez_lens;
pub use alvarez_lens::AlvarezLensSurface;
mod point_to_point_imaging;
pub use point_to_point_imaging::Point2PointImaging;
mod ray_rotating;
pub use ray_rotating::RayRotating;
mod ray_rotating_about_axis;
pub use ray_rotating_about_axis::RayRotatingAboutArbitraryAxisDirection;
mod ray_flipping;
pub use ray_flipping::RayFlipping;
mod pixellation;
pub use pixellation::Pixellation;
mod teleporting;
pub use teleporting::{TeleportationType, Teleporting};
mod rainbow;
pub use rainbow::Rainbow;
mod tiling;
pub use tiling::Tiling;
mod two_sided;
pub use two_sided::TwoSided;

/// All the surface models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceModel {
    Colour(Colour),
    GlowingColour(GlowingColour),
    ColourFilter(ColourFilter),
    Transparent(Transparent),
    Reflective(Reflective),
    BeamSplitter(BeamSplitter),
    PhaseConjugating(PhaseConjugating),
    Refractive(Refractive),
    RefractiveComplex(RefractiveComplex),
    MetricInterface(MetricInterface),
    LorentzTransformInterface(LorentzTransformInterface),
    GalileoTransformInterface(GalileoTransformInterface),
    IdealThinLensSurface(IdealThinLensSurface),
    GlensSurface(GlensSurface),
    ConfocalLensletArrays(ConfocalLensletArrays),
    GeneralisedConfocalLensletArrays(GeneralisedConfocalLensletArrays),
    RectangularLensletArray(RectangularLensletArray),
    LenticularArray(LenticularArray),
    PhaseHologramOfCylindricalLens(PhaseHologramOfCylindricalLens),
    PhaseHologramOfRadialLenticularArray(PhaseHologramOfRadialLenticularArray),
    RotationallySymmetricPhaseHologram(RotationallySymmetricPhaseHologram),
    AzimuthalPhaseHologram(AzimuthalPhaseHologram),
    AlvarezLensSurface(AlvarezLensSurface),
    Point2PointImaging(Point2PointImaging),
    RayRotating(RayRotating),
    RayRotatingAboutArbitraryAxisDirection(RayRotatingAboutArbitraryAxisDirection),
    RayFlipping(RayFlipping),
    Pixellation(Pixellation),
    Teleporting(Teleporting),
    Rainbow(Rainbow),
    Tiling(Tiling),
    TwoSided(TwoSided),
}

/// Calls the same expression on whatever model is inside a [`SurfaceModel`]
macro_rules! dispatch {
    ($self:ident, $m:ident => $e:expr) => {
        match $self {
            SurfaceModel::Colour($m) => $e,
            SurfaceModel::GlowingColour($m) => $e,
            SurfaceModel::ColourFilter($m) => $e,
            SurfaceModel::Transparent($m) => $e,
            SurfaceModel::Reflective($m) => $e,
            SurfaceModel::BeamSplitter($m) => $e,
            SurfaceModel::PhaseConjugating($m) => $e,
            SurfaceModel::Refractive($m) => $e,
            SurfaceModel::RefractiveComplex($m) => $e,
            SurfaceModel::MetricInterface($m) => $e,
            SurfaceModel::LorentzTransformInterface($m) => $e,
            SurfaceModel::GalileoTransformInterface($m) => $e,
            SurfaceModel::IdealThinLensSurface($m) => $e,
            SurfaceModel::GlensSurface($m) => $e,
            SurfaceModel::ConfocalLensletArrays($m) => $e,
            SurfaceModel::GeneralisedConfocalLensletArrays($m) => $e,
            SurfaceModel::RectangularLensletArray($m) => $e,
            SurfaceModel::LenticularArray($m) => $e,
            SurfaceModel::PhaseHologramOfCylindricalLens($m) => $e,
            SurfaceModel::PhaseHologramOfRadialLenticularArray($m) => $e,
            SurfaceModel::RotationallySymmetricPhaseHologram($m) => $e,
            SurfaceModel::AzimuthalPhaseHologram($m) => $e,
            SurfaceModel::AlvarezLensSurface($m) => $e,
            SurfaceModel::Point2PointImaging($m) => $e,
            SurfaceModel::RayRotating($m) => $e,
            SurfaceModel::RayRotatingAboutArbitraryAxisDirection($m) => $e,
            SurfaceModel::RayFlipping($m) => $e,
            SurfaceModel::Pixellation($m) => $e,
            SurfaceModel::Teleporting($m) => $e,
            SurfaceModel::Rainbow($m) => $e,
            SurfaceModel::Tiling($m) => $e,
            SurfaceModel::TwoSided($m) => $e,
        }
    };
}

impl SurfaceModel {
    /// Returns an id, for debugging and error reporting purposes
    pub fn id(&self) -> &'static str {
        dispatch!(self, m => m.id())
    }

    /// Decides what happens to `incident` after hitting a surface
    /// with this model at `hit`.
    pub fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        ctx: &TraceContext,
        scene: &Scene,
        rng: &mut RandGen,
    ) -> TransportOutcome {
        dispatch!(self, m => m.shade(incident, hit, ctx, scene, rng))
    }

    /// Can users decide whether this surface throws shadows?
    pub fn has_shadow_control(&self) -> bool {
        dispatch!(self, m => m.has_shadow_control())
    }

    /// Does this surface block light travelling towards other surfaces?
    pub fn is_shadow_throwing(&self) -> bool {
        dispatch!(self, m => m.is_shadow_throwing())
    }

    /// Like [`SurfaceModel::is_shadow_throwing`], but resolving composite
    /// models at the point that was hit
    pub fn throws_shadow_at(&self, hit: &Interaction) -> bool {
        match self {
            Self::Tiling(m) => m.select(hit).throws_shadow_at(hit),
            Self::TwoSided(m) => m.select(hit).throws_shadow_at(hit),
            _ => self.is_shadow_throwing(),
        }
    }

    /// The transmission (or reflection) coefficient, for the models
    /// that have one
    pub fn transmission_coefficient(&self) -> Option<Float> {
        dispatch!(self, m => m.transmission_coefficient())
    }

    /// Checks the parameters of the model. Models built through their
    /// constructors and setters always pass; models read from a file
    /// (e.g., as part of a [`Scene`]) may not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(t) = self.transmission_coefficient() {
            check_range("transmission_coefficient", t, 0., 1.)?;
        }
        dispatch!(self, m => m.validate())
    }
}

/// Wraps every model into a [`SurfaceModel`]
macro_rules! impl_from {
    ($($name:ident),*) => {
        $(
            impl From<$name> for SurfaceModel {
                fn from(m: $name) -> Self {
                    Self::$name(m)
                }
            }
        )*
    };
}

impl_from!(
    Colour,
    GlowingColour,
    ColourFilter,
    Transparent,
    Reflective,
    BeamSplitter,
    PhaseConjugating,
    Refractive,
    RefractiveComplex,
    MetricInterface,
    LorentzTransformInterface,
    GalileoTransformInterface,
    IdealThinLensSurface,
    GlensSurface,
    ConfocalLensletArrays,
    GeneralisedConfocalLensletArrays,
    RectangularLensletArray,
    LenticularArray,
    PhaseHologramOfCylindricalLens,
    PhaseHologramOfRadialLenticularArray,
    RotationallySymmetricPhaseHologram,
    AzimuthalPhaseHologram,
    AlvarezLensSurface,
    Point2PointImaging,
    RayRotating,
    RayRotatingAboutArbitraryAxisDirection,
    RayFlipping,
    Pixellation,
    Teleporting,
    Rainbow,
    Tiling,
    TwoSided
);


#[cfg(test)]
mod tests {
    use super::test_utils::flat_hit;
    use super::*;
    use crate::colour::Spectrum;
    use crate::complex::Complex;
    use crate::error::ConfigError;
    use crate::rand::get_seeded_rng;
    use crate::scene::ObjectId;
    use geometry::{Matrix3, Parallelogram3D, Point3D, Vector3D};

    /// One model of every kind, with stochastic approximations switched on
    fn every_model() -> Result<Vec<SurfaceModel>, ConfigError> {
        let origin = Point3D::new(0., 0., 0.);
        let x = Vector3D::new(1., 0., 0.);
        let z = Vector3D::new(0., 0., 1.);
        let diffraction = PixelDiffraction::new(550e-9, 1e-3, 1e-3)?;

        let mut lenslets = RectangularLensletArray::new(0.5, 0.5, 1.)?;
        lenslets.set_pixel_diffraction(diffraction)?;
        let mut lenticular = LenticularArray::new(0.4, 1.)?;
        lenticular.set_pixel_diffraction(diffraction)?;
        let mut gclas = GeneralisedConfocalLensletArrays::new(0.8, -1., 0.1, 0., x)?;
        gclas.set_transmission_coefficient_method(TransmissionCoefficientMethod::Geometric);
        gclas.set_pixel_diffraction(diffraction)?;
        let mut azimuthal = AzimuthalPhaseHologram::new(origin, 0.05);
        azimuthal.set_pixel_diffraction(diffraction)?;
        let mut complex = RefractiveComplex::new(Complex::new(1.5, 0.2), 0.9)?;
        complex.set_non_physical_policy(NonPhysicalPolicy::Reflect);

        let models: Vec<SurfaceModel> = vec![
            Colour::matt(Spectrum::RED).into(),
            GlowingColour::new(Spectrum::WHITE).into(),
            ColourFilter::new(Spectrum::new(1., 0.5, 0.))?.into(),
            Transparent::default().into(),
            Reflective::default().into(),
            BeamSplitter::new(0.3, 0.6)?.into(),
            PhaseConjugating::default().into(),
            Refractive::glass().into(),
            complex.into(),
            MetricInterface::new(Matrix3::identity(), Matrix3::diagonal(2., 1., 3.))?.into(),
            LorentzTransformInterface::new(Vector3D::new(0.3, 0., 0.2), BasisKind::Global)?.into(),
            GalileoTransformInterface::new(Vector3D::new(0., 0.4, 0.), BasisKind::Local)?.into(),
            IdealThinLensSurface::new(origin, z, 2.)?.into(),
            GlensSurface::new(origin, z, -1., 3.)?.into(),
            ConfocalLensletArrays::new(-0.5)?.into(),
            gclas.into(),
            lenslets.into(),
            lenticular.into(),
            PhaseHologramOfCylindricalLens::new(origin, x, 4.)?.into(),
            PhaseHologramOfRadialLenticularArray::new(origin, 2., 6)?.into(),
            RotationallySymmetricPhaseHologram::new(origin, 0.1, 2.).into(),
            azimuthal.into(),
            AlvarezLensSurface::new(origin, x, 0.5)?.into(),
            Point2PointImaging::new(Point3D::new(0., 0., 5.), Point3D::new(0., 0., -5.)).into(),
            RayRotating::new(0.3).into(),
            RayRotatingAboutArbitraryAxisDirection::new(0.5, x, BasisKind::Local)?.into(),
            RayFlipping::new(0.2).into(),
            Pixellation::new(550e-9, 1e-4)?.into(),
            Teleporting::new(ObjectId(0), TeleportationType::Perfect).into(),
            Rainbow::new(1., 0.5, Point3D::new(0., 0., 10.))?.into(),
            Tiling::new(Reflective::default().into(), BeamSplitter::new(0.5, 0.5)?.into(), 1., 1.)?.into(),
            TwoSided::new(
                Refractive::glass().into(),
                ColourFilter::new(Spectrum::gray(0.5))?.into(),
            )
            .into(),
        ];
        Ok(models)
    }

    /// A scene where teleported rays have somewhere to go
    fn scene() -> Result<Scene, String> {
        let mut scene = Scene::new();
        let exit = Parallelogram3D::new(
            Point3D::new(10., 0., 0.),
            Vector3D::new(0., 1., 0.),
            Vector3D::new(0., 0., 1.),
        )?;
        scene.push_object("exit", exit, GlowingColour::new(Spectrum::WHITE).into());
        Ok(scene)
    }

    fn directions() -> Vec<Vector3D> {
        let mut ret = Vec::new();
        for dz in [-1., 1.] {
            ret.push(Vector3D::new(0., 0., dz));
            ret.push(Vector3D::new(0.3, -0.2, dz));
            ret.push(Vector3D::new(-2., 0.5, dz));
            ret.push(Vector3D::new(0.05, 3., dz));
        }
        ret
    }

    #[test]
    fn test_every_variant_is_covered() -> Result<(), String> {
        let models = every_model().map_err(|e| e.to_string())?;
        let mut ids: Vec<&str> = models.iter().map(|m| m.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        for m in &models {
            assert!(m.validate().is_ok(), "{} should be valid", m.id());
        }
        Ok(())
    }

    #[test]
    fn test_energy_upper_bound() -> Result<(), String> {
        let scene = scene()?;
        let ctx = TraceContext::new(10);
        for model in every_model().map_err(|e| e.to_string())? {
            for (u, v) in [(0.3, -0.2), (1.7, 0.45), (-0.9, 2.1)] {
                for d in directions() {
                    let (ray, hit) = flat_hit(u, v, d);
                    let mut rng = get_seeded_rng(7);
                    let outcome = model.shade(&ray, &hit, &ctx, &scene, &mut rng);
                    let w = outcome.total_weight();
                    assert!(
                        (0. ..=1. + 1e-12).contains(&w),
                        "{} gives a weight of {} for {} at ({}, {})",
                        model.id(),
                        w,
                        d,
                        u,
                        v
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_shading_is_idempotent() -> Result<(), String> {
        let scene = scene()?;
        let ctx = TraceContext::new(10);
        for model in every_model().map_err(|e| e.to_string())? {
            for d in directions() {
                let (ray, hit) = flat_hit(0.3, -0.2, d);
                let first = model.shade(&ray, &hit, &ctx, &scene, &mut get_seeded_rng(11));
                let second = model.shade(&ray, &hit, &ctx, &scene, &mut get_seeded_rng(11));
                assert_eq!(first, second, "{} is not idempotent for {}", model.id(), d);
            }
        }
        Ok(())
    }

    #[test]
    fn test_deserialised_models_are_validated() -> Result<(), String> {
        let model: SurfaceModel = Reflective::new(0.5, true).map_err(|e| e.to_string())?.into();
        let json = serde_json::to_string(&model).map_err(|e| e.to_string())?;
        let edited: SurfaceModel = serde_json::from_str(&json.replace("0.5", "2.5")).map_err(|e| e.to_string())?;
        assert!(matches!(edited.validate(), Err(ConfigError::OutOfRange { .. })));

        // Nested models are checked too
        let tiles: SurfaceModel = Tiling::new(model.clone(), GlowingColour::new(Spectrum::WHITE).into(), 1., 1.)
            .map_err(|e| e.to_string())?
            .into();
        let json = serde_json::to_string(&tiles).map_err(|e| e.to_string())?;
        let edited: SurfaceModel = serde_json::from_str(&json.replace("0.5", "2.5")).map_err(|e| e.to_string())?;
        assert!(edited.validate().is_err());

        // And so are the parameters of the models themselves
        let lens: SurfaceModel = IdealThinLensSurface::new(Point3D::new(0., 0., 0.), Vector3D::new(0., 0., 1.), 2.)
            .map_err(|e| e.to_string())?
            .into();
        let json = serde_json::to_string(&lens).map_err(|e| e.to_string())?;
        let edited: SurfaceModel = serde_json::from_str(&json.replace("\"focal_length\":2.0", "\"focal_length\":0.0"))
            .map_err(|e| e.to_string())?;
        assert_eq!(edited.validate(), Err(ConfigError::ZeroFocalLength));
        Ok(())
    }
}
