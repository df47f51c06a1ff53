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

use crate::camera::{Film, Pinhole, View};
use crate::colour::Spectrum;
use crate::error::{check_positive, ConfigError};
use crate::image::ImageBuffer;
use crate::Float;
use serde::{Deserialize, Serialize};

/// How the images seen by each eye are put together
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StereoMode {
    /// Red/cyan anaglyph made of grey levels. The left eye goes to red.
    #[default]
    Anaglyph,

    /// Red/cyan anaglyph keeping (some of) the colours
    ColourAnaglyph,

    /// Left and right images next to each other
    SideBySide,
}

impl StereoMode {
    /// Combines the images seen by the left and right eyes
    pub fn combine(&self, left: &ImageBuffer, right: &ImageBuffer) -> Result<ImageBuffer, ConfigError> {
        if (left.width, left.height) != (right.width, right.height) {
            return Err(ConfigError::Geometry(format!(
                "Cannot combine a {}x{} image with a {}x{} one",
                left.width, left.height, right.width, right.height
            )));
        }
        let (width, height) = (left.width, left.height);
        let pixels: Vec<Spectrum> = match self {
            Self::Anaglyph => left
                .pixels
                .iter()
                .zip(right.pixels.iter())
                .map(|(l, r)| {
                    let r = r.luminance();
                    Spectrum::new(l.luminance(), r, r)
                })
                .collect(),
            Self::ColourAnaglyph => left
                .pixels
                .iter()
                .zip(right.pixels.iter())
                .map(|(l, r)| Spectrum::new(l.red(), r.green(), r.blue()))
                .collect(),
            Self::SideBySide => {
                let mut pixels = Vec::with_capacity(2 * width * height);
                for row in 0..height {
                    let range = row * width..(row + 1) * width;
                    pixels.extend_from_slice(&left.pixels[range.clone()]);
                    pixels.extend_from_slice(&right.pixels[range]);
                }
                return Ok(ImageBuffer::from_pixels(2 * width, height, pixels)?);
            }
        };
        Ok(ImageBuffer::from_pixels(width, height, pixels)?)
    }
}

/// A pair of pinhole cameras, one per eye
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stereo {
    pub left: Pinhole,
    pub right: Pinhole,
    pub mode: StereoMode,
}

impl Stereo {
    /// Two parallel cameras, separated by `eye_separation` along the
    /// view's right direction and centred at its view point
    pub fn new(view: View, film: Film, eye_separation: Float, mode: StereoMode) -> Result<Self, ConfigError> {
        let eye_separation = check_positive("eye_separation", eye_separation)?;
        let view = view.orthonormalized()?;
        let half = view.view_right() * (eye_separation / 2.);
        let left = View {
            view_point: view.view_point - half,
            ..view
        };
        let right = View {
            view_point: view.view_point + half,
            ..view
        };
        Ok(Self {
            left: Pinhole::new(left, film)?,
            right: Pinhole::new(right, film)?,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use geometry::Point3D;

    fn images() -> Result<(ImageBuffer, ImageBuffer), String> {
        let left = ImageBuffer::from_pixels(2, 1, vec![Spectrum::WHITE, Spectrum::RED])?;
        let right = ImageBuffer::from_pixels(2, 1, vec![Spectrum::BLACK, Spectrum::BLUE])?;
        Ok((left, right))
    }

    #[test]
    fn test_anaglyph() -> Result<(), String> {
        let (left, right) = images()?;
        let found = StereoMode::Anaglyph
            .combine(&left, &right)
            .map_err(|e| e.to_string())?;
        assert!((found.pixels[0].red() - Spectrum::WHITE.luminance()).abs() < 1e-9);
        assert_eq!(found.pixels[0].green(), 0.);

        let found = StereoMode::ColourAnaglyph
            .combine(&left, &right)
            .map_err(|e| e.to_string())?;
        assert_eq!(found.pixels[1], Spectrum::new(1., 0., 1.));
        Ok(())
    }

    #[test]
    fn test_side_by_side() -> Result<(), String> {
        let (left, right) = images()?;
        let found = StereoMode::SideBySide
            .combine(&left, &right)
            .map_err(|e| e.to_string())?;
        assert_eq!((found.width, found.height), (4, 1));
        assert_eq!(found.pixels[0], Spectrum::WHITE);
        assert_eq!(found.pixels[3], Spectrum::BLUE);

        assert!(StereoMode::SideBySide
            .combine(&left, &ImageBuffer::new(1, 1))
            .is_err());
        Ok(())
    }

    #[test]
    fn test_eyes() -> Result<(), String> {
        let film = Film {
            resolution: (4, 4),
        };
        let stereo = Stereo::new(View::default(), film, 0.2, StereoMode::SideBySide)
            .map_err(|e| e.to_string())?;
        // Default view looks along +y with +z up, so right is +x
        assert!(stereo.left.view().view_point.compare(Point3D::new(-0.1, 0., 0.)));
        assert!(stereo.right.view().view_point.compare(Point3D::new(0.1, 0., 0.)));
        assert!(Stereo::new(View::default(), film, 0., StereoMode::Anaglyph).is_err());
        Ok(())
    }
}
