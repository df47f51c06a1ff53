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

use crate::error::ConfigError;
use crate::Float;
use geometry::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct View {
    /// The point of view
    pub view_point: Point3D,
    /// The view direction
    pub view_direction: Vector3D,
    /// The "up", according to the camera
    pub view_up: Vector3D,
    /// Horizontal angle of the Field of View (i.e., frustum) in degrees
    pub field_of_view: Float,
}

impl Default for View {
    fn default() -> Self {
        Self {
            view_point: Point3D::new(0., 0., 0.),
            view_direction: Vector3D::new(0., 1., 0.),
            view_up: Vector3D::new(0., 0., 1.),
            field_of_view: 60.,
        }
    }
}

impl View {
    /// Returns a copy of this view in which the view direction and
    /// view up are unit vectors, orthogonal to each other.
    ///
    /// Fails if either of them has zero length, if they are parallel,
    /// or if the field of view is not within `(0, 180)` degrees.
    pub fn orthonormalized(&self) -> Result<Self, ConfigError> {
        if self.view_direction.is_zero() {
            return Err(ConfigError::ZeroLengthVector("view_direction"));
        }
        let view_direction = self.view_direction.get_normalized();
        let view_up = self.view_up.tangential_part(view_direction);
        if view_up.is_zero() {
            return Err(ConfigError::ZeroLengthVector("view_up"));
        }
        if !(self.field_of_view > 0. && self.field_of_view < 180.) {
            return Err(ConfigError::OutOfRange {
                name: "field_of_view",
                value: self.field_of_view,
                min: 0.,
                max: 180.,
            });
        }
        Ok(Self {
            view_direction,
            view_up: view_up.get_normalized(),
            ..*self
        })
    }

    /// `view_direction x view_up`, normalized
    pub fn view_right(&self) -> Vector3D {
        self.view_direction.cross(self.view_up).get_normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthonormalized() -> Result<(), String> {
        let view = View {
            view_direction: Vector3D::new(0., 2., 0.),
            view_up: Vector3D::new(0., 1., 1.),
            ..View::default()
        };
        let view = view.orthonormalized().map_err(|e| e.to_string())?;
        assert!(view.view_direction.compare(Vector3D::new(0., 1., 0.)));
        assert!(view.view_up.compare(Vector3D::new(0., 0., 1.)));
        assert!(view.view_right().compare(Vector3D::new(1., 0., 0.)));
        Ok(())
    }

    #[test]
    fn test_bad_views() {
        let parallel = View {
            view_up: Vector3D::new(0., 3., 0.),
            ..View::default()
        };
        assert_eq!(
            parallel.orthonormalized().err(),
            Some(ConfigError::ZeroLengthVector("view_up"))
        );

        let wide = View {
            field_of_view: 180.,
            ..View::default()
        };
        assert!(wide.orthonormalized().is_err());
    }
}
