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

use crate::interaction::Interaction;
use geometry::intersection::tangent_frame;
use geometry::{Matrix3, Vector3D};
use serde::{Deserialize, Serialize};

/// The basis in which a vector or tensor parameter is given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasisKind {
    /// Scene (world) coordinates
    #[default]
    Global,

    /// The `(u, v, normal)` frame of the surface at the point that was hit
    Local,
}

/// An orthonormal frame at a surface point. `n` is the outward normal.
#[derive(Debug, Clone, Copy)]
pub struct LocalFrame {
    pub u: Vector3D,
    pub v: Vector3D,
    pub n: Vector3D,
}

impl LocalFrame {
    /// The frame built from the surface's own `dpdu`
    pub fn from_interaction(hit: &Interaction) -> Self {
        Self::aligned(hit, hit.info.dpdu)
    }

    /// A frame at `hit` whose `u` axis follows the in-plane part of `u_direction`.
    pub fn aligned(hit: &Interaction, u_direction: Vector3D) -> Self {
        let n = hit.normal();
        let (u, v) = tangent_frame(n, u_direction);
        Self { u, v, n }
    }

    /// Components of `w` in this frame
    pub fn to_local(&self, w: Vector3D) -> Vector3D {
        Vector3D::new(w * self.u, w * self.v, w * self.n)
    }

    /// World vector with components `w` in this frame
    pub fn to_world(&self, w: Vector3D) -> Vector3D {
        self.u * w.x + self.v * w.y + self.n * w.z
    }

    /// The matrix whose columns are `u`, `v` and `n`
    pub fn matrix(&self) -> Matrix3 {
        Matrix3::from_columns(self.u, self.v, self.n)
    }
}

impl BasisKind {
    /// Takes a vector parameter into world coordinates
    pub fn vector_to_world(&self, w: Vector3D, frame: &LocalFrame) -> Vector3D {
        match self {
            Self::Global => w,
            Self::Local => frame.to_world(w),
        }
    }

    /// Takes a (bilinear form) tensor parameter into world coordinates
    pub fn tensor_to_world(&self, m: &Matrix3, frame: &LocalFrame) -> Matrix3 {
        match self {
            Self::Global => *m,
            Self::Local => {
                let b = frame.matrix();
                b * *m * b.transpose()
            }
        }
    }
}
