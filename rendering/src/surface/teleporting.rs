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

use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::{ObjectId, Scene};
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::intersection::ParametrisedSurface;
use serde::{Deserialize, Serialize};

/// How the direction of a teleported ray is calculated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeleportationType {
    /// The components of the direction in the local `(u, v, n)` frame are
    /// kept, except that the normal component is reversed: rays entering
    /// the origin surface leave the destination surface.
    #[default]
    Perfect,

    /// The direction, in world coordinates, does not change
    DirectionPreserving,

    /// Like `Perfect`, but the tangential components are also reversed
    Flipped,
}

/// Rays hitting this surface at `(u, v)` continue from the point with the
/// same surface coordinates on the `destination` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teleporting {
    destination: ObjectId,
    teleportation_type: TeleportationType,
    transmission_coefficient: Float,
}

impl Teleporting {
    pub fn new(destination: ObjectId, teleportation_type: TeleportationType) -> Self {
        Self {
            destination,
            teleportation_type,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
        }
    }

    coefficient_accessors!();

    accessors! {
        destination: ObjectId => get_destination, set_destination;
        teleportation_type: TeleportationType => get_teleportation_type, set_teleportation_type;
    }
}

impl SurfaceTrait for Teleporting {
    fn id(&self) -> &'static str {
        "Teleporting"
    }

    fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        _ctx: &TraceContext,
        scene: &Scene,
        _rng: &mut RandGen,
    ) -> TransportOutcome {
        let destination = match scene.object(self.destination) {
            Some(o) => &o.primitive,
            None => {
                log::debug!("Teleporting: destination {} does not exist", self.destination);
                return TransportOutcome::Absorbed;
            }
        };
        let (u, v) = (hit.u(), hit.v());
        let point = destination.point_at(u, v);
        let (n, du, dv) = destination.frame_at(u, v);

        let d = incident.direction();
        let local = hit.to_local(d);
        let direction = match self.teleportation_type {
            TeleportationType::Perfect => du * local.x + dv * local.y - n * local.z,
            TeleportationType::DirectionPreserving => d,
            TeleportationType::Flipped => du * -local.x + dv * -local.y - n * local.z,
        };
        if direction.is_zero() {
            return TransportOutcome::Absorbed;
        }
        let mut ray = incident.continued(hit.point(), direction);
        ray.geometry.origin = point;
        TransportOutcome::Continue(ray, self.transmission_coefficient)
    }

    fn transmission_coefficient(&self) -> Option<Float> {
        Some(self.transmission_coefficient)
    }
}
