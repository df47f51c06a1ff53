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
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::lights::Light;
use crate::primitive::Primitive;
use crate::surface::SurfaceModel;
use crate::Float;
use geometry::Ray3D;
use serde::{Deserialize, Serialize};

/// A handle to an object in a [`Scene`]. Handles stay valid (and
/// are never reused) when other objects are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub usize);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A [`Primitive`] with a [`SurfaceModel`] attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    /// A name, for debugging
    pub name: String,

    /// The shape
    pub primitive: Primitive,

    /// What happens to the rays that hit it
    pub surface: SurfaceModel,
}

/// The scene: objects, light sources and a background.
///
/// It is not modified during a render.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Slots with the objects. Removed objects leave a `None`.
    objects: Vec<Option<Object>>,

    /// The light sources
    pub lights: Vec<Light>,

    /// The colour of rays that escape the scene. If `None`, the
    /// [`crate::RayTracer`]'s background is used.
    pub background: Option<Spectrum>,
}

impl Scene {
    /// Creates an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object, returning its handle
    pub fn push_object<P: Into<Primitive>>(
        &mut self,
        name: &str,
        primitive: P,
        surface: SurfaceModel,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(Some(Object {
            name: name.to_string(),
            primitive: primitive.into(),
            surface,
        }));
        id
    }

    /// Removes an object. Its handle becomes dangling; any other
    /// handle remains valid.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<Object> {
        self.objects.get_mut(id.0).and_then(|slot| slot.take())
    }

    /// Borrows an object, if it exists
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0).and_then(|o| o.as_ref())
    }

    /// Borrows an object mutably, if it exists
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id.0).and_then(|o| o.as_mut())
    }

    /// Finds the first object with a certain name
    pub fn find_object(&self, name: &str) -> Option<ObjectId> {
        self.objects().find(|(_, o)| o.name == name).map(|(id, _)| id)
    }

    /// Iterates over the objects that have not been removed
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.as_ref().map(|o| (ObjectId(i), o)))
    }

    /// The number of objects (not counting removed ones)
    pub fn n_objects(&self) -> usize {
        self.objects().count()
    }

    /// Checks the surface model of every object. Scenes assembled
    /// through the models' constructors always pass; scenes read
    /// from a file may not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (id, o) in self.objects() {
            if let Err(e) = o.surface.validate() {
                log::error!("Object {} ('{}') has an invalid {}: {}", id, o.name, o.surface.id(), e);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Adds a light source
    pub fn push_light(&mut self, light: Light) {
        self.lights.push(light)
    }

    /// Finds the nearest intersection between a ray and the scene
    pub fn cast_ray(&self, ray: &Ray3D) -> Option<Interaction> {
        self.cast_ray_within(ray, Float::MAX)
    }

    /// Finds the nearest intersection closer than `max_t`
    pub fn cast_ray_within(&self, ray: &Ray3D, max_t: Float) -> Option<Interaction> {
        let mut ret: Option<Interaction> = None;
        let mut closest = max_t;
        for (object, o) in self.objects() {
            if let Some(info) = o.primitive.intersect(ray) {
                if info.t < closest {
                    closest = info.t;
                    ret = Some(Interaction { info, object });
                }
            }
        }
        ret
    }
}
