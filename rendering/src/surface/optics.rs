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

//! Direction-changing laws shared by several surface models

use super::TransportOutcome;
use crate::interaction::Interaction;
use crate::ray::Ray;
use crate::Float;
use geometry::Vector3D;

/// Calculates the purely specular reflection direction.
pub fn mirror_direction(vin: Vector3D, normal: Vector3D) -> Vector3D {
    let vin_normal = vin * normal;
    (vin - normal * (2. * vin_normal)).get_normalized()
}

/// Replaces the tangential part of `d` (with respect to `normal`) by
/// `d_t + delta` and recalculates the normal component so that the
/// result is normalized. The normal component keeps its sign.
///
/// Returns `None` if the new tangential part is longer than one
/// (i.e., the wave is evanescent).
pub fn apply_tangential_change(d: Vector3D, normal: Vector3D, delta: Vector3D) -> Option<Vector3D> {
    let dn = d * normal;
    let dt = d - normal * dn + delta.tangential_part(normal);
    let dt2 = dt.length_squared();
    if dt2 > 1. || dt2.is_nan() {
        return None;
    }
    let sign = if dn < 0. { -1. } else { 1. };
    Some(dt + normal * (sign * (1. - dt2).sqrt()))
}

/// Like [`apply_tangential_change`], but the tangential part is scaled
/// instead of shifted
pub fn scale_tangential(d: Vector3D, normal: Vector3D, factor: Float) -> Option<Vector3D> {
    let dt = d.tangential_part(normal);
    apply_tangential_change(d, normal, dt * (factor - 1.))
}

/// The ideal thin lens: a ray with direction `d` crossing the lens plane at a
/// transverse position `x` (relative to the principal point, perpendicular
/// to `axis`) leaves with its slope reduced by `x/f`.
///
/// Slopes are measured relative to the axis in the direction of travel, so the
/// law works for rays going either way. Returns `None` for rays travelling
/// parallel to the lens.
pub fn lens_law(d: Vector3D, axis: Vector3D, x: Vector3D, focal_length: Float) -> Option<Vector3D> {
    let axis = axis.get_normalized();
    let da = d * axis;
    if da.abs() < 1e-12 {
        return None;
    }
    let forward = if da > 0. { axis } else { axis * -1. };
    let slope = (d - axis * da) / da.abs();
    let new_slope = slope - x.tangential_part(axis) / focal_length;
    Some((new_slope + forward).get_normalized())
}

/// Aberration of light: the direction of propagation `l`, as seen in a
/// frame moving with velocity `beta` (in units of c).
///
/// Returns `None` if `|beta| >= 1`.
pub fn lorentz_aberration(l: Vector3D, beta: Vector3D) -> Option<Vector3D> {
    let b2 = beta.length_squared();
    if b2 >= 1. {
        return None;
    }
    if b2 < 1e-24 {
        return Some(l);
    }
    let b = b2.sqrt();
    let bhat = beta / b;
    let gamma = 1. / (1. - b2).sqrt();
    let l_par = l * bhat;
    let l_perp = l - bhat * l_par;
    let denominator = gamma * (1. - beta * l);
    Some(((l_perp + bhat * (gamma * (l_par - b))) / denominator).get_normalized())
}

/// Relativistic velocity addition: the velocity (in units of c) of a
/// frame moving with `v` relative to a frame that itself moves with `u`.
/// Not commutative when `u` and `v` are not parallel.
///
/// Returns `None` if `|u| >= 1`.
pub fn add_velocities(u: Vector3D, v: Vector3D) -> Option<Vector3D> {
    let u2 = u.length_squared();
    if u2 >= 1. {
        return None;
    }
    let gamma = 1. / (1. - u2).sqrt();
    let uv = u * v;
    Some((u + v / gamma + u * (uv * gamma / (1. + gamma))) / (1. + uv))
}

/// Galilean version of [`lorentz_aberration`]: the light's velocity minus
/// the frame's. Returns `None` if the light appears to be at rest.
pub fn galilean_aberration(l: Vector3D, beta: Vector3D) -> Option<Vector3D> {
    let v = l - beta;
    if v.is_zero() {
        None
    } else {
        Some(v.get_normalized())
    }
}

/// Shared by the phase holograms: the tangential direction changes by `delta`;
/// evanescent waves are reflected.
pub fn hologram_outcome(
    id: &str,
    incident: &Ray,
    hit: &Interaction,
    delta: Vector3D,
    weight: Float,
) -> TransportOutcome {
    let d = incident.direction();
    let n = hit.normal();
    let direction = match apply_tangential_change(d, n, delta) {
        Some(direction) => direction,
        None => {
            log::debug!("{}: evanescent wave at {}, reflecting", id, hit.point());
            mirror_direction(d, n)
        }
    };
    TransportOutcome::Continue(incident.continued(hit.point(), direction), weight)
}

/// The outgoing ray continues from the intersection point in `direction`
pub fn continue_from(incident: &Ray, hit: &Interaction, direction: Vector3D, weight: Float) -> TransportOutcome {
    TransportOutcome::Continue(incident.continued(hit.point(), direction), weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_direction() {
        let n = Vector3D::new(0., 0., 1.);
        let found = mirror_direction(Vector3D::new(0., 0., -1.), n);
        assert!(found.compare(Vector3D::new(0., 0., 1.)));
        let found = mirror_direction(Vector3D::new(1., 0., -1.).get_normalized(), n);
        assert!(found.compare(Vector3D::new(1., 0., 1.).get_normalized()));
    }

    #[test]
    fn test_tangential_change() -> Result<(), String> {
        let n = Vector3D::new(0., 0., 1.);
        let d = Vector3D::new(0., 0., -1.);
        let found = apply_tangential_change(d, n, Vector3D::new(0.6, 0., 0.)).ok_or("not evanescent")?;
        assert!(found.compare(Vector3D::new(0.6, 0., -0.8)), "found {}", found);

        // Normal component of delta is ignored
        let found = apply_tangential_change(d, n, Vector3D::new(0., 0., 0.6)).ok_or("not evanescent")?;
        assert!(found.compare(d));

        assert!(apply_tangential_change(d, n, Vector3D::new(1.1, 0., 0.)).is_none());
        // Non-finite changes do not make it through
        assert!(apply_tangential_change(d, n, Vector3D::new(Float::NAN, 0., 0.)).is_none());
        assert!(apply_tangential_change(d, n, Vector3D::new(Float::INFINITY, 0., 0.)).is_none());
        Ok(())
    }

    #[test]
    fn test_add_velocities() -> Result<(), String> {
        // Collinear: (0.5 + 0.5) / (1 + 0.25)
        let w = add_velocities(Vector3D::new(0.5, 0., 0.), Vector3D::new(0.5, 0., 0.)).ok_or("subluminal")?;
        assert!(w.compare(Vector3D::new(0.8, 0., 0.)), "{}", w);

        // Frames at rest change nothing
        let v = Vector3D::new(0.1, 0.6, -0.2);
        let w = add_velocities(Vector3D::zero(), v).ok_or("subluminal")?;
        assert!(w.compare(v));

        // Perpendicular boosts stay below c, unlike a plain sum
        let u = Vector3D::new(0.9, 0., 0.);
        let v = Vector3D::new(0., 0.9, 0.);
        let w = add_velocities(u, v).ok_or("subluminal")?;
        assert!((u + v).length() > 1.);
        assert!(w.length() < 1., "|w| = {}", w.length());
        // The part along u is unchanged; the perpendicular part is dilated
        assert!((w.x - 0.9).abs() < 1e-12);
        assert!((w.y - 0.9 * (1. - 0.81 as Float).sqrt()).abs() < 1e-12);

        // Boosting back undoes the boost
        let u = Vector3D::new(0.3, 0., 0.5);
        let w = add_velocities(u, -u).ok_or("subluminal")?;
        assert!(w.is_zero(), "{}", w);

        assert!(add_velocities(Vector3D::new(1., 0., 0.), v).is_none());
        Ok(())
    }

    #[test]
    fn test_lens_law() -> Result<(), String> {
        let axis = Vector3D::new(0., 0., 1.);
        // Parallel rays converge at the focal point, whichever way they go
        for dir in [1., -1.] {
            let d = Vector3D::new(0., 0., dir);
            let x = Vector3D::new(0.5, 0., 0.);
            let found = lens_law(d, axis, x, 2.).ok_or("not parallel")?;
            let expected = Vector3D::new(-0.5, 0., 2. * dir).get_normalized();
            assert!(found.compare(expected), "found {} | expected {}", found, expected);
        }
        // Through the principal point, undeviated
        let d = Vector3D::new(0.3, 0.2, -1.).get_normalized();
        let found = lens_law(d, axis, Vector3D::new(0., 0., 0.), 2.).ok_or("not parallel")?;
        assert!(found.compare(d));
        // Infinite focal length
        let found = lens_law(d, axis, Vector3D::new(1., 0., 0.), Float::INFINITY).ok_or("not parallel")?;
        assert!(found.compare(d));

        assert!(lens_law(Vector3D::new(1., 0., 0.), axis, Vector3D::new(1., 0., 0.), 1.).is_none());
        Ok(())
    }

    #[test]
    fn test_lorentz() -> Result<(), String> {
        // Light travelling along the velocity is not deflected
        let l = Vector3D::new(1., 0., 0.);
        let found = lorentz_aberration(l, Vector3D::new(0.5, 0., 0.)).ok_or("too fast")?;
        assert!(found.compare(l));

        // Perpendicular light gets tilted backwards, by asin(beta)
        let l = Vector3D::new(0., 1., 0.);
        let found = lorentz_aberration(l, Vector3D::new(0.5, 0., 0.)).ok_or("too fast")?;
        assert!((found.x + 0.5).abs() < 1e-9, "found {}", found);
        assert!((found.length() - 1.).abs() < 1e-9);

        // Zero velocity
        let found = lorentz_aberration(l, Vector3D::new(0., 0., 0.)).ok_or("too fast")?;
        assert!(found.compare(l));

        assert!(lorentz_aberration(l, Vector3D::new(1., 0., 0.)).is_none());
        Ok(())
    }

    #[test]
    fn test_galileo() -> Result<(), String> {
        let l = Vector3D::new(0., 1., 0.);
        let found = galilean_aberration(l, Vector3D::new(1., 0., 0.)).ok_or("at rest")?;
        assert!(found.compare(Vector3D::new(-1., 1., 0.).get_normalized()));
        assert!(galilean_aberration(l, l).is_none());
        Ok(())
    }
}
