//! Ray picking volumes.

use glam::Vec3;

/// A pick ray. `direction` need not be normalized; hit distances are in units
/// of its length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` through `target`, normalized.
    pub fn toward(origin: Vec3, target: Vec3) -> Self {
        Self {
            origin,
            direction: (target - origin).normalize_or_zero(),
        }
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Invisible selection volume in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hitbox {
    Sphere { center: Vec3, radius: f32 },
    Ellipsoid { center: Vec3, radii: Vec3 },
    Aabb { center: Vec3, half_extents: Vec3 },
}

impl Hitbox {
    pub fn center(&self) -> Vec3 {
        match *self {
            Hitbox::Sphere { center, .. }
            | Hitbox::Ellipsoid { center, .. }
            | Hitbox::Aabb { center, .. } => center,
        }
    }

    /// Distance along the ray to the first surface hit, or 0 when the origin
    /// is inside. `None` if the ray misses or the volume is degenerate.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Hitbox::Sphere { center, radius } => {
                Self::unit_sphere(ray.origin - center, ray.direction, Vec3::splat(radius))
            }
            Hitbox::Ellipsoid { center, radii } => {
                Self::unit_sphere(ray.origin - center, ray.direction, radii)
            }
            Hitbox::Aabb {
                center,
                half_extents,
            } => Self::slab(ray.origin - center, ray.direction, half_extents),
        }
    }

    /// Scale space so the ellipsoid becomes a unit sphere, then solve the
    /// quadratic.
    fn unit_sphere(origin: Vec3, direction: Vec3, radii: Vec3) -> Option<f32> {
        if radii.min_element() <= 0.0 {
            return None;
        }
        let o = origin / radii;
        let d = direction / radii;
        let a = d.length_squared();
        if a == 0.0 {
            return None;
        }
        let b = o.dot(d);
        let c = o.length_squared() - 1.0;
        if c <= 0.0 {
            return Some(0.0);
        }
        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let t = (-b - disc.sqrt()) / a;
        (t >= 0.0).then_some(t)
    }

    fn slab(origin: Vec3, direction: Vec3, half: Vec3) -> Option<f32> {
        if half.min_element() <= 0.0 {
            return None;
        }
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let h = half[axis];
            if d.abs() < f32::EPSILON {
                if o.abs() > h {
                    return None;
                }
                continue;
            }
            let t1 = (-h - o) / d;
            let t2 = (h - o) / d;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
        }
        if t_max < t_min || t_max < 0.0 {
            return None;
        }
        Some(t_min.max(0.0))
    }
}

/// Nearest hit over a set of volumes.
pub fn nearest_hit<'a>(hitboxes: impl IntoIterator<Item = &'a Hitbox>, ray: &Ray) -> Option<f32> {
    hitboxes
        .into_iter()
        .filter_map(|h| h.intersect(ray))
        .min_by(|a, b| a.total_cmp(b))
}
