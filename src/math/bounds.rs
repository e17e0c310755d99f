use glam::Vec3;

use crate::math::ray::Ray;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Ray parameter of the first crossing in front of the origin. A ray
    /// starting inside the sphere reports its exit point.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let a = ray.direction.length_squared();
        if a == 0.0 {
            return None;
        }

        let offset = ray.origin - self.center;
        let half_b = offset.dot(ray.direction);
        let c = offset.length_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let t_near = (-half_b - root) / a;
        let t_far = (-half_b + root) / a;

        if t_far < 0.0 {
            None
        } else if t_near >= 0.0 {
            Some(t_near)
        } else {
            Some(t_far)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(point1: Vec3, point2: Vec3) -> AABB {
        let min = point1.min(point2);
        let max = point1.max(point2);
        AABB { min, max }
    }

    pub fn from_half_extents(half_extents: Vec3) -> AABB {
        AABB::new(-half_extents, half_extents)
    }

    /// Slab test, returns the ray parameter of the entry point (or the exit
    /// point when the origin is inside the box).
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = ray.direction.recip();

        let t0 = (self.min - ray.origin) * inv_dir;
        let t1 = (self.max - ray.origin) * inv_dir;

        let t_near = t0.min(t1).max_element();
        let t_far = t0.max(t1).min_element();

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }
}

/// Local-space hit volume of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingVolume {
    Sphere(BoundingSphere),
    Box(AABB),
}

impl BoundingVolume {
    pub fn sphere(radius: f32) -> Self {
        BoundingVolume::Sphere(BoundingSphere::new(Vec3::ZERO, radius))
    }

    pub fn cuboid(half_extents: Vec3) -> Self {
        BoundingVolume::Box(AABB::from_half_extents(half_extents))
    }

    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let t = match self {
            BoundingVolume::Sphere(sphere) => sphere.intersect_ray(ray),
            BoundingVolume::Box(aabb) => aabb.intersect_ray(ray),
        }?;

        t.is_finite().then_some(t)
    }
}
