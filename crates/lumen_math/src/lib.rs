// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;

/// A position in world or object space.
pub type Point3 = Vec3;

/// Linear RGB radiance or reflectance. Components may exceed 1.0.
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_vec3_ops() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let c = Color::new(0.5, 0.5, 2.0);
        assert_eq!(p * c, Vec3::new(0.5, 1.0, 6.0));
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
    }
}
