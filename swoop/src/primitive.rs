use glam::Vec3;

use crate::models::IntersectorHandle;
use crate::BoundingBox;

/// A single entry of the primitive soup handed to the builder.
#[derive(Clone, Copy, Debug)]
pub enum Primitive {
    Triangle {
        vertices: [Vec3; 3],
    },

    /// An opaque nested acceleration structure; only its bounding box and
    /// handle matter here.
    Intersector {
        min: Vec3,
        max: Vec3,
        handle: IntersectorHandle,
    },
}

impl Primitive {
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Self::Triangle { vertices } => {
                BoundingBox::from_points(vertices.iter().copied())
            }

            Self::Intersector { min, max, .. } => BoundingBox::new(*min, *max),
        }
    }

    /// Sort key for the centroid presort.
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Triangle { vertices } => {
                vertices.iter().copied().sum::<Vec3>() / 3.0
            }

            Self::Intersector { min, max, .. } => (*min + *max) / 2.0,
        }
    }

    pub fn is_triangle(&self) -> bool {
        matches!(self, Self::Triangle { .. })
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn triangle() {
        let target = Primitive::Triangle {
            vertices: [
                vec3(0.0, 0.0, 0.0),
                vec3(2.0, 0.0, 0.0),
                vec3(0.0, 4.0, 1.0),
            ],
        };

        assert!(target.is_triangle());
        assert_eq!(vec3(0.0, 0.0, 0.0), target.bounds().min());
        assert_eq!(vec3(2.0, 4.0, 1.0), target.bounds().max());
        assert_eq!(vec3(2.0 / 3.0, 4.0 / 3.0, 1.0 / 3.0), target.center());
    }

    #[test]
    fn intersector() {
        let target = Primitive::Intersector {
            min: vec3(-1.0, -1.0, -1.0),
            max: vec3(3.0, 1.0, 1.0),
            handle: IntersectorHandle::new(0),
        };

        assert!(!target.is_triangle());
        assert_eq!(vec3(1.0, 0.0, 0.0), target.center());
    }
}
