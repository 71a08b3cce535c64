use bytemuck::{Pod, Zeroable};
use glam::{vec2, Vec2, Vec3};

/// Projective reformulation of a triangle, precomputed at build time.
///
/// The dominant axis `k` of the geometric normal is divided out of every
/// field, which lets the intersection test run in the remaining two
/// dimensions `u = (k+1) % 3` and `v = (k+2) % 3` without cross products:
/// for a point `p` on the triangle's plane,
/// `beta = dot(p_uv - vert_k, cn)` and `gamma = dot(p_uv - vert_k, bn)`
/// recover the barycentric coordinates directly.
///
/// A degenerate triangle yields infinite or NaN fields here; rejecting the
/// resulting non-hits is the traversal partner's job.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct WaldTriangle {
    n: Vec2,
    bn: Vec2,
    cn: Vec2,
    vert_k: Vec2,
    nd: f32,
    k: u32,
    sign: u32,
    triangle_id: u32,
    material_id: u32,
    leaf_size: u32,
}

impl WaldTriangle {
    pub fn new(
        vertices: [Vec3; 3],
        triangle_id: TriangleId,
        material_id: MaterialId,
        leaf_size: u32,
    ) -> Self {
        let [a, bv, cv] = vertices;
        let b = bv - a;
        let c = cv - a;
        let n = b.cross(c);

        let k = {
            let n = n.abs();
            let mut k = 0;

            if n[1] > n[k] {
                k = 1;
            }

            if n[2] > n[k] {
                k = 2;
            }

            k
        };

        let u = (k + 1) % 3;
        let v = (k + 2) % 3;

        let denom = b[u] * c[v] - b[v] * c[u];
        let krec = n[k];

        Self {
            n: vec2(n[u] / krec, n[v] / krec),
            bn: vec2(-b[v] / denom, b[u] / denom),
            cn: vec2(c[v] / denom, -c[u] / denom),
            vert_k: vec2(a[u], a[v]),
            nd: n.dot(a) / krec,
            k: k as u32,
            sign: if n[k] < 0.0 { 1 } else { 0 },
            triangle_id: triangle_id.get(),
            material_id: material_id.get(),
            leaf_size,
        }
    }

    /// Dominant axis of the normal (`0` = x, `1` = y, `2` = z).
    pub fn k(&self) -> u32 {
        self.k
    }

    pub fn n(&self) -> Vec2 {
        self.n
    }

    pub fn bn(&self) -> Vec2 {
        self.bn
    }

    pub fn cn(&self) -> Vec2 {
        self.cn
    }

    /// `(u, v)` coordinates of the anchor vertex.
    pub fn vert_k(&self) -> Vec2 {
        self.vert_k
    }

    /// Plane constant: `dot(normal, anchor) / normal[k]`.
    pub fn nd(&self) -> f32 {
        self.nd
    }

    /// `1` when `normal[k]` is negative, `0` otherwise.
    pub fn sign(&self) -> u32 {
        self.sign
    }

    pub fn triangle_id(&self) -> TriangleId {
        TriangleId::new(self.triangle_id)
    }

    pub fn material_id(&self) -> MaterialId {
        MaterialId::new(self.material_id)
    }

    /// Number of triangles in the leaf run this record belongs to; written
    /// on every record of the run.
    pub fn leaf_size(&self) -> u32 {
        self.leaf_size
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriangleId(u32);

impl TriangleId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MaterialId(u32);

impl MaterialId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    fn close(a: f32, b: f32) -> bool {
        let d = a - b;

        -1e-4 < d && d < 1e-4
    }

    fn barycentric_round_trip(vertices: [Vec3; 3], beta: f32, gamma: f32) {
        let [a, bv, cv] = vertices;
        let b = bv - a;
        let c = cv - a;
        let n = b.cross(c);

        let target = WaldTriangle::new(
            vertices,
            TriangleId::new(0),
            MaterialId::new(0),
            1,
        );

        let p = a + beta * b + gamma * c;
        let k = target.k() as usize;
        let u = (k + 1) % 3;
        let v = (k + 2) % 3;
        let h = vec2(p[u], p[v]) - target.vert_k();

        assert!(close(beta, h.dot(target.cn())));
        assert!(close(gamma, h.dot(target.bn())));
        assert!(close(n.dot(p), target.nd() * n[k]));
    }

    #[test]
    fn round_trip() {
        barycentric_round_trip(
            [
                vec3(0.2, -1.3, 0.7),
                vec3(1.9, 0.4, -0.2),
                vec3(-0.6, 2.2, 1.1),
            ],
            0.25,
            0.5,
        );

        // Dominant axis x
        barycentric_round_trip(
            [
                vec3(5.0, 0.0, 0.0),
                vec3(5.1, 2.0, 0.0),
                vec3(4.9, 0.0, 2.0),
            ],
            0.1,
            0.6,
        );

        // Dominant axis y
        barycentric_round_trip(
            [
                vec3(0.0, 1.0, 0.0),
                vec3(0.0, 1.1, 2.0),
                vec3(3.0, 0.9, 0.0),
            ],
            0.3,
            0.3,
        );
    }

    #[test]
    fn axis_and_sign() {
        // Normal is +z
        let target = WaldTriangle::new(
            [
                vec3(0.0, 0.0, 0.0),
                vec3(1.0, 0.0, 0.0),
                vec3(0.0, 1.0, 0.0),
            ],
            TriangleId::new(7),
            MaterialId::new(0),
            3,
        );

        assert_eq!(2, target.k());
        assert_eq!(0, target.sign());
        assert_eq!(7, target.triangle_id().get());
        assert_eq!(0, target.material_id().get());
        assert_eq!(3, target.leaf_size());

        // Swapping two vertices flips the normal to -z
        let target = WaldTriangle::new(
            [
                vec3(0.0, 0.0, 0.0),
                vec3(0.0, 1.0, 0.0),
                vec3(1.0, 0.0, 0.0),
            ],
            TriangleId::new(0),
            MaterialId::new(0),
            1,
        );

        assert_eq!(2, target.k());
        assert_eq!(1, target.sign());
    }

    #[test]
    fn degenerate() {
        // Collinear vertices: a zero normal poisons the fields instead of
        // aborting the build
        let target = WaldTriangle::new(
            [
                vec3(0.0, 0.0, 0.0),
                vec3(1.0, 1.0, 1.0),
                vec3(2.0, 2.0, 2.0),
            ],
            TriangleId::new(0),
            MaterialId::new(0),
            1,
        );

        assert!(target.nd().is_nan());
    }

    #[test]
    fn size() {
        assert_eq!(56, core::mem::size_of::<WaldTriangle>());
    }
}
