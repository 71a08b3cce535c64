use crate::WaldTriangle;

/// Read-only window over the precomputed triangle buffer.
pub struct WaldTrianglesView<'a> {
    triangles: &'a [WaldTriangle],
}

impl<'a> WaldTrianglesView<'a> {
    pub fn new(triangles: &'a [WaldTriangle]) -> Self {
        Self { triangles }
    }

    pub fn get(&self, ptr: u32) -> WaldTriangle {
        self.triangles[ptr as usize]
    }

    /// The whole run of a triangle leaf, starting at its first record.
    pub fn leaf(&self, first: u32) -> &'a [WaldTriangle] {
        let first = first as usize;
        let count = self.triangles[first].leaf_size() as usize;

        &self.triangles[first..first + count]
    }
}
