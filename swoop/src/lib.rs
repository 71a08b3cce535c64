//! Sweep-SAH builder for bounding volume hierarchies over triangles and
//! nested intersectors.
//!
//! Feeding [`Bvh::build`] a primitive soup yields a flattened node array
//! plus a buffer of precomputed [Wald triangles](models::WaldTriangle),
//! both laid out for a tight traversal loop; the layouts themselves live
//! in the `swoop-models` crate so that the traversal partner can depend on
//! them alone.

mod bvh;
mod options;
mod primitive;

pub use swoop_models as models;

pub use self::bvh::*;
pub use self::options::*;
pub use self::primitive::*;
