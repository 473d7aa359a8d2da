pub mod octree;
pub mod traversal;

pub use octree::{ConstraintOctree, ConstraintRef, DegeneracyPolicy, OctreeNode};
pub use traversal::{LeafCut, LeafWalk};
