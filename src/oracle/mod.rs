pub mod oracle;
pub mod source;
pub mod surface;

pub use oracle::{FacetId, PolyhedralOracle, SurfaceHit};
pub use source::{IndexedMesh, MeshSource};
pub use surface::{BuildObserver, BuildStage, NoopObserver, PolyhedralSurface, SurfaceOptions};
