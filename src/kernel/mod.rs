pub mod bigrational_kernel;
pub mod f64_kernel;
pub mod kernel;
pub mod predicates;

pub use bigrational_kernel::BigRationalKernel;
pub use f64_kernel::F64Kernel;
pub use kernel::Kernel;
pub use predicates::{TriangleCrossing, are_collinear, are_equal, orient3d, segment_triangle_crossing};
