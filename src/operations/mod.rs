pub mod abs;
pub mod pow;
pub mod sqrt;
pub mod zero;

pub use abs::Abs;
pub use pow::Pow;
pub use sqrt::Sqrt;
pub use zero::{One, Zero};
