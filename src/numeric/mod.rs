pub mod exact_rational;
pub mod robust_f64;
pub mod scalar;
