pub mod off;

pub use off::{read_off, read_off_path};
