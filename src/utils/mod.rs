pub mod color;
pub mod file_size;

pub use color::{ColorExt, Palette};
pub use file_size::FileSizeUtils;
