pub mod color;
pub mod frame;
pub mod surface;
