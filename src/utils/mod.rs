pub mod color;
pub mod text;
