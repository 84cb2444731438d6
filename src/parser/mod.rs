pub mod course;
pub mod patterns;
pub mod rows;

pub use course::extract;
