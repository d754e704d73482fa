pub mod geometry;
pub mod ray;
