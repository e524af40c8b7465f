pub mod config;
pub mod fabric;
pub mod link;
pub mod particle;
pub mod posbox;

pub type V2 = nalgebra::Vector2<f32>;
