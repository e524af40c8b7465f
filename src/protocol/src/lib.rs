pub mod canvas;
pub mod frame;
use frame::FrameInput;

use serde::{Deserialize, Serialize};

pub type V2 = nalgebra::Vector2<f32>;

#[derive(Serialize, Deserialize)]
pub enum Message {
	Frame(FrameInput),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> Vec<u8> {
		bincode::serialize(&self).unwrap()
	}

	pub fn from_bytes(bytes: &[u8]) -> Self {
		bincode::deserialize(bytes).unwrap()
	}
}
