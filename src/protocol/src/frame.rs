// frame: per-frame input snapshot from the host event loop

use serde::{Deserialize, Serialize};

use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
	Primary,
	Secondary,
	None,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
	pub ppos: V2,
	pub pos: V2,
	pub pressed: bool,
	pub button: PointerButton,
}

impl Default for Pointer {
	fn default() -> Self {
		Self {
			ppos: V2::new(0., 0.),
			pos: V2::new(0., 0.),
			pressed: false,
			button: PointerButton::None,
		}
	}
}

impl Pointer {
	// squared distance from p to the ppos -> pos motion segment
	pub fn segment_dist_squared(&self, p: V2) -> f32 {
		let ds = self.pos - self.ppos;
		let l2 = ds.magnitude_squared();
		if l2 == 0. {
			return (p - self.ppos).magnitude_squared();
		}
		let t = ((p - self.ppos).dot(&ds) / l2).clamp(0., 1.);
		let nearest = self.ppos + ds * t;
		(p - nearest).magnitude_squared()
	}
}

// everything the simulation consumes from the host in one frame tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
	pub dt: f32,
	pub width: f32,
	pub height: f32,
	pub pointer: Pointer,
}

impl FrameInput {
	pub fn idle(dt: f32, width: f32, height: f32) -> Self {
		Self {
			dt,
			width,
			height,
			pointer: Pointer::default(),
		}
	}
}
