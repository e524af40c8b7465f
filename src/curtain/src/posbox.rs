use crate::V2;

pub struct PosBox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl PosBox {
	// canvas rectangle inset by one unit on every side
	pub fn inset(width: f32, height: f32) -> Self {
		Self {
			xmin: 1.,
			xmax: width - 1.,
			ymin: 1.,
			ymax: height - 1.,
		}
	}

	// reflects per axis without clamping, a position far outside may
	// reflect to a value still outside
	pub fn reflect(&self, pos: &mut V2) -> bool {
		let mut flag = false;
		if pos[1] < self.ymin {
			pos[1] = 2. * self.ymin - pos[1];
			flag = true;
		}
		if pos[1] > self.ymax {
			pos[1] = 2. * self.ymax - pos[1];
			flag = true;
		}
		if pos[0] > self.xmax {
			pos[0] = 2. * self.xmax - pos[0];
			flag = true;
		}
		if pos[0] < self.xmin {
			pos[0] = 2. * self.xmin - pos[0];
			flag = true;
		}
		flag
	}
}
