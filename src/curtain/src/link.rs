use protocol::canvas::Canvas;

use crate::particle::PRef;
use crate::V2;

fn rp() -> V2 {
	use rand::Rng;
	let mut rng = rand::thread_rng();
	V2::new(rng.gen_range(-1e-3f32..1e-3f32), rng.gen_range(-1e-3f32..1e-3f32))
}

// only the far endpoint is held here, keeps the particle graph acyclic
pub struct Link {
	id: usize,
	other: PRef,
	resting_length: f32,
	stiffness: f32,
	break_length: f32,
}

impl Link {
	pub fn new(id: usize, other: PRef, resting_length: f32, stiffness: f32) -> Self {
		Self {
			id,
			other,
			resting_length,
			stiffness,
			break_length: f32::INFINITY,
		}
	}

	pub fn with_break_length(mut self, l: f32) -> Self {
		self.break_length = l;
		self
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn get_resting_length(&self) -> f32 {
		self.resting_length
	}

	// returns true when the link stretched past its break length and
	// should be removed instead of corrected; a pinned endpoint still
	// receives its displacement, its own pass re-enforces the pin
	pub fn solve(&self, pos: &mut V2, imass: f32) -> bool {
		let mut other = self.other.write().unwrap();
		let dp = *pos - other.get_pos();
		let l = dp.magnitude();
		if !l.is_normal() {
			eprintln!("WARN: bad link length {}", l);
			*pos += rp();
			other.add_pos(rp());
			return false;
		}
		if l > self.break_length {
			return true;
		}
		let diff = (self.resting_length - l) / l;
		let imass_other = other.get_imass();
		let scalar = imass / (imass + imass_other) * self.stiffness;
		let scalar_other = self.stiffness - scalar;
		*pos += dp * (scalar * diff);
		other.add_pos(-dp * (scalar_other * diff));
		false
	}

	pub fn draw(&self, from: V2, canvas: &mut dyn Canvas) {
		let to = self.other.read().unwrap().get_pos();
		canvas.draw_line(from[0], from[1], to[0], to[1]);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::particle::Particle;

	#[test]
	fn test_solve_at_rest_is_exact_noop() {
		let other = Particle::new_ref(1, V2::new(110., 100.), 1.);
		let link = Link::new(0, other.clone(), 10., 1.);
		let mut pos = V2::new(100., 100.);
		assert!(!link.solve(&mut pos, 1.));
		assert_eq!(pos, V2::new(100., 100.));
		assert_eq!(other.read().unwrap().get_pos(), V2::new(110., 100.));
	}

	#[test]
	fn test_solve_splits_correction_evenly() {
		let other = Particle::new_ref(1, V2::new(120., 100.), 1.);
		let link = Link::new(0, other.clone(), 10., 1.);
		let mut pos = V2::new(100., 100.);
		link.solve(&mut pos, 1.);
		assert!((pos[0] - 105.).abs() < 1e-4);
		assert!((other.read().unwrap().get_pos()[0] - 115.).abs() < 1e-4);
	}

	#[test]
	fn test_solve_mass_weighting() {
		// heavy owner moves less than the light far endpoint
		let light = Particle::new_ref(1, V2::new(110., 100.), 1.);
		let link = Link::new(0, light.clone(), 5., 1.);
		let mut heavy_pos = V2::new(100., 100.);
		link.solve(&mut heavy_pos, 1. / 10.);
		let heavy_moved = (heavy_pos[0] - 100.).abs();
		let light_moved = (light.read().unwrap().get_pos()[0] - 110.).abs();
		assert!(heavy_moved > 0.);
		assert!(light_moved > 0.);
		assert!(heavy_moved < light_moved);
	}

	#[test]
	fn test_solve_reports_break() {
		let other = Particle::new_ref(1, V2::new(200., 100.), 1.);
		let link = Link::new(0, other.clone(), 10., 1.).with_break_length(40.);
		let mut pos = V2::new(100., 100.);
		assert!(link.solve(&mut pos, 1.));
		// a snapped link applies no correction
		assert_eq!(pos, V2::new(100., 100.));
		assert_eq!(other.read().unwrap().get_pos(), V2::new(200., 100.));
	}
}
