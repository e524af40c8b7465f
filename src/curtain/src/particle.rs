use std::sync::{Arc, RwLock};

use protocol::canvas::Canvas;
use protocol::frame::{Pointer, PointerButton};

use crate::config::SimParams;
use crate::link::Link;
use crate::posbox::PosBox;
use crate::V2;

pub type PRef = Arc<RwLock<Particle>>;

// velocity is implicit in pos - ppos, never stored
pub struct Particle {
	pub id: usize,
	pub pos: V2,
	pub ppos: V2,
	pub accel: V2,
	pub mass: f32,
	pub damping: f32,
	pub pinned: bool,
	pub pin_pos: V2,
	pub links: Vec<Link>,
}

impl Particle {
	pub fn new_ref(id: usize, pos: V2, mass: f32) -> PRef {
		let result = Self {
			id,
			pos,
			ppos: pos,
			accel: V2::zeros(),
			mass, // invariant: mass > 0, pinning is a separate flag
			damping: 20.,
			pinned: false,
			pin_pos: V2::zeros(),
			links: Vec::new(),
		};
		Arc::new(RwLock::new(result))
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn add_pos(&mut self, dp: V2) {
		self.pos += dp;
	}

	pub fn get_imass(&self) -> f32 {
		1. / self.mass
	}

	pub fn apply_force(&mut self, f: V2) {
		self.accel += f / self.mass;
	}

	// once per frame, before interactions and constraint solving
	pub fn update_physics(&mut self, dt: f32, params: &SimParams) {
		self.apply_force(V2::new(0., self.mass * params.gravity));
		let velocity = self.pos - self.ppos;
		self.accel -= velocity * (self.damping / self.mass);
		let next = self.pos + velocity + self.accel * 0.5 * dt * dt;
		self.ppos = self.pos;
		self.pos = next;
		self.accel = V2::zeros();
	}

	pub fn update_interactions(&mut self, pointer: &Pointer, params: &SimParams) {
		if !pointer.pressed {
			return;
		}
		let d2 = pointer.segment_dist_squared(self.pos);
		match pointer.button {
			PointerButton::Primary => {
				if d2 < params.influence_radius_sq {
					self.ppos = self.pos
						- (pointer.pos - pointer.ppos) * params.influence_scalar;
				}
			}
			PointerButton::Secondary => {
				if d2 < params.tear_radius_sq && !self.links.is_empty() {
					eprintln!(
						"INFO: tear {} links from particle {}",
						self.links.len(),
						self.id
					);
					self.links.clear();
				}
			}
			PointerButton::None => {}
		}
	}

	// fixed order: links in insertion order, boundary, pin
	pub fn solve_constraints(&mut self, bounds: &PosBox) {
		let imass = 1. / self.mass;
		let mut snapped = Vec::new();
		for link in &self.links {
			if link.solve(&mut self.pos, imass) {
				snapped.push(link.get_id());
			}
		}
		for id in snapped {
			eprintln!("INFO: link {} snapped", id);
			self.remove_link(id);
		}
		bounds.reflect(&mut self.pos);
		if self.pinned {
			self.pos = self.pin_pos;
		}
	}

	pub fn attach_to(&mut self, other: PRef, resting_distance: f32, stiffness: f32, id: usize) {
		self.add_link(Link::new(id, other, resting_distance, stiffness));
	}

	pub fn add_link(&mut self, link: Link) {
		self.links.push(link);
	}

	pub fn remove_link(&mut self, id: usize) {
		self.links.retain(|l| l.get_id() != id);
	}

	pub fn pin_to(&mut self, location: V2) {
		self.pinned = true;
		self.pin_pos = location;
	}

	pub fn draw(&self, canvas: &mut dyn Canvas) {
		if self.links.is_empty() {
			canvas.draw_point(self.pos[0], self.pos[1]);
		} else {
			for link in &self.links {
				link.draw(self.pos, canvas);
			}
		}
	}
}
