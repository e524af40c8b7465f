use protocol::canvas::Canvas;
use protocol::frame::FrameInput;

use crate::config::{FabricConfig, SimParams};
use crate::link::Link;
use crate::particle::{PRef, Particle};
use crate::posbox::PosBox;
use crate::V2;

pub struct Fabric {
	params: SimParams,
	id_alloc: usize,
	particles: Vec<PRef>,
	// most recently added grid, for (column, row) addressing
	grid_base: usize,
	columns: usize,
	rows: usize,
}

impl Default for Fabric {
	fn default() -> Self {
		Self {
			params: SimParams::default(),
			id_alloc: 0,
			particles: Vec::new(),
			grid_base: 0,
			columns: 0,
			rows: 0,
		}
	}
}

impl Fabric {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_params(mut self, params: SimParams) -> Self {
		self.params = params;
		self
	}

	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.params.gravity = gravity;
		self
	}

	pub fn with_solver_passes(mut self, passes: usize) -> Self {
		self.params.solver_passes = passes;
		self
	}

	pub fn params(&self) -> &SimParams {
		&self.params
	}

	// row-major particles, each attached to its upper and left neighbor
	pub fn add_grid(&mut self, config: &FabricConfig, origin: V2) {
		eprintln!(
			"INFO: add grid: {}x{} spacing {}",
			config.columns, config.rows, config.spacing
		);
		let break_length = config.break_ratio * config.spacing;
		self.grid_base = self.particles.len();
		let mut grid: Vec<Vec<PRef>> = Vec::with_capacity(config.rows);
		for y in 0..config.rows {
			let mut row = Vec::with_capacity(config.columns);
			for x in 0..config.columns {
				let pos = origin
					+ V2::new(x as f32 * config.spacing, y as f32 * config.spacing);
				let p = Particle::new_ref(y * config.columns + x, pos, 1.);
				if y != 0 {
					self.attach(
						&p,
						&grid[y - 1][x],
						config.spacing,
						config.stiffness,
						break_length,
					);
				}
				if x != 0 {
					self.attach(
						&p,
						&row[x - 1],
						config.spacing,
						config.stiffness,
						break_length,
					);
				}
				if y == 0 && config.pinned_row {
					p.write().unwrap().pin_to(pos);
				}
				self.particles.push(p.clone());
				row.push(p);
			}
			grid.push(row);
		}
		self.columns = config.columns;
		self.rows = config.rows;
	}

	fn attach(&mut self, a: &PRef, b: &PRef, resting_distance: f32, stiffness: f32, break_length: f32) {
		let id = self.id_alloc;
		self.id_alloc += 1;
		let link = Link::new(id, b.clone(), resting_distance, stiffness)
			.with_break_length(break_length);
		a.write().unwrap().add_link(link);
	}

	pub fn particles(&self) -> &[PRef] {
		&self.particles
	}

	pub fn particle(&self, column: usize, row: usize) -> PRef {
		self.particles[self.grid_base + row * self.columns + column].clone()
	}

	pub fn particle_len(&self) -> usize {
		self.particles.len()
	}

	pub fn link_len(&self) -> usize {
		self.particles
			.iter()
			.map(|p| p.read().unwrap().links.len())
			.sum()
	}

	#[cfg(not(debug_assertions))]
	fn update_physics(&mut self, dt: f32) {
		use rayon::prelude::*;
		let params = &self.params;
		self.particles
			.par_iter()
			.for_each(|p| p.write().unwrap().update_physics(dt, params));
	}

	#[cfg(debug_assertions)]
	fn update_physics(&mut self, dt: f32) {
		for p in &self.particles {
			p.write().unwrap().update_physics(dt, &self.params);
		}
	}

	#[cfg(not(debug_assertions))]
	fn update_interactions(&mut self, frame: &FrameInput) {
		use rayon::prelude::*;
		let params = &self.params;
		self.particles
			.par_iter()
			.for_each(|p| p.write().unwrap().update_interactions(&frame.pointer, params));
	}

	#[cfg(debug_assertions)]
	fn update_interactions(&mut self, frame: &FrameInput) {
		for p in &self.particles {
			p.write().unwrap().update_interactions(&frame.pointer, &self.params);
		}
	}

	// relaxation couples neighbors through links, keep construction
	// order in every build
	fn solve_constraints(&mut self, bounds: &PosBox) {
		for p in &self.particles {
			p.write().unwrap().solve_constraints(bounds);
		}
	}

	// phases 1-3 in fixed order, every particle sees the same snapshot
	pub fn update(&mut self, frame: &FrameInput) {
		if frame.dt == 0f32 {
			return;
		}
		self.update_physics(frame.dt);
		self.update_interactions(frame);
		let bounds = PosBox::inset(frame.width, frame.height);
		for _ in 0..self.params.solver_passes {
			self.solve_constraints(&bounds);
		}
	}

	pub fn draw(&self, canvas: &mut dyn Canvas) {
		for p in &self.particles {
			p.read().unwrap().draw(canvas);
		}
	}

	pub fn step(&mut self, frame: &FrameInput, canvas: &mut dyn Canvas) {
		self.update(frame);
		self.draw(canvas);
	}
}
