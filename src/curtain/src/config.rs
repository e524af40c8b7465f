use serde::{Deserialize, Serialize};

// passed into each per-frame phase as an immutable snapshot
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimParams {
	pub gravity: f32,
	// interaction radii are stored pre-squared
	pub influence_radius_sq: f32,
	pub tear_radius_sq: f32,
	pub influence_scalar: f32,
	pub solver_passes: usize,
}

impl Default for SimParams {
	fn default() -> Self {
		Self {
			gravity: 980.,
			influence_radius_sq: 26. * 26.,
			tear_radius_sq: 8. * 8.,
			influence_scalar: 5.,
			solver_passes: 1,
		}
	}
}

// grid topology supplied by the host at construction time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FabricConfig {
	pub columns: usize,
	pub rows: usize,
	pub spacing: f32,
	pub stiffness: f32,
	pub pinned_row: bool,
	// links longer than break_ratio * spacing snap during solving,
	// infinity disables stretch tearing
	pub break_ratio: f32,
}

impl Default for FabricConfig {
	fn default() -> Self {
		Self {
			columns: 60,
			rows: 40,
			spacing: 6.,
			stiffness: 1.,
			pinned_row: true,
			break_ratio: f32::INFINITY,
		}
	}
}
