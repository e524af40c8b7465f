use std::time::SystemTime;

use curtain::config::FabricConfig;
use curtain::fabric::Fabric;
use curtain::V2;
use protocol::canvas::Canvas;
use protocol::frame::FrameInput;

#[derive(Default)]
struct CountCanvas {
	points: usize,
	lines: usize,
}

impl Canvas for CountCanvas {
	fn draw_point(&mut self, _x: f32, _y: f32) {
		self.points += 1;
	}

	fn draw_line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) {
		self.lines += 1;
	}
}

fn main() {
	let start = SystemTime::now();
	let mut fabric = Fabric::new();
	fabric.add_grid(&FabricConfig::default(), V2::new(220., 20.));
	let rframes = 600;
	let frame = FrameInput::idle(1. / 60., 800., 600.);
	let mut canvas = CountCanvas::default();
	for _ in 0..rframes {
		fabric.step(&frame, &mut canvas);
	}
	let time = rframes as f32 / 60.;
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!(
		"INFO: {} particles, {} links, {} segments drawn",
		fabric.particle_len(),
		fabric.link_len(),
		canvas.lines / rframes
	);
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
