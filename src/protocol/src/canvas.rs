// drawing primitive supplied by the host renderer
pub trait Canvas {
	fn draw_point(&mut self, x: f32, y: f32);
	fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
}
