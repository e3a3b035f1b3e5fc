use macroquad::prelude::*;

use orchard::simulation::draw::DrawCmd;
use orchard::simulation::map::Map;
use orchard::simulation::world::World;

trait ToScreen {
    type Output;
    fn to_screen(&self, map: &Map) -> Self::Output;
}

impl ToScreen for glam::Vec2 {
    type Output = (f32, f32);
    fn to_screen(&self, map: &Map) -> (f32, f32) {
        let scale_x = screen_width() / map.width();
        let scale_y = screen_height() / map.height();
        (self.x * scale_x, self.y * scale_y)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, map: &Map) -> f32 {
        let scale_x = screen_width() / map.width();
        let scale_y = screen_height() / map.height();
        self * scale_x.min(scale_y)
    }
}

/// Draws one frame of the world, scaling map coordinates to the current
/// window size.
pub fn render(world: &World) {
    let map = world.map();
    for cmd in world.draw_commands() {
        match cmd {
            DrawCmd::Line { from, to, color } => {
                let (x1, y1) = from.to_screen(map);
                let (x2, y2) = to.to_screen(map);
                draw_line(x1, y1, x2, y2, 1.0, to_color(color));
            }
            DrawCmd::Rect { min, max, color } => {
                let (x1, y1) = min.to_screen(map);
                let (x2, y2) = max.to_screen(map);
                draw_rectangle(x1, y1, x2 - x1, y2 - y1, to_color(color));
            }
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => {
                let (x, y) = center.to_screen(map);
                draw_circle(x, y, radius.to_screen(map), to_color(color));
            }
        }
    }
}

fn to_color(color: orchard::simulation::draw::Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}
