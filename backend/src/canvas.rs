use crate::color::Color;
use crate::geometry::Rect;

/// Drawing primitives a frame is composed from.
pub trait Canvas {
    type Texture;

    fn clear(&mut self, color: Color);
    fn draw_texture(&mut self, texture: &Self::Texture, dst: &Rect);
    fn draw_rect(&mut self, rect: &Rect, color: Color);
    fn present(&mut self);
}
