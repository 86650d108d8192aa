use std::time::{Duration, Instant};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;
use crate::geometry::Rect;
use crate::glutils::{self, Texture};
use crate::sprite::SpriteRenderer;

/// The window's GL surface. Field order matters: GL objects go before the context.
pub struct Screen {
    sprites: SpriteRenderer,
    _gl_ctx: sdl2::video::GLContext,
    window: sdl2::video::Window,
    frame_duration: Option<Duration>,
    last_present: Instant,
}

impl Screen {
    pub(crate) fn new(
        window: sdl2::video::Window,
        gl_ctx: sdl2::video::GLContext,
        sprites: SpriteRenderer,
    ) -> Self {
        Self {
            sprites,
            _gl_ctx: gl_ctx,
            window,
            frame_duration: None,
            last_present: Instant::now(),
        }
    }

    /// Caps presentation to `fps` frames per second; 0 disables pacing.
    pub fn set_frame_rate(&mut self, fps: u32) {
        self.frame_duration = match fps {
            0 => None,
            fps => Some(Duration::from_secs(1) / fps),
        };
    }

    pub fn load_texture(&self, path: &str) -> Result<Texture> {
        glutils::load_texture(path)
    }
}

impl Canvas for Screen {
    type Texture = Texture;

    fn clear(&mut self, color: Color) {
        self.sprites.clear(color);
    }

    fn draw_texture(&mut self, texture: &Texture, dst: &Rect) {
        self.sprites.draw_texture(texture, dst);
    }

    fn draw_rect(&mut self, rect: &Rect, color: Color) {
        self.sprites.draw_rect(rect, color);
    }

    fn present(&mut self) {
        self.window.gl_swap_window();
        if let Some(frame) = self.frame_duration {
            let elapsed = self.last_present.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
        self.last_present = Instant::now();
    }
}
