use sdl2::video::GLProfile;

use crate::error::{BackendError, Result};
use crate::glutils;
use crate::input::Input;
use crate::screen::Screen;
use crate::sprite::SpriteRenderer;

/// Field order is drop order: the pump and GL screen go before SDL shuts down.
pub struct System {
    pub input: Input,
    pub screen: Screen,
    _video_subsystem: sdl2::VideoSubsystem,
    _sdl_context: sdl2::Sdl,
}

impl System {
    pub fn new(title: &str, w: u32, h: u32) -> Result<System> {
        let sdl_context = sdl2::init().map_err(BackendError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video_subsystem
            .window(title, w, h)
            .opengl()
            .build()
            .map_err(|e| BackendError::Window(e.to_string()))?;

        let gl_ctx = window
            .gl_create_context()
            .map_err(BackendError::GlContext)?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));
        glutils::log_opengl_info();

        let sprites = SpriteRenderer::new(w, h)?;
        let event_pump = sdl_context.event_pump().map_err(BackendError::Sdl)?;
        log::info!("created {w}x{h} window '{title}'");

        Ok(System {
            input: Input::new(event_pump),
            screen: Screen::new(window, gl_ctx, sprites),
            _video_subsystem: video_subsystem,
            _sdl_context: sdl_context,
        })
    }
}
