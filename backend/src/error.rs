use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Error while building OpenGL window: {0}")]
    Window(String),

    #[error("OpenGL context error: {0}")]
    GlContext(String),

    #[error("Shader error: {0}")]
    Shader(String),

    #[error("Unable to load image {path}: {reason}")]
    Texture { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, BackendError>;
