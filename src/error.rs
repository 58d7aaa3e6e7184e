use crate::bind::BindError;
use crate::pattern::CompileError;
use crate::render::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to compile template: {0}")]
    Compile(#[from] CompileError),

    #[error("failed to render template: {0}")]
    Render(#[from] RenderError),

    #[error("failed to bind input: {0}")]
    Bind(#[from] BindError),
}

pub type Result<T> = std::result::Result<T, Error>;
