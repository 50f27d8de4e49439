//! CLI command implementations.

mod build;
mod copy;
mod render;

pub(crate) use build::BuildArgs;
pub(crate) use copy::CopyArgs;
pub(crate) use render::RenderArgs;
