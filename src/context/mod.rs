//! wgpu rendering context management.

mod context;

pub use context::Context;
