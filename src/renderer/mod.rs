//! WebGPU rendering module
//!
//! Renders the simulation state as a flat colored triangle list: the scene
//! builder is a pure function of the state, the pipeline owns the GPU side.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
