pub mod gemini;
pub mod logging;
pub mod photo;
pub mod rasterizer;
