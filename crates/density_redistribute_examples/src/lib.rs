#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_positions_to_png, Projection, RenderConfig};
