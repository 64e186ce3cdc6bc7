pub mod canvas;
pub mod capture;
pub mod command;
pub mod composite;
pub mod history;
pub mod layers;
pub mod model;
pub mod overlay;
pub mod platform;
pub mod raster;
pub mod save;
pub mod stroke;
pub mod toolbar;

pub use canvas::{Canvas, CanvasOptions};
pub use overlay::{run_overlay, OverlayApp};
