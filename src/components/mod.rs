pub mod app;
pub mod cell;
pub mod grid;

pub use app::App;
