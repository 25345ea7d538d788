pub mod app;
pub mod input;
pub mod state;
pub mod views;
pub mod widgets;
pub mod worker;

pub use app::App;
