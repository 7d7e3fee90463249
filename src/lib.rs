pub mod classify;
pub mod cli;
pub mod dataset;
pub mod iso;
pub mod pipeline;
pub mod render;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use pipeline::{Settings, VisaMap};
pub use ui::UiApp;
