pub mod display;
pub mod export;
pub mod plot_kind;
pub mod series;
