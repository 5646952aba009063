pub mod app;
pub mod clip_widget;
