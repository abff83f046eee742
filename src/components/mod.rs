pub mod app;
pub mod canvas_measurer;
pub mod event_log;
pub mod label_stage;
pub mod settings_modal;
