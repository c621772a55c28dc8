pub mod daily_log;
pub mod size;
pub mod view;
