pub mod history;
pub mod today;

mod history_test;
