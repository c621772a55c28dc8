pub mod breakdown;
pub mod dashboard_service;
pub mod dto;
pub mod range;
