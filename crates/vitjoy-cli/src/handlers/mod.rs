pub mod browse;
pub mod display;
pub mod doctor;
pub mod list;
pub mod show;
