pub mod api;
pub mod course;
pub mod departments;
pub mod health;
