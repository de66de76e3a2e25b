pub mod course;
pub mod department;
pub mod meeting;
pub mod number;
pub mod professor;
pub mod section;
pub mod session;
