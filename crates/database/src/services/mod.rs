pub mod course;
pub mod department;
