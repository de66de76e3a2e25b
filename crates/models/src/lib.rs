pub mod course_form;
pub mod department;
pub mod listing;
pub mod validation;
