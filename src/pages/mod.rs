pub mod catalog;
pub mod contracts;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod groups;
pub mod inventory;
pub mod invoices;
pub mod leads;
pub mod partners;
pub mod sessions;
pub mod settings;
pub mod students;
pub mod teachers;
