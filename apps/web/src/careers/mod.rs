// Careers: application form and the store-then-record submission path.

pub mod handlers;
pub mod submission;
