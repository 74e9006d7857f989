pub mod announcement;
pub mod health;
