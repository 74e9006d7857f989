pub mod announcement;
pub mod dispatch_result;
pub mod push_job;
pub mod recipient;
pub mod sms_job;
