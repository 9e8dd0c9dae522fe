pub mod comment;
pub mod errors;
pub mod reply;
pub mod thread;
pub mod validation;
