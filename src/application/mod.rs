pub mod add_comment;
pub mod add_reply;
pub mod add_thread;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_thread_detail;
pub mod toggle_like_comment;
