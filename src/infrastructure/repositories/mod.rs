pub mod sqlx_comment_like_repository;
pub mod sqlx_comment_repository;
pub mod sqlx_reply_repository;
pub mod sqlx_thread_repository;
