pub mod session_cleanup;
pub mod shutdown;
