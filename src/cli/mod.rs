pub mod resume;
pub mod send;
pub mod server;
