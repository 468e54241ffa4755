pub mod common;
pub mod heart;
pub mod nutrition;
pub mod sleep;
