mod command_result;
pub mod helper;
pub mod init;
pub mod sync;
pub mod unused;

pub use command_result::*;
