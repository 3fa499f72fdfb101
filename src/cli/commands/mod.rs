//! Each subcommand lives in its own file so the match in main stays thin.

mod demo;
mod hex;
mod levels;
mod log;

pub use demo::cmd_demo;
pub use hex::cmd_hex;
pub use levels::cmd_levels;
pub use log::cmd_log;
