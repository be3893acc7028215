//! One module per subcommand.  Each exposes an `execute` function.

pub mod add;
pub mod change_password;
pub mod completions;
pub mod copy;
pub mod db;
pub mod delete;
pub mod export;
pub mod generate;
pub mod init;
pub mod list;
pub mod status;
