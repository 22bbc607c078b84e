mod check_db;
mod init_config;

pub use check_db::cmd_check_db;
pub use init_config::cmd_init_config;
