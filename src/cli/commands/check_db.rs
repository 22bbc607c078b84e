//! Database connectivity check

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_check_db(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.database)?;

    match store.ping().await {
        Ok(()) => {
            println!("✓ Database reachable");
            Ok(())
        }
        Err(e) => {
            println!("✗ Database unreachable: {e}");
            Err(e)
        }
    }
}
