use anyhow::Result;
use std::path::Path;

use crate::config::HostConfig;

pub fn show_config(config_file: &Path) -> Result<()> {
    let config = HostConfig::load(config_file)?;

    println!("bind_address         = {}", config.bind_address);
    println!("static_dir           = {}", config.static_dir.display());
    println!("background_dir       = {}", config.background_dir.display());
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    match config.validate() {
        Ok(_) => println!("status               = ok"),
        Err(e) => println!("status               = {}", e),
    }
    Ok(())
}
