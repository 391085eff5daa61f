use super::*;

/// Get the current configuration.
pub fn build_config() -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(real_filesystem())
}

/// Get the configuration, reading the config file (if any) from the given filesystem.
pub fn build_config_with(fs: Filesystem) -> Result<MasterConfig, Box<dyn Error>> {
    let mut builder = ConfigBuilder::new(config_entries());
    if fs.is_file(DEFAULT_TOML_PATH) {
        debug!("loading configuration from {}", DEFAULT_TOML_PATH);
        load_toml(DEFAULT_TOML_PATH, &mut builder, &*fs)?;
    } else {
        debug!("{} not found, using default configuration", DEFAULT_TOML_PATH);
    }
    let mut conf = MasterConfig::default();
    builder.apply_to(&mut conf)?;
    Ok(conf)
}
