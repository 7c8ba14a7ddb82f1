use hs_shared::AppConfig;

/// Load configuration from the environment and report risky settings
pub fn load() -> AppConfig {
    let config = AppConfig::from_env();

    if config.auth.is_using_default_secret() {
        if config.is_production() {
            log::error!("JWT_ACCESS_SECRET is not set; refusing the default secret in production");
        } else {
            log::warn!("JWT_ACCESS_SECRET is not set; using the development default");
        }
    }

    log::info!(
        "Environment: {}, overlap policy: {}",
        config.environment,
        config.booking.overlap_policy.as_str()
    );

    config
}

/// Whether startup should abort for this configuration
pub fn validate(config: &AppConfig) -> Result<(), String> {
    if config.is_production() && config.auth.is_using_default_secret() {
        return Err("JWT_ACCESS_SECRET must be set in production".to_string());
    }
    if config.database.url.trim().is_empty() {
        return Err("DATABASE_URL must be set".to_string());
    }
    Ok(())
}
