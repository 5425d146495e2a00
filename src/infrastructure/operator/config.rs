//! Configuration operator implementation.

use crate::error::Result;
use crate::port::inbound::operator::config::{
    ConfigCheckout, ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Self::load_config(config_toml)?;

        Ok(ConfigView {
            listen: config.server.bind_address(),
            cors_origins: config.server.cors_origins.clone(),
            database_path: config.database.path.clone(),
            pool_size: config.database.pool_size,
            token_secret_loaded: config.auth.token_secret.is_some(),
            session_ttl_hours: config.auth.session_ttl_hours,
            bcrypt_cost: config.auth.bcrypt_cost,
            media_root: config.storage.media_root.clone(),
            public_base_url: config.storage.public_base_url.clone(),
            max_upload_mb: config.storage.max_upload_mb,
            checkout: ConfigCheckout {
                free_delivery_threshold: config.checkout.free_delivery_threshold,
                delivery_fee: config.checkout.delivery_fee,
                tax_rate: config.checkout.tax_rate,
            },
            log_level: config.logging.level.clone(),
            log_format: config.logging.format.clone(),
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Self::load_config(config_toml)?;
        let mut warnings = Vec::new();

        if config.server.cors_origins.is_empty() {
            warnings.push("server.cors_origins is empty; any origin may call the API".to_string());
        }
        if config.auth.bcrypt_cost < 10 {
            warnings.push(format!(
                "auth.bcrypt_cost {} is below the recommended 10",
                config.auth.bcrypt_cost
            ));
        }
        if config.checkout.delivery_fee > config.checkout.free_delivery_threshold {
            warnings.push("checkout.delivery_fee exceeds the free delivery threshold".to_string());
        }

        Ok(ConfigValidationReport { warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn toml(extra: &str) -> String {
        format!("[auth]\ntoken_secret = \"{SECRET}\"\nbcrypt_cost = 12\n{extra}")
    }

    #[test]
    fn show_config_hides_secret() {
        let view = Operator.show_config(&toml("")).unwrap();
        assert!(view.token_secret_loaded);
        assert_eq!(view.listen, "127.0.0.1:8080");
        assert_eq!(view.bcrypt_cost, 12);
        assert!(!format!("{view:?}").contains(SECRET));
    }

    #[test]
    fn validate_warns_on_open_cors() {
        let report = Operator.validate_config(&toml("")).unwrap();
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning.contains("cors_origins")));
    }

    #[test]
    fn validate_is_quiet_for_restricted_cors() {
        let config = toml("[server]\ncors_origins = [\"https://shop.example\"]\n");
        let report = Operator.validate_config(&config).unwrap();
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }
}
