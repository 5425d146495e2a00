//! Handlers for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;

/// Execute `config show`.
pub fn execute_show(service: &dyn OperatorPort, path: &Path) -> Result<()> {
    let view = service.show_config(&operator::read_config_toml(path)?)?;

    output::section("Server");
    output::field("Listen", &view.listen);
    if view.cors_origins.is_empty() {
        output::field("CORS origins", "any");
    } else {
        output::field("CORS origins", view.cors_origins.join(", "));
    }

    output::section("Database");
    output::field("Path", &view.database_path);
    output::field("Pool size", view.pool_size);

    output::section("Auth");
    output::field(
        "Token secret",
        if view.token_secret_loaded { "loaded" } else { "missing" },
    );
    output::field("Session TTL", format!("{}h", view.session_ttl_hours));
    output::field("bcrypt cost", view.bcrypt_cost);

    output::section("Storage");
    output::field("Media root", &view.media_root);
    output::field("Public URL", &view.public_base_url);
    output::field("Max upload", format!("{} MB", view.max_upload_mb));

    output::section("Checkout");
    output::field(
        "Free delivery",
        format!("over ${}", view.checkout.free_delivery_threshold),
    );
    output::field("Delivery fee", format!("${}", view.checkout.delivery_fee));
    output::field("Tax rate", view.checkout.tax_rate);

    output::section("Logging");
    output::field("Level", &view.log_level);
    output::field("Format", &view.log_format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(service: &dyn OperatorPort, path: &Path) -> Result<()> {
    let report = service.validate_config(&operator::read_config_toml(path)?)?;
    for warning in &report.warnings {
        output::warning(warning);
    }
    output::success("Configuration is valid");
    output::field("Path", path.display());
    Ok(())
}
