use serde::Deserialize;

/// Runtime configuration for the remote storefront connection.
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    /// Base URL of the storefront service.
    pub base_url: String,
    /// ISO currency code used for gateway charges.
    pub currency: String,
    /// Public key id handed to the payment-gateway adapter.
    pub gateway_key_id: String,
}

impl RemoteConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("base_url", "http://127.0.0.1:8000")?
            .set_default("currency", "INR")?
            .set_default("gateway_key_id", "")?
            // Optional configuration files, then environment overrides
            // (e.g. `VESTA_BASE_URL`).
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("VESTA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
