//! Connectivity check against the configured studio backend: loads the
//! reference read endpoints once and reports the record counts.

use std::env;

use config::Config;
use dotenvy::dotenv;

use studio_crm::models::config::AppConfig;
use studio_crm::repository::{ClientReader, PaymentReader, RestRepository, ServiceReader};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match RestRepository::new(&app_config.api_base_url, app_config.api_token.clone()) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to build REST client: {err}");
            std::process::exit(1);
        }
    };

    log::info!("Checking backend at {}", app_config.api_base_url);

    let mut failures = 0;

    match repo.list_clients() {
        Ok(clients) => log::info!("Clients: {}", clients.len()),
        Err(err) => {
            log::error!("Failed to list clients: {err}");
            failures += 1;
        }
    }

    match repo.list_services() {
        Ok(services) => log::info!("Services: {}", services.len()),
        Err(err) => {
            log::error!("Failed to list services: {err}");
            failures += 1;
        }
    }

    match repo.list_payments() {
        Ok(payments) => log::info!("Payments: {}", payments.len()),
        Err(err) => {
            log::error!("Failed to list payments: {err}");
            failures += 1;
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
