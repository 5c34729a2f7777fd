//! Pet Clinic web server binary.
//!
//! # Environment Variables
//! - `PETCLINIC_ADDR`: Server address (default: "0.0.0.0:8080")
//! - `PETCLINIC_DB_PATH`: SQLite file, or `:memory:` (default: "petclinic.db")
//! - `PETCLINIC_SEED`: Load sample data at startup (default: false)
//!
//! A `.env` file in the working directory is read first if present.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use petclinic_web::{open_clinic, router, WebConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("petclinic_web=info".parse()?)
                .add_directive("petclinic_core=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = WebConfig::from_env()?;
    tracing::info!("-- Starting Pet Clinic on {}", cfg.addr);

    let clinic = open_clinic(&cfg)?;
    let app = router(clinic);

    let listener = tokio::net::TcpListener::bind(&cfg.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
