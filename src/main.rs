// src/main.rs
use dotenvy::dotenv;
use std::process::ExitCode;

use railqr_seed::config::Config;
use railqr_seed::database;
use railqr_seed::error::AppError;
use railqr_seed::seed::{ensure_admin_seeded, SeedOptions};
use railqr_seed::store::PgUserStore;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the status line.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenv().ok();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let report = e.report();
            tracing::error!(error = %report, "database setup failed");
            eprintln!("Database setup failed: {report}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db_pool = database::create_pool(&config).await?;
    tracing::info!("connected to database");

    let store = PgUserStore::new(db_pool);
    let result = ensure_admin_seeded(&store, &SeedOptions::from(&config)).await;

    // Release connections whether or not seeding succeeded.
    store.close().await;

    let outcome = result?;
    println!("{outcome}");
    Ok(())
}
