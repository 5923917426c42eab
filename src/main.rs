use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

use lotofacil::config;
use lotofacil::connection::conn;
use lotofacil::use_cases::{CheckUseCase, GenerationUseCase};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Lotofácil generator starting.");

    let db_conn = conn(&config.database_url)?;
    let db_conn = Arc::new(Mutex::new(db_conn));

    let generation = GenerationUseCase::new(Arc::clone(&db_conn));
    let check = CheckUseCase::new(Arc::clone(&db_conn));

    let gen_config = generation.load_default_config()?;
    tracing::info!(
        target_count = gen_config.target_count,
        combination_size = gen_config.combination_size,
        "generating combinations from the saved defaults"
    );

    let requested = gen_config.target_count;
    let combinations = generation.generate_and_persist(gen_config).await?;
    if combinations.len() < requested {
        tracing::warn!(
            "produced {} of {} requested combinations",
            combinations.len(),
            requested
        );
    }
    for combination in &combinations {
        tracing::info!(
            "{:?} (sum {}, odd {}, primes {})",
            combination.numbers,
            combination.stats.sum,
            combination.stats.odd_count,
            combination.stats.prime_count
        );
    }

    match check.latest_draw()? {
        Some(draw) => {
            let checked = check.check_all_against(draw.contest_id)?;
            tracing::info!(
                contest_id = draw.contest_id,
                checked,
                "stored combinations checked against the latest draw"
            );
        }
        None => {
            tracing::info!("no official draws stored; skipping the result check");
        }
    }

    Ok(())
}
