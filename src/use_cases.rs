use anyhow::Result;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::checker;
use crate::database;
use crate::generator::{self, CancelFlag};
use crate::preferences;
use crate::types::{Combination, CombinationRow, GenerationConfig, OfficialDraw};

fn lock(connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>> {
    connection
        .lock()
        .map_err(|_| anyhow::anyhow!("database lock poisoned"))
}

pub struct GenerationUseCase {
    connection: Arc<Mutex<Connection>>,
}

impl GenerationUseCase {
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    /// Runs the sampling loop on a blocking worker so the async executor
    /// never stalls, then persists the whole batch in one write.
    pub async fn generate_and_persist(&self, config: GenerationConfig) -> Result<Vec<Combination>> {
        self.generate_and_persist_with_cancel(config, CancelFlag::new())
            .await
    }

    pub async fn generate_and_persist_with_cancel(
        &self,
        config: GenerationConfig,
        cancel: CancelFlag,
    ) -> Result<Vec<Combination>> {
        let target_count = config.target_count;
        let combinations =
            tokio::task::spawn_blocking(move || generator::generate_with_cancel(&config, &cancel))
                .await??;

        if combinations.len() < target_count {
            tracing::warn!(
                accepted = combinations.len(),
                requested = target_count,
                "retry budget exhausted before reaching the requested count"
            );
        }

        let conn = lock(&self.connection)?;
        database::save_combinations(&conn, &combinations)?;
        tracing::info!(count = combinations.len(), "combinations persisted");

        Ok(combinations)
    }

    pub fn load_default_config(&self) -> Result<GenerationConfig> {
        preferences::load_default_config(&*lock(&self.connection)?)
    }

    pub fn save_default_config(&self, config: &GenerationConfig) -> Result<()> {
        preferences::save_default_config(&*lock(&self.connection)?, config)
    }

    pub fn load_all(&self) -> Result<Vec<CombinationRow>> {
        Ok(database::get_all_combinations(&*lock(&self.connection)?)?)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        Ok(database::delete_combination(&*lock(&self.connection)?, id)?)
    }

    pub fn delete_all(&self) -> Result<()> {
        Ok(database::delete_all_combinations(&*lock(&self.connection)?)?)
    }
}

pub struct CheckUseCase {
    connection: Arc<Mutex<Connection>>,
}

impl CheckUseCase {
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    pub fn save_draw(&self, draw: &OfficialDraw) -> Result<()> {
        Ok(database::save_official_draw(&*lock(&self.connection)?, draw)?)
    }

    pub fn latest_draw(&self) -> Result<Option<OfficialDraw>> {
        Ok(database::get_latest_official_draw(&*lock(
            &self.connection,
        )?)?)
    }

    /// Counts matches for every stored combination against the given
    /// contest and writes the result back to each row.
    pub fn check_all_against(&self, contest_id: i64) -> Result<usize> {
        let conn = lock(&self.connection)?;
        let draw = database::get_official_draw(&conn, contest_id)?.ok_or_else(|| {
            anyhow::anyhow!("no official draw stored for contest {}", contest_id)
        })?;

        let rows = database::get_all_combinations(&conn)?;
        for row in &rows {
            let match_count = checker::count_matches(&row.numbers_vec(), &draw);
            database::set_check_result(&conn, row.id, match_count, draw.contest_id)?;
        }

        tracing::info!(
            contest_id,
            combinations = rows.len(),
            "match counts updated"
        );
        Ok(rows.len())
    }
}

pub struct FavoriteUseCase {
    connection: Arc<Mutex<Connection>>,
}

impl FavoriteUseCase {
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    pub fn set_favorite(&self, id: i64, favorite: bool) -> Result<()> {
        Ok(database::set_favorite(&*lock(&self.connection)?, id, favorite)?)
    }

    pub fn favorites(&self) -> Result<Vec<CombinationRow>> {
        Ok(database::get_favorite_combinations(&*lock(
            &self.connection,
        )?)?)
    }
}
