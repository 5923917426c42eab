use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub fn conn(database_url: &str) -> Result<Connection> {
    if let Some(dir) = Path::new(database_url).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating database directory {}", dir.display()))?;
        }
    }

    let conn = Connection::open(database_url)
        .with_context(|| format!("opening database {}", database_url))?;

    crate::database::create_schema(&conn)?;

    Ok(conn)
}
