//! User preferences: the saved default generation config, stored as JSON
//! in a key/value table.

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

use crate::types::GenerationConfig;

const DEFAULT_CONFIG_KEY: &str = "default_generation_config";

pub fn save_default_config(conn: &Connection, config: &GenerationConfig) -> Result<()> {
    let value = serde_json::to_string(config)?;
    conn.execute(
        "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
        (DEFAULT_CONFIG_KEY, &value),
    )?;
    Ok(())
}

/// Falls back to `GenerationConfig::default()` when nothing was saved yet.
pub fn load_default_config(conn: &Connection) -> Result<GenerationConfig> {
    let mut stmt = conn.prepare("SELECT value FROM preferences WHERE key = ?1")?;
    let value: Option<String> = stmt
        .query_row([DEFAULT_CONFIG_KEY], |row| row.get(0))
        .optional()?;

    match value {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(GenerationConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Bound;
    use crate::database::create_schema;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("in-memory database");
        create_schema(&conn).expect("schema");
        conn
    }

    #[test]
    fn missing_preference_falls_back_to_default() {
        let conn = test_conn();
        let config = load_default_config(&conn).expect("load");
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn save_then_load_round_trip() {
        let conn = test_conn();
        let mut config = GenerationConfig::default();
        config.target_count = 7;
        config.combination_size = 17;
        config.fixed_numbers = vec![5, 10];
        config.bounds.odd = Bound::between(7, 10);

        save_default_config(&conn, &config).expect("save");
        assert_eq!(load_default_config(&conn).expect("load"), config);
    }

    #[test]
    fn saving_twice_overwrites() {
        let conn = test_conn();
        let mut config = GenerationConfig::default();
        save_default_config(&conn, &config).expect("save");

        config.target_count = 20;
        save_default_config(&conn, &config).expect("save again");
        assert_eq!(load_default_config(&conn).expect("load").target_count, 20);
    }
}
