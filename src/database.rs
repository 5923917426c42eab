use rusqlite::{Connection, OptionalExtension, Result};

use crate::types::{
    Combination, CombinationRow, OfficialDraw, PrizePayouts, join_numbers, parse_numbers,
};

pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS combinations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            numbers TEXT NOT NULL,
            even_count INTEGER NOT NULL,
            odd_count INTEGER NOT NULL,
            prime_count INTEGER NOT NULL,
            fibonacci_count INTEGER NOT NULL,
            core_count INTEGER NOT NULL,
            frame_count INTEGER NOT NULL,
            multiple_of_three_count INTEGER NOT NULL,
            total_sum INTEGER NOT NULL,
            is_favorite INTEGER NOT NULL DEFAULT 0,
            match_count INTEGER,
            checked_draw_id INTEGER,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS official_draws (
            contest_id INTEGER PRIMARY KEY,
            draw_date TEXT NOT NULL,
            numbers TEXT NOT NULL,
            prize_11 REAL NOT NULL DEFAULT 0,
            prize_12 REAL NOT NULL DEFAULT 0,
            prize_13 REAL NOT NULL DEFAULT 0,
            prize_14 REAL NOT NULL DEFAULT 0,
            prize_15 REAL NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

pub fn save_combination(conn: &Connection, combination: &Combination) -> Result<i64> {
    conn.execute(
        "INSERT INTO combinations (
            numbers, even_count, odd_count, prime_count, fibonacci_count,
            core_count, frame_count, multiple_of_three_count, total_sum,
            is_favorite, match_count, checked_draw_id, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        (
            join_numbers(&combination.numbers),
            combination.stats.even_count,
            combination.stats.odd_count,
            combination.stats.prime_count,
            combination.stats.fibonacci_count,
            combination.stats.core_count,
            combination.stats.frame_count,
            combination.stats.multiple_of_three_count,
            combination.stats.sum,
            combination.is_favorite,
            combination.check_result.map(|c| c.match_count),
            combination.check_result.map(|c| c.draw_id),
            combination.created_at.to_rfc3339(),
        ),
    )?;
    Ok(conn.last_insert_rowid())
}

/// One bulk persist per completed generation run.
pub fn save_combinations(conn: &Connection, combinations: &[Combination]) -> Result<Vec<i64>> {
    let mut ids = Vec::with_capacity(combinations.len());
    for combination in combinations {
        ids.push(save_combination(conn, combination)?);
    }
    Ok(ids)
}

const COMBINATION_COLUMNS: &str = "id, numbers, even_count, odd_count, prime_count, \
     fibonacci_count, core_count, frame_count, multiple_of_three_count, total_sum, \
     is_favorite, match_count, checked_draw_id, created_at";

fn row_from_sql(row: &rusqlite::Row<'_>) -> Result<CombinationRow> {
    Ok(CombinationRow {
        id: row.get(0)?,
        numbers: row.get(1)?,
        even_count: row.get(2)?,
        odd_count: row.get(3)?,
        prime_count: row.get(4)?,
        fibonacci_count: row.get(5)?,
        core_count: row.get(6)?,
        frame_count: row.get(7)?,
        multiple_of_three_count: row.get(8)?,
        sum: row.get(9)?,
        is_favorite: row.get(10)?,
        match_count: row.get(11)?,
        checked_draw_id: row.get(12)?,
        created_at: row.get(13)?,
    })
}

pub fn get_all_combinations(conn: &Connection) -> Result<Vec<CombinationRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM combinations ORDER BY id",
        COMBINATION_COLUMNS
    ))?;
    let combination_iter = stmt.query_map([], row_from_sql)?;

    let mut results = Vec::new();
    for combination in combination_iter {
        results.push(combination?);
    }
    Ok(results)
}

pub fn get_combination_by_id(conn: &Connection, id: i64) -> Result<Option<CombinationRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM combinations WHERE id = ?1",
        COMBINATION_COLUMNS
    ))?;
    let result = stmt.query_row([id], row_from_sql).optional()?;
    Ok(result)
}

pub fn get_favorite_combinations(conn: &Connection) -> Result<Vec<CombinationRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM combinations WHERE is_favorite = 1 ORDER BY id",
        COMBINATION_COLUMNS
    ))?;
    let combination_iter = stmt.query_map([], row_from_sql)?;

    let mut results = Vec::new();
    for combination in combination_iter {
        results.push(combination?);
    }
    Ok(results)
}

pub fn set_favorite(conn: &Connection, id: i64, favorite: bool) -> Result<()> {
    conn.execute(
        "UPDATE combinations SET is_favorite = ?1 WHERE id = ?2",
        (favorite, id),
    )?;
    Ok(())
}

pub fn set_check_result(conn: &Connection, id: i64, match_count: u8, draw_id: i64) -> Result<()> {
    conn.execute(
        "UPDATE combinations SET match_count = ?1, checked_draw_id = ?2 WHERE id = ?3",
        (match_count, draw_id, id),
    )?;
    Ok(())
}

pub fn delete_combination(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM combinations WHERE id = ?1", [id])?;
    Ok(())
}

pub fn delete_all_combinations(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM combinations", [])?;
    Ok(())
}

const DRAW_COLUMNS: &str =
    "contest_id, draw_date, numbers, prize_11, prize_12, prize_13, prize_14, prize_15";

pub fn save_official_draw(conn: &Connection, draw: &OfficialDraw) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO official_draws (
            contest_id, draw_date, numbers,
            prize_11, prize_12, prize_13, prize_14, prize_15
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        (
            draw.contest_id,
            &draw.draw_date,
            join_numbers(&draw.numbers),
            draw.payouts.prize_11,
            draw.payouts.prize_12,
            draw.payouts.prize_13,
            draw.payouts.prize_14,
            draw.payouts.prize_15,
        ),
    )?;
    Ok(())
}

fn draw_from_sql(row: &rusqlite::Row<'_>) -> Result<OfficialDraw> {
    let numbers: String = row.get(2)?;
    Ok(OfficialDraw {
        contest_id: row.get(0)?,
        draw_date: row.get(1)?,
        numbers: parse_numbers(&numbers),
        payouts: PrizePayouts {
            prize_11: row.get(3)?,
            prize_12: row.get(4)?,
            prize_13: row.get(5)?,
            prize_14: row.get(6)?,
            prize_15: row.get(7)?,
        },
    })
}

pub fn get_official_draw(conn: &Connection, contest_id: i64) -> Result<Option<OfficialDraw>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM official_draws WHERE contest_id = ?1",
        DRAW_COLUMNS
    ))?;
    let result = stmt.query_row([contest_id], draw_from_sql).optional()?;
    Ok(result)
}

pub fn get_latest_official_draw(conn: &Connection) -> Result<Option<OfficialDraw>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM official_draws ORDER BY contest_id DESC LIMIT 1",
        DRAW_COLUMNS
    ))?;
    let result = stmt.query_row([], draw_from_sql).optional()?;
    Ok(result)
}
