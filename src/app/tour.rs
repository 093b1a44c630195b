//! Tour use cases.

use crate::domain::tour::{DESCRIPTION_MAX_CHARS, DESTINATION_MAX_CHARS, TITLE_MAX_CHARS};
use crate::domain::TourRules;
use crate::error::AppError;
use crate::infra::Database;
use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

const TOUR_COLUMNS: &str = "id, title, description, price, destination, created_at";

#[derive(Debug, Clone, Deserialize)]
pub struct TourCreateReq {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub destination: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TourPriceReq {
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDeletedDto {
    pub id: i64,
}

impl TourCreateReq {
    /// Apply the field rules, returning the request with trimmed text.
    pub fn validated(self) -> Result<Self, AppError> {
        Ok(Self {
            title: TourRules::required_text("title", &self.title, TITLE_MAX_CHARS)?,
            description: TourRules::bounded_text(
                "description",
                &self.description,
                DESCRIPTION_MAX_CHARS,
            )?,
            price: TourRules::price(self.price)?,
            destination: TourRules::required_text(
                "destination",
                &self.destination,
                DESTINATION_MAX_CHARS,
            )?,
        })
    }
}

pub fn tour_create(db: &Database, req: TourCreateReq) -> Result<TourDto, AppError> {
    let TourCreateReq {
        title,
        description,
        price,
        destination,
    } = req.validated()?;
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let conn = db.connect()?;
    conn.execute(
        "INSERT INTO tours (title, description, price, destination, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![title, description, price, destination, now],
    )?;
    let id = conn.last_insert_rowid();

    // read back so id and created_at come from the row itself
    fetch_tour(&conn, id)
}

pub fn tour_get(db: &Database, id: i64) -> Result<TourDto, AppError> {
    let conn = db.connect()?;
    fetch_tour(&conn, id)
}

/// Newest first, at most `limit` tours whose title or description contains `q`.
///
/// `q` is a literal substring; LIKE wildcards in it are escaped. ASCII letters
/// compare case-insensitively (SQLite's default LIKE).
pub fn tour_list(db: &Database, limit: i64, q: &str) -> Result<Vec<TourDto>, AppError> {
    let limit = TourRules::limit(limit)?;
    let pattern = like_pattern(q);

    let conn = db.connect()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM tours
         WHERE title LIKE ?1 ESCAPE '\\' OR description LIKE ?1 ESCAPE '\\'
         ORDER BY id DESC
         LIMIT ?2",
        TOUR_COLUMNS
    ))?;
    let rows = stmt.query_map(params![pattern, limit], map_tour)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn tour_update_price(db: &Database, id: i64, price: f64) -> Result<TourDto, AppError> {
    let price = TourRules::price(price)?;
    let conn = db.connect()?;
    fetch_tour(&conn, id)?;
    conn.execute(
        "UPDATE tours SET price = ?1 WHERE id = ?2",
        params![price, id],
    )?;
    fetch_tour(&conn, id)
}

pub fn tour_delete(db: &Database, id: i64) -> Result<(), AppError> {
    let conn = db.connect()?;
    fetch_tour(&conn, id)?;
    conn.execute("DELETE FROM tours WHERE id = ?1", params![id])?;
    Ok(())
}

/// Internal helper to get a single tour on an open connection
fn fetch_tour(conn: &Connection, id: i64) -> Result<TourDto, AppError> {
    conn.query_row(
        &format!("SELECT {} FROM tours WHERE id = ?1", TOUR_COLUMNS),
        params![id],
        map_tour,
    )
    .optional()?
    .ok_or_else(|| AppError::tour_not_found(id))
}

fn map_tour(row: &Row<'_>) -> rusqlite::Result<TourDto> {
    Ok(TourDto {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        destination: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn like_pattern(q: &str) -> String {
    let mut pattern = String::with_capacity(q.len() + 2);
    pattern.push('%');
    for c in q.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern(""), "%%");
        assert_eq!(like_pattern("Paris"), "%Paris%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
