//! Natural-key resolution. `find_*` returns `None` when no row matches; `resolve_*` turns
//! that into `AppError::NotFound` for use as a precondition gate in handlers.

use crate::error::AppError;
use crate::model::{Kanji, Measurement, Product, Sensor, Word};
use sqlx::SqlitePool;

pub struct Lookup;

impl Lookup {
    pub async fn find_product(pool: &SqlitePool, handle: &str) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, Product>(
            "SELECT id, handle, weight, price FROM product WHERE handle = ?",
        )
        .bind(handle)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn resolve_product(pool: &SqlitePool, handle: &str) -> Result<Product, AppError> {
        Self::find_product(pool, handle)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product '{}'", handle)))
    }

    pub async fn find_sensor(pool: &SqlitePool, name: &str) -> Result<Option<Sensor>, AppError> {
        let row = sqlx::query_as::<_, Sensor>(
            "SELECT id, name, model, location_id FROM sensor WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn resolve_sensor(pool: &SqlitePool, name: &str) -> Result<Sensor, AppError> {
        Self::find_sensor(pool, name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("sensor '{}'", name)))
    }

    /// Measurement by surrogate id, whichever sensor (if any) still owns it.
    pub async fn find_measurement(pool: &SqlitePool, id: i64) -> Result<Option<Measurement>, AppError> {
        let row = sqlx::query_as::<_, Measurement>(
            "SELECT id, sensor_id, value, time FROM measurement WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// The path id is taken verbatim from the URL; anything that is not an integer cannot
    /// name a row and resolves to `NotFound`. Rows orphaned by a sensor delete still resolve.
    pub async fn resolve_measurement(pool: &SqlitePool, id: &str) -> Result<Measurement, AppError> {
        let not_found = || AppError::NotFound(format!("measurement '{}'", id));
        let id: i64 = id.parse().map_err(|_| not_found())?;
        Self::find_measurement(pool, id).await?.ok_or_else(not_found)
    }

    /// Measurement by id, restricted to those owned by `sensor`.
    pub async fn resolve_sensor_measurement(
        pool: &SqlitePool,
        sensor: &Sensor,
        id: &str,
    ) -> Result<Measurement, AppError> {
        let not_found = || AppError::NotFound(format!("measurement '{}' of sensor '{}'", id, sensor.name));
        let id: i64 = id.parse().map_err(|_| not_found())?;
        let row = sqlx::query_as::<_, Measurement>(
            "SELECT id, sensor_id, value, time FROM measurement WHERE id = ? AND sensor_id = ?",
        )
        .bind(id)
        .bind(sensor.id)
        .fetch_optional(pool)
        .await?;
        row.ok_or_else(not_found)
    }

    /// First word (by insertion order) with the given written form.
    pub async fn find_word(pool: &SqlitePool, written: &str) -> Result<Option<Word>, AppError> {
        let row = sqlx::query_as::<_, Word>(
            "SELECT id, written, reading, meaning FROM word WHERE written = ? ORDER BY id LIMIT 1",
        )
        .bind(written)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn resolve_word(pool: &SqlitePool, written: &str) -> Result<Word, AppError> {
        Self::find_word(pool, written)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("word '{}'", written)))
    }

    pub async fn find_kanji(pool: &SqlitePool, glyph: &str) -> Result<Option<Kanji>, AppError> {
        let row = sqlx::query_as::<_, Kanji>(
            "SELECT id, kanji, meaning, kunyomi, onyomi, strokes FROM kanji WHERE kanji = ? ORDER BY id LIMIT 1",
        )
        .bind(glyph)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn resolve_kanji(pool: &SqlitePool, glyph: &str) -> Result<Kanji, AppError> {
        Self::find_kanji(pool, glyph)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("kanji '{}'", glyph)))
    }
}
