//! Schema DDL: tables, uniqueness, foreign keys and their delete policies.
//! Order follows foreign-key dependencies (parents before children).

use crate::error::AppError;
use sqlx::SqlitePool;

const SCHEMA: &[(&str, &str)] = &[
    (
        "product",
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            handle VARCHAR(80) NOT NULL UNIQUE,
            weight REAL NOT NULL,
            price REAL NOT NULL
        )
        "#,
    ),
    (
        "storage_item",
        r#"
        CREATE TABLE IF NOT EXISTS storage_item (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER NOT NULL REFERENCES product(id) ON DELETE CASCADE,
            location VARCHAR(64) NOT NULL,
            qty INTEGER NOT NULL
        )
        "#,
    ),
    (
        "location",
        r#"
        CREATE TABLE IF NOT EXISTS location (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(128) NOT NULL,
            latitude REAL,
            longitude REAL,
            altitude REAL,
            description VARCHAR(256)
        )
        "#,
    ),
    (
        "deployment",
        r#"
        CREATE TABLE IF NOT EXISTS deployment (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "start" DATETIME NOT NULL,
            "end" DATETIME NOT NULL,
            name VARCHAR(128) NOT NULL
        )
        "#,
    ),
    (
        "sensor",
        r#"
        CREATE TABLE IF NOT EXISTS sensor (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(32) NOT NULL UNIQUE,
            model VARCHAR(128) NOT NULL,
            location_id INTEGER UNIQUE REFERENCES location(id) ON DELETE SET NULL
        )
        "#,
    ),
    (
        "deployments",
        r#"
        CREATE TABLE IF NOT EXISTS deployments (
            deployment_id INTEGER NOT NULL REFERENCES deployment(id) ON DELETE CASCADE,
            sensor_id INTEGER NOT NULL REFERENCES sensor(id) ON DELETE CASCADE,
            PRIMARY KEY (deployment_id, sensor_id)
        )
        "#,
    ),
    (
        "measurement",
        r#"
        CREATE TABLE IF NOT EXISTS measurement (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sensor_id INTEGER REFERENCES sensor(id) ON DELETE SET NULL,
            value REAL NOT NULL,
            time DATETIME NOT NULL
        )
        "#,
    ),
    (
        "word",
        r#"
        CREATE TABLE IF NOT EXISTS word (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            written VARCHAR(32),
            reading VARCHAR(64),
            meaning VARCHAR(256)
        )
        "#,
    ),
    (
        "kanji",
        r#"
        CREATE TABLE IF NOT EXISTS kanji (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kanji VARCHAR(8),
            meaning VARCHAR(256),
            kunyomi VARCHAR(256),
            onyomi VARCHAR(256),
            strokes INTEGER
        )
        "#,
    ),
    (
        "word_components",
        r#"
        CREATE TABLE IF NOT EXISTS word_components (
            word_id INTEGER NOT NULL REFERENCES word(id) ON DELETE CASCADE,
            kanji_id INTEGER NOT NULL REFERENCES kanji(id) ON DELETE CASCADE,
            PRIMARY KEY (word_id, kanji_id)
        )
        "#,
    ),
];

/// Create every table that does not exist yet. Idempotent; runs in one transaction so a
/// failure leaves no half-created schema.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for (table, ddl) in SCHEMA {
        tracing::debug!(table = %table, "ensure table");
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(tables = SCHEMA.len(), "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connect_in_memory;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn creates_all_tables_and_is_idempotent() {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let mut expected: Vec<String> = SCHEMA.iter().map(|(t, _)| t.to_string()).collect();
        expected.sort();
        assert_eq!(table_names(&pool).await, expected);
    }

    #[tokio::test]
    async fn deleting_a_sensor_keeps_its_measurements() {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        sqlx::query("INSERT INTO sensor (name, model) VALUES ('temp-1', 'uoc-1')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO measurement (sensor_id, value, time) VALUES (1, 21.5, '2023-01-01T00:00:00')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM sensor WHERE name = 'temp-1'")
            .execute(&pool)
            .await
            .unwrap();
        let row: (Option<i64>, f64) = sqlx::query_as("SELECT sensor_id, value FROM measurement")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row, (None, 21.5));
    }

    #[tokio::test]
    async fn storage_item_requires_existing_product() {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let err = sqlx::query("INSERT INTO storage_item (product_id, location, qty) VALUES (99, 'A1', 3)")
            .execute(&pool)
            .await
            .unwrap_err();
        match err {
            sqlx::Error::Database(db) => assert!(db.is_foreign_key_violation()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
