//! Read-only kanji and word reference data.

use crate::error::AppError;
use crate::model::{Kanji, Word, WordDetail, WordSummary};
use sqlx::SqlitePool;

pub struct KanjiService;

struct SampleKanji {
    kanji: &'static str,
    meaning: &'static str,
    kunyomi: Option<&'static str>,
    onyomi: Option<&'static str>,
    strokes: i64,
}

const SAMPLE_WORD: (&str, &str, &str) = (
    "配列",
    "はいれつ",
    "1) arrangement; disposition; 2) array (programming)",
);

const SAMPLE_KANJI: &[SampleKanji] = &[
    SampleKanji {
        kanji: "配",
        meaning: "distribute; spouse; exile; rationing",
        kunyomi: Some("くば.る"),
        onyomi: Some("ハイ"),
        strokes: 10,
    },
    SampleKanji {
        kanji: "列",
        meaning: "file; row; rank; tier; column",
        kunyomi: None,
        onyomi: Some("レツ;レ"),
        strokes: 6,
    },
];

impl KanjiService {
    pub async fn list_words(pool: &SqlitePool) -> Result<Vec<WordSummary>, AppError> {
        let rows = sqlx::query_as::<_, Word>("SELECT id, written, reading, meaning FROM word ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows.iter().map(Word::summary).collect())
    }

    pub async fn word_detail(pool: &SqlitePool, word: &Word) -> Result<WordDetail, AppError> {
        let kanji = sqlx::query_as::<_, Kanji>(
            r#"SELECT k.id, k.kanji, k.meaning, k.kunyomi, k.onyomi, k.strokes
               FROM kanji k
               JOIN word_components wc ON wc.kanji_id = k.id
               WHERE wc.word_id = ?
               ORDER BY k.id"#,
        )
        .bind(word.id)
        .fetch_all(pool)
        .await?;
        Ok(word.detail(&kanji))
    }

    /// Insert the built-in sample word and its kanji. Returns false without writing
    /// anything if the word is already present.
    pub async fn populate(pool: &SqlitePool) -> Result<bool, AppError> {
        let (written, reading, meaning) = SAMPLE_WORD;
        let mut tx = pool.begin().await?;
        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM word WHERE written = ?")
            .bind(written)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            tx.rollback().await?;
            tracing::debug!(word = written, "kanji sample already present");
            return Ok(false);
        }

        let word_id = sqlx::query("INSERT INTO word (written, reading, meaning) VALUES (?, ?, ?)")
            .bind(written)
            .bind(reading)
            .bind(meaning)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        for k in SAMPLE_KANJI {
            let kanji_id = sqlx::query(
                "INSERT INTO kanji (kanji, meaning, kunyomi, onyomi, strokes) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(k.kanji)
            .bind(k.meaning)
            .bind(k.kunyomi)
            .bind(k.onyomi)
            .bind(k.strokes)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
            sqlx::query("INSERT INTO word_components (word_id, kanji_id) VALUES (?, ?)")
                .bind(word_id)
                .bind(kanji_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        tracing::info!(word = written, kanji = SAMPLE_KANJI.len(), "kanji sample populated");
        Ok(true)
    }
}
