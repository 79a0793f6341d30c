use serde::Serialize;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Word {
    pub id: i64,
    pub written: Option<String>,
    pub reading: Option<String>,
    pub meaning: Option<String>,
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Kanji {
    pub id: i64,
    pub kanji: Option<String>,
    pub meaning: Option<String>,
    pub kunyomi: Option<String>,
    pub onyomi: Option<String>,
    pub strokes: Option<i64>,
}

/// Short form used in listings and when nested inside a word.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WordSummary {
    pub written: Option<String>,
    pub reading: Option<String>,
    pub meaning: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WordDetail {
    pub written: Option<String>,
    pub reading: Option<String>,
    pub meaning: Option<String>,
    pub kanji_list: Vec<KanjiSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KanjiSummary {
    pub kanji: Option<String>,
    pub meaning: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KanjiDetail {
    pub kanji: Option<String>,
    pub meaning: Option<String>,
    pub kunyomi: Option<String>,
    pub onyomi: Option<String>,
    pub strokes: Option<i64>,
}

impl Word {
    pub fn summary(&self) -> WordSummary {
        WordSummary {
            written: self.written.clone(),
            reading: self.reading.clone(),
            meaning: self.meaning.clone(),
        }
    }

    pub fn detail(&self, kanji_list: &[Kanji]) -> WordDetail {
        WordDetail {
            written: self.written.clone(),
            reading: self.reading.clone(),
            meaning: self.meaning.clone(),
            kanji_list: kanji_list.iter().map(Kanji::summary).collect(),
        }
    }
}

impl Kanji {
    pub fn summary(&self) -> KanjiSummary {
        KanjiSummary {
            kanji: self.kanji.clone(),
            meaning: self.meaning.clone(),
        }
    }

    pub fn detail(&self) -> KanjiDetail {
        KanjiDetail {
            kanji: self.kanji.clone(),
            meaning: self.meaning.clone(),
            kunyomi: self.kunyomi.clone(),
            onyomi: self.onyomi.clone(),
            strokes: self.strokes,
        }
    }
}
