mod common;

use axum::http::StatusCode;
use resource_hub::KanjiService;
use serde_json::json;

#[tokio::test]
async fn populate_is_idempotent() {
    let app = common::spawn_app().await;
    assert!(KanjiService::populate(&app.pool).await.unwrap());
    assert!(!KanjiService::populate(&app.pool).await.unwrap());
    assert_eq!(app.count("word").await, 1);
    assert_eq!(app.count("kanji").await, 2);
    assert_eq!(app.count("word_components").await, 2);
}

#[tokio::test]
async fn word_listing_uses_short_form() {
    let app = common::spawn_app().await;
    KanjiService::populate(&app.pool).await.unwrap();
    let res = app.get("/api/words/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!([{
            "written": "配列",
            "reading": "はいれつ",
            "meaning": "1) arrangement; disposition; 2) array (programming)"
        }])
    );
}

#[tokio::test]
async fn word_detail_lists_component_kanji() {
    let app = common::spawn_app().await;
    KanjiService::populate(&app.pool).await.unwrap();
    let res = app.get("/api/words/%E9%85%8D%E5%88%97/").await;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["written"], "配列");
    assert_eq!(
        body["kanji_list"],
        json!([
            {"kanji": "配", "meaning": "distribute; spouse; exile; rationing"},
            {"kanji": "列", "meaning": "file; row; rank; tier; column"}
        ])
    );
}

#[tokio::test]
async fn kanji_detail_uses_full_form() {
    let app = common::spawn_app().await;
    KanjiService::populate(&app.pool).await.unwrap();
    let res = app.get("/api/kanji/%E5%88%97/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!({
            "kanji": "列",
            "meaning": "file; row; rank; tier; column",
            "kunyomi": null,
            "onyomi": "レツ;レ",
            "strokes": 6
        })
    );
}

#[tokio::test]
async fn unknown_word_or_kanji_is_not_found() {
    let app = common::spawn_app().await;
    assert_eq!(app.get("/api/words/nothing/").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/api/kanji/x/").await.status, StatusCode::NOT_FOUND);
}
