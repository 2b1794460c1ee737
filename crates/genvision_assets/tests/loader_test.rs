//! Tests for animation loading.

use genvision_assets::{
    AnimationKind, AnimationSet, load_file, load_file_optional, load_url, load_url_optional,
};
use genvision_error::AssetLoadErrorKind;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOTTIE: &str = r#"{"v":"5.7.4","fr":30,"ip":0,"op":60,"w":200,"h":200,"layers":[]}"#;

#[test]
fn test_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spinner.json");
    fs::write(&path, LOTTIE).unwrap();

    let animation = load_file("spinner", &path).unwrap();
    assert_eq!(animation.name(), "spinner");
    assert_eq!(animation.definition()["fr"], 30);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_file("coding", dir.path().join("coding.json")).unwrap_err();
    assert!(matches!(err.kind, AssetLoadErrorKind::NotFound(_)));
}

#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("balloon.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_file("balloon", &path).unwrap_err();
    assert!(matches!(err.kind, AssetLoadErrorKind::Malformed(_)));

    fs::write(&path, "[1, 2, 3]").unwrap();
    let err = load_file("balloon", &path).unwrap_err();
    assert!(matches!(err.kind, AssetLoadErrorKind::Malformed(_)));
}

#[test]
fn test_non_utf8_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("coding.json");
    fs::write(&path, [0xFFu8, 0xFE, 0x7B, 0x7D]).unwrap();

    let err = load_file("coding", &path).unwrap_err();
    assert!(matches!(err.kind, AssetLoadErrorKind::Encoding(_)));
}

#[test]
fn test_optional_loader_swallows_errors() {
    let dir = TempDir::new().unwrap();
    assert!(load_file_optional("coding", dir.path().join("coding.json")).is_none());
}

#[test]
fn test_animation_set_partial_load() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("coding.json"), LOTTIE).unwrap();
    fs::write(dir.path().join("balloon.json"), "garbage").unwrap();

    let set = AnimationSet::load_from_dir(dir.path());
    assert_eq!(set.loaded_count(), 1);
    assert!(set.get(AnimationKind::Coding).is_some());
    assert!(set.get(AnimationKind::Spinner).is_none());
    assert!(set.get(AnimationKind::Balloon).is_none());
}

#[tokio::test]
async fn test_load_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/balloon.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOTTIE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let animation = load_url(&client, "balloon", &format!("{}/balloon.json", server.uri()))
        .await
        .unwrap();
    assert_eq!(animation.definition()["w"], 200);

    let err = load_url(&client, "missing", &format!("{}/missing.json", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, AssetLoadErrorKind::Http(_)));

    let skipped =
        load_url_optional(&client, "missing", &format!("{}/missing.json", server.uri())).await;
    assert!(skipped.is_none());
}
