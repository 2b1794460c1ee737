//! End-to-end: image file on disk, stub model, rendered page.

use async_trait::async_trait;
use genvision::{
    AnimationSet, GenVisionResult, ModelClient, ModelRequest, ModelResponse, PageContent,
    Pipeline, PresentationConfig, UserInput, load_image, render_page,
};

struct CatDescriber;

#[async_trait]
impl ModelClient for CatDescriber {
    fn model_name(&self) -> &str {
        "cat-describer"
    }

    async fn generate(&self, request: &ModelRequest) -> GenVisionResult<ModelResponse> {
        assert_eq!(request.text(), Some("Describe this"));
        assert_eq!(
            request.image().map(|image| image.mime().as_str()),
            Some("image/png")
        );
        Ok(ModelResponse::new("A cat.</div>\n"))
    }
}

#[test]
fn test_load_image_rejects_unsupported_types() {
    let dir = tempfile::tempdir().unwrap();
    let gif = dir.path().join("cat.gif");
    std::fs::write(&gif, b"GIF89a").unwrap();
    assert!(load_image(&gif).is_err());

    let empty = dir.path().join("empty.png");
    std::fs::write(&empty, b"").unwrap();
    assert!(load_image(&empty).is_err());

    assert!(load_image(dir.path().join("missing.jpg")).is_err());
}

#[tokio::test]
async fn test_image_file_to_rendered_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cat.PNG");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let image = load_image(&path).unwrap();
    let pipeline = Pipeline::new(CatDescriber);
    let response = pipeline
        .run(UserInput::new(Some("Describe this".to_string()), Some(image)))
        .await
        .unwrap();
    assert_eq!(response.display_text(), "A cat.");

    let page = render_page(
        &PresentationConfig::default(),
        &AnimationSet::default(),
        &PageContent::Response(response),
    );
    assert!(page.contains("\nA cat.\n</div>"));
}
