//! Tests for HTML rendering.

use genvision::{
    Animation, AnimationKind, AnimationSet, PageContent, PresentationConfig, SanitizedResponse,
    SuccessAnimationPlacement, render_page, render_response,
};
use serde_json::json;

fn animations() -> AnimationSet {
    let mut set = AnimationSet::default();
    set.set(
        AnimationKind::Balloon,
        Some(Animation::new("balloon", json!({ "v": "5.7.4", "nm": "</script>" }))),
    );
    set.set(
        AnimationKind::Spinner,
        Some(Animation::new("spinner", json!({ "v": "5.7.4" }))),
    );
    set
}

#[test]
fn test_response_embedded_in_styled_container() {
    let html = render_response(
        &PresentationConfig::default(),
        &SanitizedResponse::new("A <b>cat</b>."),
    );
    assert!(html.starts_with(
        "<div style=\"background-color: #6EF5FC; padding: 15px; border-radius: 10px; font-size: 16px;\">"
    ));
    assert!(html.contains("A <b>cat</b>."));
    assert!(html.ends_with("</div>"));
    assert_eq!(html.matches("</div>").count(), 1);
}

#[test]
fn test_success_animation_placement() {
    let response = PageContent::Response(SanitizedResponse::new("A cat."));

    let above = render_page(&PresentationConfig::default(), &animations(), &response);
    let balloon = above.find("class=\"balloon-container\"").unwrap();
    let heading = above.find("The Response is:").unwrap();
    assert!(balloon < heading);

    let config = PresentationConfig::default()
        .with_success_animation(SuccessAnimationPlacement::BelowResponse);
    let below = render_page(&config, &animations(), &response);
    let balloon = below.find("class=\"balloon-container\"").unwrap();
    let heading = below.find("The Response is:").unwrap();
    assert!(balloon > heading);

    let config =
        PresentationConfig::default().with_success_animation(SuccessAnimationPlacement::Hidden);
    let hidden = render_page(&config, &animations(), &response);
    assert!(!hidden.contains("class=\"balloon-container\""));
}

#[test]
fn test_animation_json_cannot_close_script() {
    let page = render_page(
        &PresentationConfig::default(),
        &animations(),
        &PageContent::Response(SanitizedResponse::new("ok")),
    );
    assert!(page.contains("<\\/script>"));
    assert_eq!(page.matches("</script>").count(), 1);
}

#[test]
fn test_error_message_is_escaped() {
    let page = render_page(
        &PresentationConfig::default(),
        &AnimationSet::default(),
        &PageContent::Error("bad <input>".to_string()),
    );
    assert!(page.contains("<p class=\"error\">bad &lt;input&gt;</p>"));
    assert!(!page.contains("The Response is:"));
}

#[test]
fn test_loading_indicator_falls_back_without_spinner() {
    let config = PresentationConfig::default();

    assert_eq!(config.loading_text(&animations()), "Ideas Catching Fire... 🔥");
    assert_eq!(
        config.loading_text(&AnimationSet::default()),
        "Generating response..."
    );
}
