//! HTML presentation layer.
//!
//! The page layout is fixed; text, container styling, and where the success
//! animation appears are configurable. Animation playback is left to the
//! page's own scripts: animations are embedded as JSON data blocks.

use derive_getters::Getters;
use genvision_assets::{AnimationKind, AnimationSet};
use genvision_core::SanitizedResponse;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Where the success animation goes relative to the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessAnimationPlacement {
    /// Before the response heading
    #[default]
    AboveResponse,
    /// After the response container
    BelowResponse,
    /// Not shown
    Hidden,
}

/// Inline style of the response container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ContainerStyle {
    background_color: String,
    padding: String,
    border_radius: String,
    font_size: String,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            background_color: "#6EF5FC".to_string(),
            padding: "15px".to_string(),
            border_radius: "10px".to_string(),
            font_size: "16px".to_string(),
        }
    }
}

impl ContainerStyle {
    /// CSS declaration list for a `style` attribute.
    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; padding: {}; border-radius: {}; font-size: {};",
            self.background_color, self.padding, self.border_radius, self.font_size
        )
    }
}

/// Page text and layout options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct PresentationConfig {
    title: String,
    subtitle: String,
    response_heading: String,
    loading_message: String,
    fallback_loading_message: String,
    container: ContainerStyle,
    success_animation: SuccessAnimationPlacement,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            title: "GEN Vision AI Assistant".to_string(),
            subtitle: "See the better future with GEN-Vision".to_string(),
            response_heading: "The Response is:".to_string(),
            loading_message: "Ideas Catching Fire... 🔥".to_string(),
            fallback_loading_message: "Generating response...".to_string(),
            container: ContainerStyle::default(),
            success_animation: SuccessAnimationPlacement::default(),
        }
    }
}

impl PresentationConfig {
    /// Same configuration with a different success animation placement.
    pub fn with_success_animation(mut self, placement: SuccessAnimationPlacement) -> Self {
        self.success_animation = placement;
        self
    }

    /// Message shown while a request is in flight: the loading message when
    /// the spinner animation is available, the fallback message otherwise.
    pub fn loading_text(&self, animations: &AnimationSet) -> &str {
        if animations.get(AnimationKind::Spinner).is_some() {
            &self.loading_message
        } else {
            &self.fallback_loading_message
        }
    }
}

/// What the main area of the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// Nothing submitted yet
    Idle,
    /// A sanitized model response
    Response(SanitizedResponse),
    /// A message for the user after a failed submission
    Error(String),
}

/// Escape text for use in HTML element content or attribute values.
///
/// # Examples
///
/// ```
/// use genvision::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Embeds the response text in the styled container.
///
/// The text is inserted as-is: the model may answer with markup, and only
/// a trailing `</div>` has been removed upstream.
pub fn render_response(config: &PresentationConfig, response: &SanitizedResponse) -> String {
    format!(
        "<div style=\"{}\">\n{}\n</div>",
        escape_html(&config.container.to_css()),
        response.display_text()
    )
}

fn animation_block(animations: &AnimationSet, kind: AnimationKind, id: &str) -> Option<String> {
    let animation = animations.get(kind)?;
    // Keep the JSON from closing the surrounding script element.
    let json = animation.definition().to_string().replace("</", "<\\/");
    Some(format!(
        "<script type=\"application/json\" id=\"{}\" data-animation=\"{}\">{}</script>",
        escape_html(id),
        escape_html(animation.name()),
        json
    ))
}

fn success_block(animations: &AnimationSet) -> Option<String> {
    animation_block(animations, AnimationKind::Balloon, "balloon-animation-success")
        .map(|block| format!("<div class=\"balloon-container\">\n{}\n</div>", block))
}

/// Renders a complete HTML page.
pub fn render_page(
    config: &PresentationConfig,
    animations: &AnimationSet,
    content: &PageContent,
) -> String {
    let mut page = String::new();
    let title = escape_html(&config.title);

    // Writing into a String cannot fail.
    let _ = writeln!(page, "<!DOCTYPE html>");
    let _ = writeln!(page, "<html lang=\"en\">");
    let _ = writeln!(page, "<head>");
    let _ = writeln!(page, "<meta charset=\"utf-8\">");
    let _ = writeln!(page, "<title>{}</title>", title);
    let _ = writeln!(
        page,
        "<style>.balloon-container {{ display: flex; justify-content: center; align-items: center; margin-top: 30px; }}</style>"
    );
    let _ = writeln!(page, "</head>");
    let _ = writeln!(page, "<body style=\"background-color: #ffffff;\">");
    let _ = writeln!(page, "<h1>{}</h1>", title);
    let _ = writeln!(page, "<h3>{}</h3>", escape_html(&config.subtitle));

    if let Some(block) = animation_block(animations, AnimationKind::Coding, "coding-animation") {
        let _ = writeln!(page, "{}", block);
    }

    match content {
        PageContent::Idle => {}
        PageContent::Response(response) => {
            let success = match config.success_animation {
                SuccessAnimationPlacement::Hidden => None,
                _ => success_block(animations),
            };

            if config.success_animation == SuccessAnimationPlacement::AboveResponse {
                if let Some(block) = &success {
                    let _ = writeln!(page, "{}", block);
                }
            }

            let _ = writeln!(page, "<h3>{}</h3>", escape_html(&config.response_heading));
            let _ = writeln!(page, "{}", render_response(config, response));

            if config.success_animation == SuccessAnimationPlacement::BelowResponse {
                if let Some(block) = &success {
                    let _ = writeln!(page, "{}", block);
                }
            }
        }
        PageContent::Error(message) => {
            let _ = writeln!(page, "<p class=\"error\">{}</p>", escape_html(message));
        }
    }

    let _ = writeln!(page, "</body>");
    let _ = writeln!(page, "</html>");
    page
}
