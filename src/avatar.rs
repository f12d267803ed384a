//! Initials avatar generation

use crate::error::BoundaryError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Derive display initials from a name.
///
/// One word yields its first letter; two words yield both first letters;
/// longer names yield the first letters of the first and last words. Always
/// uppercased.
#[must_use]
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let first_letter = |w: &str| -> String {
        w.chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    };

    match words.as_slice() {
        [] => String::new(),
        [only] => first_letter(only),
        [first, .., last] => first_letter(first) + &first_letter(last),
    }
}

/// Visual parameters for a generated avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarStyle {
    /// Side length of the square, in pixels
    pub size: u32,

    /// Background fill color (any CSS color string)
    pub background: String,

    /// Color of the initials text
    pub foreground: String,
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            size: 200,
            background: "#22D3EE".to_string(),
            foreground: "white".to_string(),
        }
    }
}

/// Escape characters that would break out of SVG text or attribute context
fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Embedded image payload returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvatarPayload {
    /// Self-contained data URL, ready to drop into an `img` src
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Rasterization seam: anything that can turn a name and a style into an
/// embedded image
pub trait AvatarRenderer {
    fn render(
        &self,
        name: &str,
        style: &AvatarStyle,
    ) -> std::result::Result<AvatarPayload, BoundaryError>;
}

/// Renderer that emits a fixed-size square SVG with centered initials,
/// embedded as a base64 data URL
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgAvatar;

impl AvatarRenderer for SvgAvatar {
    fn render(
        &self,
        name: &str,
        style: &AvatarStyle,
    ) -> std::result::Result<AvatarPayload, BoundaryError> {
        if name.trim().is_empty() {
            return Err(BoundaryError::MissingField("name"));
        }

        let text = xml_escape(&initials(name));
        let size = style.size;
        // Font scaled so two letters fit comfortably inside the square
        let font_size = size * 2 / 5;
        let svg = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}">"#,
                r#"<rect width="{size}" height="{size}" fill="{bg}"/>"#,
                r#"<text x="50%" y="50%" dy=".1em" fill="{fg}" font-family="sans-serif" "#,
                r#"font-size="{fs}" font-weight="bold" text-anchor="middle" "#,
                r#"dominant-baseline="middle">{text}</text></svg>"#
            ),
            size = size,
            bg = xml_escape(&style.background),
            fg = xml_escape(&style.foreground),
            fs = font_size,
            text = text,
        );

        let encoded = STANDARD.encode(svg.as_bytes());
        Ok(AvatarPayload {
            image_url: format!("data:image/svg+xml;base64,{encoded}"),
        })
    }
}
