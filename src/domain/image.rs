//! Image reference helpers.
//!
//! The API stores some image fields as a JSON-encoded array
//! (`["https://…"]`); consumers want the bare URL.

/// Shown when a product has no usable image.
pub const DEFAULT_IMAGE: &str = "default_image.jpg";

/// Strip JSON-array brackets and quotes from a raw image reference.
///
/// Only a value that starts with `[` is treated as an array; anything else
/// is a single reference and may itself contain commas.
pub fn clean_image(raw: &str) -> String {
    let trimmed = raw.trim();
    let first = if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<String>>(trimmed) {
            Ok(images) => images.into_iter().next().unwrap_or_default(),
            Err(_) => trimmed
                .trim_start_matches('[')
                .trim_end_matches(']')
                .split(',')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    } else {
        trimmed.to_string()
    };
    first
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}

pub fn is_valid_image_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace))
}

/// The image to show for a raw reference, falling back to [`DEFAULT_IMAGE`].
pub fn display_image(raw: &str) -> String {
    let cleaned = clean_image(raw);
    if is_valid_image_url(&cleaned) {
        cleaned
    } else {
        DEFAULT_IMAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_array_wrapping() {
        assert_eq!(
            clean_image(r#"["https://i.imgur.com/a.jpeg"]"#),
            "https://i.imgur.com/a.jpeg"
        );
        assert_eq!(
            clean_image(r#"["https://x/1.png","https://x/2.png"]"#),
            "https://x/1.png"
        );
        assert_eq!(clean_image("https://x/plain.png"), "https://x/plain.png");
        assert_eq!(clean_image(r#""https://x/quoted.png""#), "https://x/quoted.png");
        assert_eq!(clean_image("[]"), "");
    }

    #[test]
    fn clean_keeps_commas_in_plain_urls() {
        let url = "https://res.cloudinary.com/demo/image/upload/w_300,h_200/shoe.jpg";
        assert_eq!(clean_image(url), url);
        assert_eq!(clean_image(&format!(r#"["{}"]"#, url)), url);
        assert_eq!(display_image(url), url);
    }

    #[test]
    fn clean_tolerates_non_json_arrays() {
        assert_eq!(clean_image("['https://x/a.png']"), "https://x/a.png");
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_image_url("https://example.com/a.png"));
        assert!(is_valid_image_url("http://example.com/a.png"));
        assert!(!is_valid_image_url("Image 3"));
        assert!(!is_valid_image_url("https://"));
        assert!(!is_valid_image_url("ftp://example.com/a.png"));
    }

    #[test]
    fn display_falls_back_to_default() {
        assert_eq!(display_image("Image 3"), DEFAULT_IMAGE);
        assert_eq!(
            display_image(r#"["https://example.com/a.png"]"#),
            "https://example.com/a.png"
        );
    }
}
