//! Image URL extraction from article HTML.

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn extract(html: &str) -> Vec<String> {
        UrlExtractor::find_all_image_urls(html)
            .into_iter()
            .map(ImageUrl::into_inner)
            .collect()
    }

    #[test_case(r#"<img src="https://a.com/1.png">"#, &["https://a.com/1.png"] ; "double_quoted")]
    #[test_case("<img src='https://a.com/1.png'>", &["https://a.com/1.png"] ; "single_quoted")]
    #[test_case("<img src=https://a.com/1.png>", &["https://a.com/1.png"] ; "unquoted")]
    #[test_case(r#"<IMG SRC="https://a.com/1.png"/>"#, &["https://a.com/1.png"] ; "uppercase_tag")]
    #[test_case(r#"<img src="//cdn.a.com/1.png">"#, &["https://cdn.a.com/1.png"] ; "protocol_relative")]
    #[test_case(r#"<img src="https://a.com/i?w=1&amp;h=2">"#, &["https://a.com/i?w=1&h=2"] ; "entity_decoded")]
    #[test_case(r#"<img src="data:image/png;base64,AAAA">"#, &[] ; "data_uri_skipped")]
    #[test_case(r#"<img src="/relative/1.png">"#, &[] ; "relative_skipped")]
    #[test_case(r#"<img src="">"#, &[] ; "empty_skipped")]
    #[test_case(r#"<a href="https://a.com/1.png">link</a>"#, &[] ; "non_img_ignored")]
    #[test_case(r#"<img alt="1 > 0" src="https://a.com/1.png">"#, &["https://a.com/1.png"] ; "gt_inside_quoted_value")]
    #[test_case("<img title='a > b' data-src='https://a.com/2.png'>", &["https://a.com/2.png"] ; "gt_inside_single_quoted_value")]
    #[test_case(r#"<img alt=it's src="https://a.com/3.png">"#, &["https://a.com/3.png"] ; "stray_quote_in_unquoted_value")]
    #[test_case(r#"<img srcset="https://res.cloudinary.com/d/image/upload/w_480,h_320/a.jpg 480w">"#, &["https://res.cloudinary.com/d/image/upload/w_480,h_320/a.jpg"] ; "srcset_url_with_commas")]
    #[test_case(r#"<img srcset="https://a.com/1.png,https://a.com/2.png 2x">"#, &["https://a.com/1.png,https://a.com/2.png"] ; "srcset_without_spaces_is_one_url")]
    #[test_case(r#"<img srcset="https://a.com/1.png, https://a.com/2.png 2x">"#, &["https://a.com/1.png", "https://a.com/2.png"] ; "srcset_trailing_comma_ends_candidate")]
    fn test_single_tag(html: &str, expected: &[&str]) {
        assert_eq!(extract(html), expected);
    }

    #[test]
    fn test_srcset_and_data_src() {
        let html = r#"<img data-src="https://a.com/lazy.jpg"
            srcset="https://a.com/small.jpg 480w, https://a.com/large.jpg 1080w"
            src="https://a.com/small.jpg">"#;
        let urls = extract(html);
        assert_eq!(
            urls,
            vec![
                "https://a.com/lazy.jpg",
                "https://a.com/small.jpg",
                "https://a.com/large.jpg",
            ]
        );
    }

    #[test]
    fn test_multiple_images_deduplicated() {
        let html = r#"<p>One <img src="https://a.com/x.png"> two
            <img alt="again" src="https://a.com/x.png"> three
            <img src="https://a.com/y.png"></p>"#;
        assert_eq!(extract(html), vec!["https://a.com/x.png", "https://a.com/y.png"]);
    }

    #[test]
    fn test_malformed_markup() {
        let html = r#"<div><img src="https://a.com/ok.png" <img src= <p>unclosed <img"#;
        assert_eq!(extract(html), vec!["https://a.com/ok.png"]);
    }

    #[test]
    fn test_no_images() {
        assert!(extract("Just some text with no images.").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let html = r#"<img src="https://a.com/1.png"><img srcset="https://a.com/2.png 2x">"#;
        assert_eq!(extract(html), extract(html));
    }
}

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::ImageUrl;

/// Attributes of an `<img>` tag that carry a single image URL.
const URL_ATTRIBUTES: [&str; 2] = ["data-src", "src"];

/// Extracts image URLs from article markup.
pub struct UrlExtractor;

impl UrlExtractor {
    /// Returns every absolute image URL referenced by `<img>` tags in `html`.
    ///
    /// Looks at `src`, `data-src` and each `srcset` candidate. Relative paths and
    /// `data:` URIs are skipped; protocol-relative URLs are resolved to `https:`.
    /// Malformed markup yields whatever could be matched. Results are unique and
    /// in first-seen order.
    #[must_use]
    pub fn find_all_image_urls(html: &str) -> Vec<ImageUrl> {
        static IMG_TAG_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r#"(?i)<img\b(?:[^>"']|"[^"]*"|'[^']*'|["'])*>?"#).unwrap());

        static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r#"(?i)([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'<>`]+))"#)
                .unwrap()
        });

        let mut seen = HashSet::new();
        let mut urls = Vec::new();
        let mut push = |raw: &str| {
            if let Some(url) = normalize(raw)
                && seen.insert(url.clone())
            {
                urls.push(ImageUrl::new(url));
            }
        };

        for tag in IMG_TAG_RE.find_iter(html) {
            for cap in ATTR_RE.captures_iter(tag.as_str()) {
                let Some(name) = cap.get(1) else { continue };
                let Some(value) = cap.get(2).or_else(|| cap.get(3)).or_else(|| cap.get(4))
                else {
                    continue;
                };
                let name = name.as_str().to_ascii_lowercase();

                if URL_ATTRIBUTES.contains(&name.as_str()) {
                    push(value.as_str());
                } else if name == "srcset" {
                    for url in srcset_urls(value.as_str()) {
                        push(url);
                    }
                }
            }
        }

        urls
    }
}

/// Splits a `srcset` value into its candidate URLs.
///
/// A URL runs up to the next whitespace and may itself contain commas; the
/// descriptor after it runs up to the next comma.
fn srcset_urls(srcset: &str) -> Vec<&str> {
    let mut urls = Vec::new();
    let mut rest = srcset;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == ',');
        if rest.is_empty() {
            break;
        }

        let end = rest
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        let (candidate, tail) = rest.split_at(end);
        let url = candidate.trim_end_matches(',');
        if !url.is_empty() {
            urls.push(url);
        }

        rest = if url.len() < candidate.len() {
            tail
        } else {
            tail.find(',').map_or("", |i| &tail[i + 1..])
        };
    }

    urls
}

fn normalize(raw: &str) -> Option<String> {
    let value = decode_entities(raw.trim());
    if value.starts_with("//") {
        return Some(format!("https:{value}"));
    }

    let lower = value.get(..8).unwrap_or(&value).to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(value)
    } else {
        None
    }
}

fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_owned();
    }
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
