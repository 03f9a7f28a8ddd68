// src/resolve/scrape.rs
//
// Remote scrape resolution: fetch a product's detail page and hunt for the
// real product shot. Rules run in priority order; the first candidate whose
// URL carries a recognized image extension wins. No match is a no-result,
// not an error.

use reqwest::blocking::Client;

use crate::config::consts::{CDN_MARKER, IMAGE_EXTENSIONS, SCRAPE_ATTEMPTS, STORE_BASE};
use crate::core::sanitize::first_word;
use crate::core::{html, net};
use crate::loge;

enum ImgRule {
    /// Lazy-load attribute pointing at the product CDN
    LazyCdn,
    /// Plain src pointing at the product CDN
    SrcCdn,
    /// First <img> after an element carrying this class
    WithinClass(&'static str),
    /// alt text mentioning the product name's first word
    AltFirstWord,
    /// Zoomable image (lazy/src value still wins over the zoom attr)
    HasZoom,
    /// The img tag itself carries this class
    ClassIs(&'static str),
}

const RULES: &[ImgRule] = &[
    ImgRule::LazyCdn,
    ImgRule::SrcCdn,
    ImgRule::WithinClass("product-single__photo"),
    ImgRule::WithinClass("product__photo"),
    ImgRule::WithinClass("product-image"),
    ImgRule::WithinClass("main-product-image"),
    ImgRule::AltFirstWord,
    ImgRule::HasZoom,
    ImgRule::ClassIs("product-featured-image"),
    ImgRule::ClassIs("product-image-main"),
];

/// Fetch the detail page (bounded retries, doubling backoff) and pick an
/// image. Transport trouble after all attempts logs and yields None.
pub fn resolve_product_image(
    client: &Client,
    detail_path: &str,
    product_name: &str,
) -> Option<String> {
    let url = absolutize(detail_path);
    let doc = match net::get_with_retries(client, &url, SCRAPE_ATTEMPTS) {
        Ok(doc) => doc,
        Err(e) => {
            loge!("fetch {} failed: {}", url, e);
            return None;
        }
    };
    find_image(&doc, product_name)
}

/// Rule-ordered search over the page's <img> tags, then a last-resort scan
/// for anything CDN-hosted with an image extension.
pub fn find_image(doc: &str, product_name: &str) -> Option<String> {
    let tags = html::img_tags(doc);

    for rule in RULES {
        let tag = match rule {
            ImgRule::LazyCdn => tags
                .iter()
                .find(|t| html::attr(t, "data-src").is_some_and(|v| v.contains(CDN_MARKER)))
                .copied(),
            ImgRule::SrcCdn => tags
                .iter()
                .find(|t| html::attr(t, "src").is_some_and(|v| v.contains(CDN_MARKER)))
                .copied(),
            ImgRule::WithinClass(class) => img_after_class(doc, class),
            ImgRule::AltFirstWord => {
                let word = first_word(product_name);
                if word.is_empty() {
                    None
                } else {
                    tags.iter()
                        .find(|t| html::attr(t, "alt").is_some_and(|v| v.contains(word)))
                        .copied()
                }
            }
            ImgRule::HasZoom => tags
                .iter()
                .find(|t| html::attr(t, "data-zoom-src").is_some())
                .copied(),
            ImgRule::ClassIs(class) => tags
                .iter()
                .find(|t| html::attr(t, "class").is_some_and(|v| v.contains(class)))
                .copied(),
        };

        if let Some(tag) = tag {
            if let Some(url) = accept(candidate_src(tag)) {
                return Some(url);
            }
            // candidate missing or not an image; try the next rule
        }
    }

    // Last resort: any CDN-hosted image on the page
    for tag in &tags {
        if let Some(src) = candidate_src(tag) {
            if src.contains(CDN_MARKER) {
                if let Some(url) = accept(Some(src)) {
                    return Some(url);
                }
            }
        }
    }

    None
}

/// Lazy-load value beats plain src, matching how the storefront templates
/// populate them.
fn candidate_src(tag: &str) -> Option<String> {
    html::attr(tag, "data-src").or_else(|| html::attr(tag, "src"))
}

fn accept(raw: Option<String>) -> Option<String> {
    let abs = normalize_url(&raw?);
    has_image_ext(&abs).then_some(abs)
}

/// First <img> tag at or after the first occurrence of `class` in the page.
/// Best-effort stand-in for a descendant selector.
fn img_after_class<'a>(doc: &'a str, class: &str) -> Option<&'a str> {
    let lc = html::to_lower(doc);
    let at = lc.find(&html::to_lower(class))?;
    let img_at = html::next_img_offset(doc, at)?;
    html::img_tag_at(doc, img_at)
}

fn normalize_url(u: &str) -> String {
    if let Some(rest) = u.strip_prefix("//") {
        format!("https://{}", rest)
    } else if u.starts_with('/') {
        format!("{}{}", STORE_BASE, u)
    } else {
        u.to_string()
    }
}

fn has_image_ext(u: &str) -> bool {
    let lc = u.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lc.contains(ext))
}

fn absolutize(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", STORE_BASE, path)
    } else {
        format!("{}/{}", STORE_BASE, path)
    }
}
