// src/catalog.rs
//
// Locator + Patcher for the product catalog data file. Records are object
// literals with string-valued id/name/image/category (and sometimes url)
// fields; we pattern-match them rather than parse the file for real, so a
// malformed or reordered record simply yields nothing.
//
// Precondition for patching: flat records only. The record boundary is the
// nearest closing brace, so a record containing a nested object would let a
// patch bleed into its neighbor.

use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::config::consts::{ASSET_HOST, PLACEHOLDER_PREFIX};
use crate::core::sanitize::unescape_quotes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailEntry {
    pub id: String,
    pub name: String,
    pub path: String, // detail-page path, usually root-relative
}

/* ---------------- File boundary ---------------- */

// The only fatal error surface in a run: per-item trouble is recovered
// locally, but if the catalog itself can't be read or written we abort.

pub fn load(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("cannot read catalog {}: {}", path.display(), e).into())
}

pub fn save(path: &Path, text: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, text)
        .map_err(|e| format!("cannot write catalog {}: {}", path.display(), e).into())
}

/* ---------------- Locator ---------------- */

fn entry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // name may contain backslash-escaped quotes; the other fields never do
        Regex::new(
            r#"\{[^}]*id:\s*['"]([^'"]*)['"][^}]*name:\s*['"]((?:[^'"\\]|\\.)*)['"][^}]*image:\s*['"]([^'"]*)['"][^}]*category:\s*['"]([^'"]*)['"][^}]*\}"#,
        )
        .expect("entry pattern")
    })
}

fn detail_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"\{[^}]*id:\s*['"]([^'"]*)['"][^}]*name:\s*['"]((?:[^'"\\]|\\.)*)['"][^}]*url:\s*['"]([^'"]*)['"][^}]*\}"#,
        )
        .expect("detail pattern")
    })
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r#"image:\s*'{}[^']+'"#,
            regex::escape(PLACEHOLDER_PREFIX)
        ))
        .expect("placeholder pattern")
    })
}

fn asset_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r#"image:\s*['"]([^'"]*{}[^'"]*)['"]"#,
            regex::escape(ASSET_HOST)
        ))
        .expect("asset pattern")
    })
}

/// All records carrying id/name/image/category, in document order.
pub fn extract_entries(text: &str) -> Vec<CatalogEntry> {
    entry_re()
        .captures_iter(text)
        .map(|c| CatalogEntry {
            id: c[1].to_string(),
            name: unescape_quotes(&c[2]).trim().to_string(),
            image: c[3].trim().to_string(),
            category: c[4].trim().to_string(),
        })
        .collect()
}

/// All records carrying id/name/url, in document order (scrape task).
pub fn extract_detail_entries(text: &str) -> Vec<DetailEntry> {
    detail_re()
        .captures_iter(text)
        .map(|c| DetailEntry {
            id: c[1].to_string(),
            name: unescape_quotes(&c[2]).trim().to_string(),
            path: c[3].trim().to_string(),
        })
        .collect()
}

/// Every `image: '...'` span whose URL starts with the placeholder prefix,
/// in document order. Spans are returned whole so the rotate task can
/// replace each first occurrence literally.
pub fn placeholder_spans(text: &str) -> Vec<String> {
    placeholder_re()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every asset-host image URL already present in the catalog (probe task).
pub fn asset_urls(text: &str) -> Vec<String> {
    asset_re()
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

/* ---------------- Patcher ---------------- */

/// Replace one placeholder span with `image: '<new_url>'`, first occurrence
/// only. Spans are consumed in document order, so repeated calls walk the
/// file front to back.
pub fn replace_span_once(text: &str, span: &str, new_url: &str) -> String {
    text.replacen(span, &format!("image: '{}'", new_url), 1)
}

/// Anchored substitution: find the record whose id field matches, then swap
/// only the quoted value after its `image:` marker. Everything else in the
/// file stays byte-identical. Returns the new text and whether a record
/// actually matched.
pub fn patch_image(text: &str, id: &str, new_url: &str) -> (String, bool) {
    let pattern = format!(
        r#"(id:\s*['"]{}['"][^}}]*image:\s*['"])[^'"]*(['"],[^}}]*)"#,
        regex::escape(id)
    );
    let re = Regex::new(&pattern).expect("patch pattern");

    let mut changed = false;
    let out = re.replace(text, |caps: &Captures| {
        changed = true;
        format!("{}{}{}", &caps[1], new_url, &caps[2])
    });
    (out.into_owned(), changed)
}

/// Apply an id → URL mapping in order. Returns the patched text and how many
/// ids actually matched a record.
pub fn patch_all(text: &str, mapping: &[(String, String)]) -> (String, usize) {
    let mut out = text.to_string();
    let mut patched = 0usize;
    for (id, url) in mapping {
        let (next, changed) = patch_image(&out, id, url);
        out = next;
        if changed {
            patched += 1;
        }
    }
    (out, patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
export const products: Product[] = [
  {
    id: 'lamp-1',
    name: 'Aurora Table Lamp',
    price: 129,
    image: 'https://images.unsplash.com/photo-100?w=800',
    category: 'Table Lamps',
  },
  {
    id: 'lamp-2',
    name: '24\" Drum Chandelier',
    price: 349,
    image: 'https://brightet.com/cdn/shop/files/abc.jpg?v=1',
    category: 'Chandeliers',
  },
];
"#;

    #[test]
    fn extracts_entries_in_order() {
        let entries = extract_entries(CATALOG);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "lamp-1");
        assert_eq!(entries[0].category, "Table Lamps");
        assert_eq!(entries[1].image, "https://brightet.com/cdn/shop/files/abc.jpg?v=1");
    }

    #[test]
    fn unescapes_quotes_in_names() {
        let entries = extract_entries(CATALOG);
        assert_eq!(entries[1].name, r#"24" Drum Chandelier"#);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let text = r#"
  { id: 'ok-1', name: 'A', image: 'https://x/a.jpg', category: 'Chandeliers' },
  { name: 'no id here', image: 'https://x/b.jpg', category: 'Chandeliers' },
  { id: 'reordered', category: 'Chandeliers', name: 'B', image: 'https://x/c.jpg' },
"#;
        let entries = extract_entries(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "ok-1");
    }

    #[test]
    fn detail_entries_use_url_field() {
        let text = r#"
  { id: 'p1', name: 'Orb', url: '/products/orb-chandelier' },
  { id: 'p2', name: 'Sconce', image: 'https://x/s.jpg' },
"#;
        let entries = extract_detail_entries(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "/products/orb-chandelier");
    }

    #[test]
    fn placeholder_spans_in_document_order() {
        let spans = placeholder_spans(CATALOG);
        assert_eq!(spans.len(), 1);
        assert!(spans[0].starts_with("image: 'https://images.unsplash.com/"));
    }

    #[test]
    fn asset_urls_found() {
        let urls = asset_urls(CATALOG);
        assert_eq!(urls, vec!["https://brightet.com/cdn/shop/files/abc.jpg?v=1"]);
    }

    #[test]
    fn patch_changes_only_the_named_record() {
        let (out, changed) = patch_image(CATALOG, "lamp-1", "https://new/img.jpg");
        assert!(changed);
        assert!(out.contains("image: 'https://new/img.jpg'"));
        // the other record is untouched, byte for byte
        assert!(out.contains("image: 'https://brightet.com/cdn/shop/files/abc.jpg?v=1'"));
        assert_eq!(out.matches("https://new/img.jpg").count(), 1);
    }

    #[test]
    fn patch_unknown_id_is_a_no_op() {
        let (out, changed) = patch_image(CATALOG, "nope", "https://new/img.jpg");
        assert!(!changed);
        assert_eq!(out, CATALOG);
    }

    #[test]
    fn patch_is_idempotent() {
        let mapping = vec![("lamp-1".to_string(), "https://new/img.jpg".to_string())];
        let (once, n1) = patch_all(CATALOG, &mapping);
        let (twice, n2) = patch_all(&once, &mapping);
        assert_eq!(n1, 1);
        assert_eq!(n2, 1); // second pass replaces the value with itself
        assert_eq!(once, twice);
    }

    #[test]
    fn replace_span_once_only_touches_first_occurrence() {
        let text = "image: 'https://images.unsplash.com/a' image: 'https://images.unsplash.com/a'";
        let out = replace_span_once(text, "image: 'https://images.unsplash.com/a'", "https://x/1.jpg");
        assert!(out.starts_with("image: 'https://x/1.jpg'"));
        assert!(out.ends_with("image: 'https://images.unsplash.com/a'"));
    }
}
