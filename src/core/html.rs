// src/core/html.rs
//
// Just enough tag scanning to pull <img> sources out of a product page.
// Not a parser; best-effort, like the rest of the extraction in this tool.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Every `<img ...>` open-tag slice in document order. Self-closing or not,
/// the slice runs from `<img` to the first `>`.
pub fn img_tags(doc: &str) -> Vec<&str> {
    let lc = to_lower(doc);
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find("<img") {
        let start = pos + rel;
        let Some(end_rel) = doc[start..].find('>') else { break };
        let end = start + end_rel + 1;
        out.push(&doc[start..end]);
        pos = end;
    }
    out
}

/// Attribute value from an open-tag slice. Case-insensitive on the name,
/// handles single/double/unquoted values. `attr(tag, "src")` will not match
/// a `data-src` attribute; the name must start at a word boundary.
pub fn attr(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = format!("{}=", to_lower(name));
    let mut search = 0usize;

    while let Some(rel) = lc[search..].find(&needle) {
        let at = search + rel;
        let boundary = at == 0 || !is_attr_name_byte(lc.as_bytes()[at - 1]);
        let vstart = at + needle.len();
        if !boundary {
            search = vstart;
            continue;
        }

        let rest = &tag[vstart..];
        let mut chars = rest.chars();
        return match chars.next() {
            Some(q @ ('"' | '\'')) => rest[1..]
                .find(q)
                .map(|e| rest[1..1 + e].to_string()),
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .unwrap_or(rest.len());
                Some(rest[..end].to_string())
            }
            None => None,
        };
    }
    None
}

fn is_attr_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Byte offset of the first `<img` at or after `from`, if any.
pub fn next_img_offset(doc: &str, from: usize) -> Option<usize> {
    let lc = to_lower(doc);
    lc.get(from..)?.find("<img").map(|rel| from + rel)
}

/// The `<img ...>` open-tag slice starting at `offset` (as returned by
/// `next_img_offset`).
pub fn img_tag_at(doc: &str, offset: usize) -> Option<&str> {
    let end_rel = doc[offset..].find('>')?;
    Some(&doc[offset..offset + end_rel + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn img_tags_finds_all_in_order() {
        let doc = r#"<div><IMG src="a.jpg"><p>x</p><img data-src='b.png' /></div>"#;
        let tags = img_tags(doc);
        assert_eq!(tags.len(), 2);
        assert!(tags[0].contains("a.jpg"));
        assert!(tags[1].contains("b.png"));
    }

    #[test]
    fn attr_reads_quoted_and_unquoted() {
        assert_eq!(attr(r#"<img src="a.jpg">"#, "src").as_deref(), Some("a.jpg"));
        assert_eq!(attr("<img src='a.jpg'>", "src").as_deref(), Some("a.jpg"));
        assert_eq!(attr("<img src=a.jpg>", "src").as_deref(), Some("a.jpg"));
        assert_eq!(attr("<img SRC=\"a.jpg\">", "src").as_deref(), Some("a.jpg"));
    }

    #[test]
    fn attr_does_not_cross_name_boundaries() {
        let tag = r#"<img data-src="lazy.jpg">"#;
        assert_eq!(attr(tag, "src"), None);
        assert_eq!(attr(tag, "data-src").as_deref(), Some("lazy.jpg"));
    }

    #[test]
    fn attr_missing_is_none() {
        assert_eq!(attr("<img>", "src"), None);
    }

    #[test]
    fn next_img_offset_scans_forward() {
        let doc = r#"<div class="gallery"><span></span><img src="x.webp"></div>"#;
        let at = next_img_offset(doc, 0).unwrap();
        let tag = img_tag_at(doc, at).unwrap();
        assert_eq!(attr(tag, "src").as_deref(), Some("x.webp"));
        assert!(next_img_offset(doc, at + 1).is_none());
    }
}
