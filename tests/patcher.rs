// tests/patcher.rs
//
// Patcher contract: scoped to one record, idempotent, byte-preserving
// everywhere else. Flat records only; that precondition is what keeps the
// brace-bounded matching honest.

use imgfix::catalog::{extract_entries, patch_all, patch_image};

const TWO_RECORDS: &str = r#"
export const products: Product[] = [
  {
    id: 'orb-1',
    name: 'Orb Chandelier',
    price: 499,
    image: 'https://images.unsplash.com/photo-orb?w=800',
    category: 'Chandeliers',
    inStock: true,
  },
  {
    id: 'orb-10',
    name: 'Orb Chandelier Grande',
    price: 899,
    image: 'https://images.unsplash.com/photo-orb-grande?w=800',
    category: 'Chandeliers',
    inStock: false,
  },
];
"#;

#[test]
fn patching_one_id_leaves_the_sibling_untouched() {
    let (out, changed) = patch_image(TWO_RECORDS, "orb-1", "https://x/new.jpg");
    assert!(changed);

    // sibling record with a similar id and identical field names is intact
    assert!(out.contains("image: 'https://images.unsplash.com/photo-orb-grande?w=800'"));
    assert!(out.contains("image: 'https://x/new.jpg'"));

    // everything outside the swapped value is byte-identical
    let entries = extract_entries(&out);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].name, "Orb Chandelier Grande");
    assert_eq!(entries[1].category, "Chandeliers");
}

#[test]
fn prefix_id_does_not_capture_the_longer_id() {
    // "orb-1" is a prefix of "orb-10"; the quoted-id anchor must not match it
    let (out, _) = patch_image(TWO_RECORDS, "orb-1", "https://x/new.jpg");
    let grande_at = out.find("orb-10").unwrap();
    assert!(out[grande_at..].contains("photo-orb-grande"));
}

#[test]
fn double_application_is_a_fixed_point() {
    let mapping = vec![
        ("orb-1".to_string(), "https://x/a.jpg".to_string()),
        ("orb-10".to_string(), "https://x/b.jpg".to_string()),
    ];
    let (once, n1) = patch_all(TWO_RECORDS, &mapping);
    let (twice, n2) = patch_all(&once, &mapping);
    assert_eq!(n1, 2);
    assert_eq!(n2, 2);
    assert_eq!(once, twice);
}

#[test]
fn formatting_and_unrelated_fields_survive() {
    let (out, _) = patch_image(TWO_RECORDS, "orb-10", "https://x/new.jpg");
    assert!(out.contains("price: 499"));
    assert!(out.contains("price: 899"));
    assert!(out.contains("inStock: true"));
    assert!(out.contains("inStock: false"));
    assert!(out.starts_with("\nexport const products"));
}

#[test]
fn unknown_id_changes_nothing() {
    let (out, changed) = patch_image(TWO_RECORDS, "absent", "https://x/new.jpg");
    assert!(!changed);
    assert_eq!(out, TWO_RECORDS);
}
