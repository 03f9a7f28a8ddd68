// benches/patch.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use imgfix::catalog::{extract_entries, patch_all};

fn synthetic_catalog(records: usize) -> String {
    let mut out = String::from("export const products: Product[] = [\n");
    for i in 0..records {
        out.push_str(&format!(
            "  {{\n    id: 'prod-{i}',\n    name: 'Product {i}',\n    price: {p},\n    image: 'https://images.unsplash.com/photo-{i}?w=800',\n    category: 'Chandeliers',\n  }},\n",
            p = 100 + i
        ));
    }
    out.push_str("];\n");
    out
}

fn bench_catalog(c: &mut Criterion) {
    let doc = synthetic_catalog(500);
    let mapping: Vec<(String, String)> = (0..50)
        .map(|i| (format!("prod-{}", i * 10), format!("https://x/{i}.jpg")))
        .collect();

    c.bench_function("extract_entries_500", |b| {
        b.iter(|| {
            let entries = extract_entries(black_box(&doc));
            black_box(entries.len())
        })
    });

    c.bench_function("patch_all_50_of_500", |b| {
        b.iter(|| {
            let (out, n) = patch_all(black_box(&doc), black_box(&mapping));
            black_box((out.len(), n))
        })
    });
}

criterion_group!(benches, bench_catalog);
criterion_main!(benches);
