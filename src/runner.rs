// src/runner.rs
//
// Top-level pipelines. Each task shares the same shape: locate entries in
// the catalog text, resolve replacements one at a time, patch the text in
// memory, then write the whole file once at the end. Per-item trouble is
// counted and logged; only catalog I/O aborts a run.

use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::config::consts::{
    CHECK_PAUSE_MS, PLACEHOLDER_HOST, SCRAPE_JITTER_MS, SCRAPE_MAPPING_FILE, SCRAPE_PAUSE_MS,
    VERIFY_FIXES_FILE,
};
use crate::config::options::{Params, TaskKind};
use crate::config::pools::{self, PoolSet};
use crate::core::net;
use crate::progress::Progress;
use crate::resolve::{FallbackResolver, RotationPool, resolve_product_image};
use crate::{audit, catalog, check, logf, loge};

/// End-of-run counts. Fields a task doesn't track stay zero.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub processed: usize,
    pub accessible: usize,
    pub fixed: usize,
    pub broken: usize,
    pub replaced: usize,
}

impl RunSummary {
    pub fn success_rate(&self) -> Option<f64> {
        if self.processed == 0 {
            return None;
        }
        Some((self.accessible + self.fixed) as f64 / self.processed as f64 * 100.0)
    }
}

/// Dispatch on task kind and run. `progress` can be None (silent) or
/// Some(&mut impl Progress).
pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    match params.task {
        TaskKind::Rotate => rotate(params, progress),
        TaskKind::Scrape => scrape(params, progress),
        TaskKind::Verify => verify(params, progress),
        TaskKind::Probe => probe(params, progress),
    }
}

/* ---------------- Rotate ---------------- */

fn rotate(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let text = catalog::load(&params.catalog)?;
    let spans = catalog::placeholder_spans(&text);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} placeholder image(s) to replace", spans.len()));
        p.begin(spans.len());
    }

    let pools = load_pools(params)?;
    let mut pool = RotationPool::new(pools.rotation);

    let mut out = text;
    for span in &spans {
        let url = pool.next_url().to_string();
        out = catalog::replace_span_once(&out, span, &url);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(span, &format!("replaced with {}", url));
        }
    }

    if !spans.is_empty() && !params.dry_run {
        catalog::save(&params.catalog, &out)?;
    }
    logf!(
        "rotate: replaced {} placeholder(s) in {}",
        spans.len(),
        params.catalog.display()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        processed: spans.len(),
        replaced: spans.len(),
        ..Default::default()
    })
}

/* ---------------- Scrape ---------------- */

fn scrape(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let text = catalog::load(&params.catalog)?;
    let entries = catalog::extract_detail_entries(&text);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} product(s) to process", entries.len()));
        p.begin(entries.len());
    }

    let client = net::client()?;
    let base_pause = params.pause_ms.unwrap_or(SCRAPE_PAUSE_MS);

    let mut mapping: Vec<(String, String)> = Vec::new();
    let mut failed = 0usize;

    for (i, e) in entries.iter().enumerate() {
        let label = format!("Processing: {}", clip(&e.name, 50));
        match resolve_product_image(&client, &e.path, &e.name) {
            Some(url) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&label, &format!("found {}", url));
                }
                mapping.push((e.id.clone(), url));
            }
            None => {
                failed += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&label, "no image found");
                }
                loge!("scrape: no image for {} ({})", e.id, e.path);
            }
        }

        // deterministic stand-in for a random 1-3s politeness pause
        let jitter = (i as u64 * 977) % SCRAPE_JITTER_MS;
        thread::sleep(Duration::from_millis(base_pause + jitter));

        if (i + 1) % 10 == 0 {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!(
                    "Progress: {}/{}  found: {}  failed: {}",
                    i + 1,
                    entries.len(),
                    mapping.len(),
                    failed
                ));
            }
        }
    }

    let (out, patched) = catalog::patch_all(&text, &mapping);
    if patched < mapping.len() {
        loge!(
            "scrape: {} resolved id(s) missing from the catalog",
            mapping.len() - patched
        );
    }
    if !mapping.is_empty() && !params.dry_run {
        catalog::save(&params.catalog, &out)?;
    }
    audit::write_mapping(&audit_path(params, SCRAPE_MAPPING_FILE), &mapping)?;
    logf!(
        "scrape: {} found, {} failed, {} patched",
        mapping.len(),
        failed,
        patched
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        processed: entries.len(),
        fixed: mapping.len(),
        broken: failed,
        ..Default::default()
    })
}

/* ---------------- Verify ---------------- */

fn verify(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let text = catalog::load(&params.catalog)?;
    let entries = catalog::extract_entries(&text);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} product(s) to verify", entries.len()));
        p.begin(entries.len());
    }

    let pools = load_pools(params)?;
    let mut fallback = FallbackResolver::new(&pools);
    let client = net::client()?;
    let pause = params.pause_ms.unwrap_or(CHECK_PAUSE_MS);

    let mut summary = RunSummary {
        processed: entries.len(),
        ..Default::default()
    };
    let mut updates: Vec<(String, String)> = Vec::new();

    for (i, e) in entries.iter().enumerate() {
        let label = format!("Testing: {}", clip(&e.name, 50));
        let verdict = check::check_image(&client, &e.image);

        if verdict.accessible {
            summary.accessible += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&label, "image accessible");
            }
        } else if e.image.contains(PLACEHOLDER_HOST) {
            // placeholder gone stale; swap in a curated shot for the category
            let alt = fallback.pick(&e.category);
            let alt_verdict = check::check_image(&client, &alt);
            if alt_verdict.accessible {
                updates.push((e.id.clone(), alt.clone()));
                summary.fixed += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(
                        &label,
                        &format!("image broken ({}); replaced with {}", verdict.reason, alt),
                    );
                }
            } else {
                summary.broken += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(
                        &label,
                        &format!(
                            "image broken ({}); alternative also broken ({})",
                            verdict.reason, alt_verdict.reason
                        ),
                    );
                }
                loge!("verify: {}: alternative {} broken: {}", e.id, alt, alt_verdict.reason);
            }
        } else {
            summary.broken += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(&label, &format!("image broken ({})", verdict.reason));
            }
            loge!("verify: {}: {}", e.id, verdict.reason);
        }

        thread::sleep(Duration::from_millis(pause));

        if (i + 1) % 10 == 0 {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!(
                    "Progress: {}/{}  accessible: {}  fixed: {}  broken: {}",
                    i + 1,
                    entries.len(),
                    summary.accessible,
                    summary.fixed,
                    summary.broken
                ));
            }
        }
    }

    if !updates.is_empty() {
        let (out, patched) = catalog::patch_all(&text, &updates);
        if !params.dry_run {
            catalog::save(&params.catalog, &out)?;
        }
        audit::write_mapping(&audit_path(params, VERIFY_FIXES_FILE), &updates)?;
        logf!("verify: patched {} record(s)", patched);
    }
    logf!(
        "verify: {} accessible, {} fixed, {} broken",
        summary.accessible,
        summary.fixed,
        summary.broken
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(summary)
}

/* ---------------- Probe ---------------- */

fn probe(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let text = catalog::load(&params.catalog)?;
    let urls = catalog::asset_urls(&text);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} asset image(s) to test", urls.len()));
        p.begin(urls.len());
    }

    let client = net::client()?;
    let pause = params.pause_ms.unwrap_or(CHECK_PAUSE_MS);

    let mut summary = RunSummary {
        processed: urls.len(),
        ..Default::default()
    };

    for url in &urls {
        let label = format!("Testing: {}", clip(url, 80));
        let verdict = check::check_image(&client, url);
        if verdict.accessible {
            summary.accessible += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&label, "working");
            }
        } else {
            summary.broken += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(&label, &verdict.reason);
            }
            loge!("probe: {}: {}", url, verdict.reason);
        }
        thread::sleep(Duration::from_millis(pause));
    }

    logf!(
        "probe: {} working, {} broken of {}",
        summary.accessible,
        summary.broken,
        summary.processed
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(summary)
}

/* ---------------- Helpers ---------------- */

fn load_pools(params: &Params) -> Result<PoolSet, Box<dyn Error>> {
    match &params.pools_file {
        Some(path) => pools::load(path),
        None => Ok(pools::builtin()),
    }
}

fn audit_path(params: &Params, default_name: &str) -> PathBuf {
    params
        .audit
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_name))
}

fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
