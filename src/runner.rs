// src/runner.rs
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{
    file,
    params::{PageKind, Params},
    rewrite::{cards, header},
};

/// Optional progress sink for the frontend.
/// CLI: print per-page result lines; tests: NullProgress.
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn item_done(&mut self, _path: &Path, _changed: bool) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// What one run produced: (page, rewrite occurred) per processed file.
/// Skipped (missing) pages are absent.
pub struct RunSummary {
    pub results: Vec<(PathBuf, bool)>,
}

/// Top-level runner: dispatch on page kind and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    match params.page {
        PageKind::Cards => rewrite_cards(params, progress),
        PageKind::Header => rewrite_headers(params, progress),
    }
}

/* ---------------- Cards pass ---------------- */

fn rewrite_cards(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let pages = params.pages();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    let mut results = Vec::with_capacity(pages.len());
    for path in pages {
        if skip_missing(&path, progress.as_deref_mut()) {
            continue;
        }
        // Read or write failure is fatal to the whole run. Sequential,
        // so every page before the failure is already on disk.
        let changed = cards::rewrite_file(&path)?;
        logf!("cards {}: changed={}", path.display(), changed);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&path, changed);
        }
        results.push((path, changed));
    }

    Ok(RunSummary { results })
}

/* ---------------- Header pass ---------------- */

fn rewrite_headers(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    // Template is read once, before any page is touched. Missing template
    // aborts the run here.
    let template = file::read_page(&params.template).inspect_err(|e| {
        loge!("header template: {e}");
    })?;

    let pages = params.pages();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    let mut results = Vec::with_capacity(pages.len());
    for path in pages {
        if skip_missing(&path, progress.as_deref_mut()) {
            continue;
        }
        let (outcome, changed) = header::rewrite_file(&path, &template)?;
        logf!("header {}: {:?} changed={}", path.display(), outcome, changed);
        if !changed {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&outcome.describe(&path));
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&path, changed);
        }
        results.push((path, changed));
    }

    Ok(RunSummary { results })
}

/* ---------------- Shared ---------------- */

/// Existence pre-check lives here, not in the rewriters: a listed page
/// that is absent is skipped, everything else continues.
fn skip_missing(path: &Path, progress: Option<&mut (dyn Progress + '_)>) -> bool {
    if path.exists() {
        return false;
    }
    logf!("skip {}: file not found", path.display());
    if let Some(p) = progress {
        p.log(&format!("Skipping {}: file not found.", path.display()));
    }
    true
}
