// src/rewrite/header.rs
//
// Site-wide header upgrade. The span from the `<!-- Header -->` comment
// through the first `</header>` close is swapped for the template; pages
// predating the header entirely get it injected right after <body>.

use std::error::Error;
use std::path::Path;

use crate::core::html;
use crate::file;
use crate::params::HEADER_SENTINEL;

const HEADER_MARK: &str = "<!-- Header -->";
const HEADER_CLOSE: &str = "</header>";
const BODY_OPEN: &str = "<body";

/// What the pass decided for one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Replaced,
    Injected,
    AlreadyUpgraded,
    NoAnchor,
}

impl Outcome {
    pub fn describe(&self, path: &Path) -> String {
        match self {
            Outcome::Replaced => format!("Replaced header in {}", path.display()),
            Outcome::Injected => format!("Injected header in {}", path.display()),
            Outcome::AlreadyUpgraded => {
                format!("Skipping {}: already contains the new header.", path.display())
            }
            Outcome::NoAnchor => {
                format!("Skipping {}: no header span or <body> tag found.", path.display())
            }
        }
    }
}

/// Upgrade one page in place. Returns the outcome and whether a write
/// occurred. The template is read once per run by the caller.
pub fn rewrite_file(path: &Path, template: &str) -> Result<(Outcome, bool), Box<dyn Error>> {
    let content = file::read_page(path)?;
    let (outcome, rewritten) = rewrite_content(&content, template);

    match rewritten {
        Some(new) if new != content => {
            file::write_page(path, &new)?;
            Ok((outcome, true))
        }
        _ => Ok((outcome, false)),
    }
}

/// Pure transform. `Some` content is returned only for the replace and
/// inject outcomes; skips leave the page alone.
pub fn rewrite_content(content: &str, template: &str) -> (Outcome, Option<String>) {
    if content.contains(HEADER_SENTINEL) {
        return (Outcome::AlreadyUpgraded, None);
    }

    if let Some((start, end)) = header_span(content) {
        // first span only; pages carry at most one header
        let new = join!(&content[..start], template, &content[end..]);
        return (Outcome::Replaced, Some(new));
    }

    if let Some(at) = html::open_tag_end(content, BODY_OPEN, 0) {
        let new = join!(&content[..at], "\n", template, &content[at..]);
        return (Outcome::Injected, Some(new));
    }

    (Outcome::NoAnchor, None)
}

/// Span from the first header comment through the first `</header>`
/// after it, both ends inclusive.
fn header_span(s: &str) -> Option<(usize, usize)> {
    let start = s.find(HEADER_MARK)?;
    let close = html::find_from(s, HEADER_CLOSE, start + HEADER_MARK.len())?;
    Some((start, close + HEADER_CLOSE.len()))
}
