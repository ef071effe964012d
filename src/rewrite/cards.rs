// src/rewrite/cards.rs
//
// Card grid upgrade: every legacy `gp-card` block (image, title, price)
// becomes a clickable card linking to the gamepass detail page, with a
// game badge, price row and buy button.

use std::error::Error;
use std::path::Path;

use crate::core::html;
use crate::core::sanitize::item_id;
use crate::file;
use crate::params::{DETAIL_PAGE, FALLBACK_BADGE};

// Legacy block layout. Fields appear in this order; anything may sit
// between them, newlines included. The block ends at the first </div>
// immediately followed (whitespace apart) by another </div>.
const CARD_OPEN: &str = r#"<div class="gp-card">"#;
const IMG_OPEN: &str = r#"<img src=""#;
const IMG_CLOSE: &str = r#"""#;
const TITLE_OPEN: &str = r#"<h3 class="gp-card-title">"#;
const TITLE_CLOSE: &str = "</h3>";
const PRICE_OPEN: &str = r#"<span class="gp-card-price">"#;
const PRICE_CLOSE: &str = "</span>";
const DIV_CLOSE: &str = "</div>";

const H1_OPEN: &str = "<h1>";
const H1_CLOSE: &str = "</h1>";

/// Fields captured from one legacy card block, borrowed from the page.
struct Card<'a> {
    image: &'a str,
    title: &'a str,
    price: &'a str,
}

/// A matched block: the captures plus the span it occupies in the page.
struct CardMatch<'a> {
    card: Card<'a>,
    start: usize,
    end: usize,
}

/// Rewrite one page in place. Returns whether a write occurred.
/// Read and write failures propagate; existence is the caller's problem.
pub fn rewrite_file(path: &Path) -> Result<bool, Box<dyn Error>> {
    let content = file::read_page(path)?;
    let game_id = file::page_stem(path);
    let badge = badge_title(&content);

    let rewritten = rewrite_content(&content, &game_id, &badge);
    if rewritten != content {
        file::write_page(path, &rewritten)?;
        return Ok(true);
    }
    Ok(false)
}

/// Badge text for every card on the page: the first <h1> inner text,
/// uppercased. Pages without a heading fall back to a fixed label.
pub fn badge_title(content: &str) -> String {
    match html::slice_between(content, H1_OPEN, H1_CLOSE) {
        Some(h1) => h1.to_uppercase(),
        None => s!(FALLBACK_BADGE),
    }
}

/// Replace every matched card block, keeping all surrounding content and
/// the block order untouched. No matches → the input comes back verbatim.
pub fn rewrite_content(content: &str, game_id: &str, badge: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut pos = 0usize;

    while let Some(m) = next_card(content, pos) {
        out.push_str(&content[pos..m.start]);
        out.push_str(&render_card(&m.card, game_id, badge));
        pos = m.end;
    }
    out.push_str(&content[pos..]);
    out
}

/// Next card block at or after `pos`. An opener whose required fields
/// never show up downstream is stepped over, not an error.
fn next_card(content: &str, pos: usize) -> Option<CardMatch<'_>> {
    let mut at = pos;
    loop {
        let start = html::find_from(content, CARD_OPEN, at)?;
        if let Some(m) = card_at(content, start) {
            return Some(m);
        }
        at = start + CARD_OPEN.len();
    }
}

/// Try to complete a match anchored at `start` (which holds CARD_OPEN).
/// Each field is the first occurrence after the previous one; the span
/// ends at the first double </div>. Malformed nesting with an early
/// </div></div> therefore truncates the match. Best effort, accepted.
fn card_at(content: &str, start: usize) -> Option<CardMatch<'_>> {
    let p = start + CARD_OPEN.len();
    let (image, p) = html::capture(content, p, IMG_OPEN, IMG_CLOSE)?;
    let (title, p) = html::capture(content, p, TITLE_OPEN, TITLE_CLOSE)?;
    let (price, p) = html::capture(content, p, PRICE_OPEN, PRICE_CLOSE)?;
    let end = html::close_pair(content, DIV_CLOSE, p)?;

    Some(CardMatch { card: Card { image, title, price }, start, end })
}

/// The upgraded card. Indentation matches the grid markup on the live
/// pages; the svg cart icon is fixed, only the five fields interpolate.
fn render_card(card: &Card, game_id: &str, badge: &str) -> String {
    let item = item_id(card.title);
    format!(
        r#"        <a href="{detail}?game={game}&id={item}" class="gp-card">
          <div class="gp-card-top">
            <div class="gp-badge">{badge}</div>
            <img src="{img}" alt="{title}">
          </div>
          <div class="gp-card-info">
            <h3 class="gp-card-title">{title}</h3>
            <div class="gp-card-price-row">
              <span class="gp-card-price">{price}</span>
              <span class="gp-card-pix">À vista no Pix</span>
            </div>
            <button class="gp-card-btn">
              <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="9" cy="21" r="1"></circle><circle cx="20" cy="21" r="1"></circle>
                <path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"></path>
              </svg>
              Comprar agora
            </button>
          </div>
        </a>"#,
        detail = DETAIL_PAGE,
        game = game_id,
        item = item,
        badge = badge,
        img = card.image,
        title = card.title,
        price = card.price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>
<h1>Blade Ball</h1>
<section class="gp-grid">
  <div class="gp-card">
    <div class="gp-card-top">
      <img src="img/bladeball/sword.webp" alt="">
    </div>
    <div class="gp-card-info">
      <h3 class="gp-card-title">Blade Ball!</h3>
      <span class="gp-card-price">R$ 9,90</span>
    </div>
  </div>
  <div class="gp-card">
    <div class="gp-card-top">
      <img src="img/bladeball/gems.webp" alt="">
    </div>
    <div class="gp-card-info">
      <h3 class="gp-card-title">1,000 Gems + Bonus</h3>
      <span class="gp-card-price">R$ 24,90</span>
    </div>
  </div>
</section>
</html>
"#;

    #[test]
    fn rewrites_every_block_in_order() {
        let out = rewrite_content(PAGE, "bladeball", &badge_title(PAGE));

        assert_eq!(out.matches(r#"class="gp-card""#).count(), 2);
        assert_eq!(out.matches(r#"<div class="gp-card">"#).count(), 0);

        let first = out.find("id=bladeball").unwrap();
        let second = out.find("id=1,000gemsbonus").unwrap();
        assert!(first < second);
    }

    #[test]
    fn captured_fields_survive_verbatim() {
        let out = rewrite_content(PAGE, "bladeball", "BLADE BALL");

        assert!(out.contains(r#"<img src="img/bladeball/sword.webp" alt="Blade Ball!">"#));
        assert!(out.contains(r#"<h3 class="gp-card-title">Blade Ball!</h3>"#));
        assert!(out.contains(r#"<span class="gp-card-price">R$ 9,90</span>"#));
        assert!(out.contains(r#"<span class="gp-card-price">R$ 24,90</span>"#));
        assert!(out.contains("À vista no Pix"));
        assert!(out.contains("Comprar agora"));
    }

    #[test]
    fn link_carries_game_and_item() {
        let out = rewrite_content(PAGE, "bladeball", "BLADE BALL");
        assert!(out.contains(
            r#"<a href="pages/gamepass-detail.html?game=bladeball&id=bladeball" class="gp-card">"#
        ));
    }

    #[test]
    fn surrounding_content_untouched() {
        let out = rewrite_content(PAGE, "bladeball", "BLADE BALL");
        assert!(out.starts_with("<html>\n<h1>Blade Ball</h1>\n<section class=\"gp-grid\">\n"));
        assert!(out.ends_with("</section>\n</html>\n"));
    }

    #[test]
    fn badge_uppercases_heading() {
        assert_eq!(badge_title(PAGE), "BLADE BALL");
    }

    #[test]
    fn badge_falls_back_without_heading() {
        let page = PAGE.replace("<h1>Blade Ball</h1>", "");
        assert_eq!(badge_title(&page), "GAMEPASS");
        let out = rewrite_content(&page, "bladeball", &badge_title(&page));
        assert_eq!(out.matches(r#"<div class="gp-badge">GAMEPASS</div>"#).count(), 2);
    }

    #[test]
    fn no_blocks_means_verbatim_output() {
        let page = "<html><h1>Empty</h1><p>nothing here</p></html>";
        assert_eq!(rewrite_content(page, "empty", "EMPTY"), page);
    }

    #[test]
    fn rewrite_is_idempotent() {
        let once = rewrite_content(PAGE, "bladeball", "BLADE BALL");
        let twice = rewrite_content(&once, "bladeball", "BLADE BALL");
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicate_titles_duplicate_ids() {
        let page = PAGE.replace("1,000 Gems + Bonus", "Blade Ball!");
        let out = rewrite_content(&page, "bladeball", "BLADE BALL");
        assert_eq!(out.matches("id=bladeball").count(), 2);
    }

    #[test]
    fn decoy_opener_swallows_to_first_close() {
        // An opener with no fields of its own completes its match with the
        // next block's fields, same as the non-greedy pattern would.
        let page = join!(r#"<div class="gp-card">broken"#, "\n", PAGE);
        let out = rewrite_content(&page, "bladeball", "BLADE BALL");
        assert!(out.starts_with(r#"        <a href="#));
        assert!(out.contains("id=1,000gemsbonus"));
    }

    #[test]
    fn trailing_opener_without_fields_is_ignored() {
        let page = join!(PAGE, r#"<div class="gp-card">no fields after"#);
        let out = rewrite_content(&page, "bladeball", "BLADE BALL");
        assert!(out.ends_with(r#"<div class="gp-card">no fields after"#));
        assert_eq!(out.matches("</a>").count(), 2);
    }

    #[test]
    fn early_double_close_truncates_match() {
        // A stray </div></div> between title and price ends nothing here
        // (fields come first), but one after the price cuts the span short.
        let page = r#"<div class="gp-card">
  <img src="a.webp">
  <h3 class="gp-card-title">T</h3>
  <span class="gp-card-price">R$ 1</span>
  </div>
  </div>
  <p>trailing</p>
</div>
"#;
        let out = rewrite_content(page, "g", "G");
        assert!(out.contains("<p>trailing</p>"));
        assert!(out.contains("</a>\n  <p>trailing</p>"));
    }
}
