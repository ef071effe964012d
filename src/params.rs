// src/params.rs
use std::path::PathBuf;

// Generated card links
pub const DETAIL_PAGE: &str = "pages/gamepass-detail.html";
pub const FALLBACK_BADGE: &str = "GAMEPASS";

// Header pass
pub const HEADER_TEMPLATE: &str = "header.html";
// Pages carrying this marker already have the upgraded header
pub const HEADER_SENTINEL: &str = r#"id="searchOverlay""#;

/// Game pages whose card grids get upgraded, in processing order.
pub const CARD_PAGES: &[&str] = &[
    "99forest.html", "afs.html", "arise.html", "bfruits.html", "bladeball.html",
    "block.html", "brook.html", "escapetsunami.html", "fish.html", "gpo.html",
    "hypershot.html", "kingl.html", "stealab.html", "tapsimulator.html", "vbl.html",
];

/// Every page that carries the site header, in processing order.
pub const HEADER_PAGES: &[&str] = &[
    "vbl.html", "tutoriais.html", "tutoriais/verificacao-identidade.html",
    "tutoriais/status-remessa.html", "tutoriais/saldos-pendentes.html",
    "tutoriais/registro-atividades.html", "tutoriais/modalidades-envio.html",
    "tutoriais/como-criar-gamepass.html", "tutoriais/ajuste-preco-regional.html",
    "termos.html", "tapsimulator.html", "suporte.html", "stealab.html",
    "privacidade.html", "pages/robux-details.html", "kingl.html", "index.html",
    "hypershot.html", "gpo.html", "fish.html", "escapetsunami.html", "catalogo.html",
    "brook.html", "block.html", "bladeball.html", "bfruits.html", "arise.html",
    "afs.html", "99forest.html",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Cards,
    Header,
}

#[derive(Clone)]
pub struct Params {
    pub page: PageKind,             // which rewrite pass to run
    pub files: Option<Vec<PathBuf>>,// override the built-in page list
    pub template: PathBuf,          // header source (header pass only)
}

impl Params {
    pub fn new() -> Self {
        Self {
            page: PageKind::Cards,
            files: None,
            template: PathBuf::from(HEADER_TEMPLATE),
        }
    }

    /// Resolved page list for this run: explicit files if given,
    /// otherwise the built-in list for the selected pass.
    pub fn pages(&self) -> Vec<PathBuf> {
        if let Some(files) = &self.files {
            return files.clone();
        }
        let builtin = match self.page {
            PageKind::Cards => CARD_PAGES,
            PageKind::Header => HEADER_PAGES,
        };
        builtin.iter().copied().map(PathBuf::from).collect()
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
