use crate::config::{
    GLYPH_COLUMNS, GLYPH_EMACS, GLYPH_EMPTY_WORKSPACE, GLYPH_FIREFOX, GLYPH_KITTY, GLYPH_MAXIMIZE,
    GLYPH_SLACK, GLYPH_WINDOW, ICON_FONT,
};
use crate::types::Workspace;

pub fn glyph_for_app(app_id: &str) -> &'static str {
    match app_id {
        "firefox" => GLYPH_FIREFOX,
        "kitty" => GLYPH_KITTY,
        "Slack" => GLYPH_SLACK,
        "emacs" => GLYPH_EMACS,
        _ => GLYPH_WINDOW,
    }
}

/// Wraps glyphs in Pango markup naming the icon font.
pub struct IconSet {
    font: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(ICON_FONT)
    }
}

impl IconSet {
    pub fn new(font: impl Into<String>) -> Self {
        Self { font: font.into() }
    }

    pub fn markup(&self, glyph: &str) -> String {
        format!("<span font=\"{}\">{glyph}</span>", self.font)
    }

    pub fn window(&self, app_id: &str) -> String {
        self.markup(glyph_for_app(app_id))
    }

    pub fn workspace(&self, workspace: Option<&Workspace>) -> String {
        match workspace.and_then(|workspace| workspace.focused_window.as_ref()) {
            Some(window) => self.window(&window.app_id),
            None => self.markup(GLYPH_EMPTY_WORKSPACE),
        }
    }

    pub fn maximize(&self) -> String {
        self.markup(GLYPH_MAXIMIZE)
    }

    pub fn columns(&self) -> String {
        self.markup(GLYPH_COLUMNS)
    }
}
