pub const DEFAULT_MSG_PROGRAM: &str = "spatialmsg";
pub const ICON_FONT: &str = "Font Awesome 6 Free";

pub const GLYPH_FIREFOX: &str = "\u{f269}";
pub const GLYPH_KITTY: &str = "\u{f120}";
pub const GLYPH_SLACK: &str = "\u{f198}";
pub const GLYPH_EMACS: &str = "\u{f5fc}";
pub const GLYPH_WINDOW: &str = "\u{f2d0}";

pub const GLYPH_EMPTY_WORKSPACE: &str = "\u{25ef}";
pub const GLYPH_MAXIMIZE: &str = "\u{f06e}";
pub const GLYPH_COLUMNS: &str = "\u{f0db}";

pub const FOCUS: &str = "focus";
pub const UNFOCUS: &str = "unfocus";

pub const fn focus_marker(is_focused: bool) -> &'static str {
    if is_focused { FOCUS } else { UNFOCUS }
}
