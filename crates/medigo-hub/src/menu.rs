//! Text rendering of navigation menus.

use medigo_contracts::navigation::NavigationEntry;

/// Icon keys used by the registry and navigation catalog, mapped to
/// terminal glyphs.
const ICON_GLYPHS: &[(&str, &str)] = &[
    ("layout-dashboard", "▦"),
    ("building", "▥"),
    ("shield-check", "✓"),
    ("users", "☰"),
    ("user-cog", "⚙"),
    ("user-check", "☑"),
    ("user-circle", "◉"),
    ("credit-card", "▭"),
    ("wallet", "◫"),
    ("bar-chart", "▤"),
    ("life-buoy", "⊕"),
    ("settings", "⚙"),
    ("package", "▣"),
    ("shopping-cart", "⊞"),
    ("file-text", "▯"),
    ("truck", "⇶"),
    ("calendar", "▦"),
    ("stethoscope", "♁"),
    ("video", "▶"),
    ("message-square", "✉"),
    ("folder", "▰"),
    ("flask", "⚗"),
    ("test-tube", "⚲"),
    ("clipboard", "▤"),
    ("siren", "⚠"),
    ("radio", "◎"),
    ("ambulance", "✚"),
    ("heart-pulse", "♥"),
    ("home", "⌂"),
    ("clock", "◷"),
];

/// The glyph for an icon key. Unknown keys have no icon.
pub fn icon_glyph(key: &str) -> Option<&'static str> {
    ICON_GLYPHS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, glyph)| *glyph)
}

/// One line per entry: glyph, title, href. Entries without a known icon
/// keep their column alignment.
pub fn render_menu(entries: &[NavigationEntry]) -> String {
    if entries.is_empty() {
        return "  (no navigation)\n".to_string();
    }

    let width = entries
        .iter()
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let glyph = icon_glyph(&entry.icon).unwrap_or(" ");
        let pad = width - entry.title.chars().count();
        out.push_str(&format!(
            "  {} {}{}  {}\n",
            glyph,
            entry.title,
            " ".repeat(pad),
            entry.href
        ));
    }
    out
}
