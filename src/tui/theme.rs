use ratatui::style::Color;

// Accent colors, one per hierarchy depth (cycled for deeper levels)
pub const ACCENT_CORAL: Color = Color::Rgb(232, 131, 136);      // #E88388
pub const ACCENT_GOLD: Color = Color::Rgb(219, 171, 121);       // #DBAB79
pub const ACCENT_LIGHT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const ACCENT_MINT: Color = Color::Rgb(161, 193, 129);       // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);          // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);        // #FFFFFF
pub const HIGHLIGHT_BG: Color = Color::Rgb(48, 52, 60);         // open list cursor row

const LEVEL_ACCENTS: [Color; 4] = [ACCENT_LIGHT_BLUE, ACCENT_MINT, ACCENT_GOLD, ACCENT_CORAL];

/// Accent color for the level at `depth` in the hierarchy.
pub fn level_accent(depth: usize) -> Color {
    LEVEL_ACCENTS[depth % LEVEL_ACCENTS.len()]
}
