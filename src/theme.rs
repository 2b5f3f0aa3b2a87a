//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
}

/// Picker checklist styles
pub mod picker {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;

    pub const ITEM_NORMAL_FG: Color = palette::TEXT;
    pub const ITEM_CURSOR_FG: Color = palette::TEXT;
    pub const ITEM_CURSOR_BG: Color = palette::BG_HIGHLIGHT;
    pub const ITEM_CURSOR_MODIFIER: Modifier = Modifier::BOLD;

    pub const MARK_SELECTED: Color = palette::SUCCESS;
    pub const MARK_UNSELECTED: Color = palette::TEXT_DIM;
}

/// Help line styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const WARNING: Color = palette::WARNING;
}
