//! Glyph sprites
//!
//! Maps the level data's asset type keys to terminal glyphs and colors.
//! Unknown keys get a neutral placeholder so a new level file never crashes
//! the renderer.

use ratatui::style::Color;

use super::mode::RenderMode;

/// A drawable glyph: character plus foreground color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub symbol: char,
    pub color: Color,
}

impl Glyph {
    const fn new(symbol: char, color: Color) -> Self {
        Self { symbol, color }
    }
}

/// Resolve a sprite type key to a glyph for the given render mode.
pub fn sprite_glyph(kind: &str, mode: RenderMode) -> Glyph {
    match mode {
        RenderMode::Unicode => unicode_glyph(kind),
        RenderMode::Ascii => ascii_glyph(kind),
    }
}

fn unicode_glyph(kind: &str) -> Glyph {
    match kind {
        // Searchables
        "duck" => Glyph::new('𝚫', Color::Yellow),
        "mushroom" => Glyph::new('♠', Color::Red),
        "star" => Glyph::new('★', Color::LightYellow),
        "basket" => Glyph::new('ᙀ', Color::Rgb(200, 150, 90)),

        // Flora
        "flower_pink" => Glyph::new('✿', Color::LightMagenta),
        "flower_yellow" => Glyph::new('✿', Color::Yellow),
        "tree" | "tree_green" => Glyph::new('♣', Color::Green),
        "tree_pink" => Glyph::new('♣', Color::LightMagenta),
        "bush" => Glyph::new('ʬ', Color::LightGreen),

        // Structures
        "house_pink" | "house_yellow" | "house" => Glyph::new('⌂', Color::LightRed),
        "fence" => Glyph::new('╫', Color::Rgb(150, 110, 70)),

        // Sky
        "cloud" | "cloud_small" | "cloud_large" => Glyph::new('☁', Color::White),
        "sun" => Glyph::new('☀', Color::LightYellow),

        // Creatures
        "cat_white" => Glyph::new('ᘚ', Color::White),
        "cat_gray" => Glyph::new('ᘚ', Color::Gray),
        "panda" => Glyph::new('ᗢ', Color::White),
        "person" => Glyph::new('ᛉ', Color::LightBlue),
        "pig" => Glyph::new('ᗜ', Color::LightMagenta),
        "dog" => Glyph::new('ᘞ', Color::Rgb(180, 140, 100)),

        // Effects
        "fireflies" => Glyph::new('✦', Color::LightYellow),

        _ => Glyph::new('◆', Color::Magenta),
    }
}

fn ascii_glyph(kind: &str) -> Glyph {
    match kind {
        "duck" => Glyph::new('d', Color::Yellow),
        "mushroom" => Glyph::new('m', Color::Red),
        "star" => Glyph::new('*', Color::LightYellow),
        "basket" => Glyph::new('u', Color::Rgb(200, 150, 90)),

        "flower_pink" => Glyph::new('f', Color::LightMagenta),
        "flower_yellow" => Glyph::new('f', Color::Yellow),
        "tree" | "tree_green" | "tree_pink" => Glyph::new('T', Color::Green),
        "bush" => Glyph::new('w', Color::LightGreen),

        "house_pink" | "house_yellow" | "house" => Glyph::new('H', Color::LightRed),
        "fence" => Glyph::new('#', Color::Rgb(150, 110, 70)),

        "cloud" | "cloud_small" | "cloud_large" => Glyph::new('o', Color::White),
        "sun" => Glyph::new('O', Color::LightYellow),

        "cat_white" => Glyph::new('c', Color::White),
        "cat_gray" => Glyph::new('c', Color::Gray),
        "panda" => Glyph::new('P', Color::White),
        "person" => Glyph::new('i', Color::LightBlue),
        "pig" => Glyph::new('p', Color::LightMagenta),
        "dog" => Glyph::new('g', Color::Rgb(180, 140, 100)),

        "fireflies" => Glyph::new('+', Color::LightYellow),

        _ => Glyph::new('?', Color::Magenta),
    }
}
