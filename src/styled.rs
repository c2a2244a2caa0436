//! Attributed text
//!
//! A [`StyledText`] is a string plus style runs over character ranges. Runs
//! may overlap; renderers combine every run covering a character. Substring
//! bold and italic replace any font styling already in their range.

use std::ops::Range;

use crate::decode::decode_html_entities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Rgb(u8, u8, u8),
}

impl Color {
    /// CSS color value
    pub fn css(&self) -> String {
        match self {
            Color::Black => "black".to_string(),
            Color::Red => "red".to_string(),
            Color::Green => "green".to_string(),
            Color::Yellow => "yellow".to_string(),
            Color::Blue => "blue".to_string(),
            Color::Magenta => "magenta".to_string(),
            Color::Cyan => "cyan".to_string(),
            Color::White => "white".to_string(),
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub size: u16,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub fn bold(size: u16) -> Self {
        Self { size, bold: true, italic: false }
    }

    pub fn italic(size: u16) -> Self {
        Self { size, bold: false, italic: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Color(Color),
    LineHeight(u16),
    Font(FontSpec),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRun {
    /// Character range the style applies to
    pub range: Range<usize>,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    runs: Vec<StyleRun>,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Whole text styled with `style`
    pub fn with_style(text: impl Into<String>, style: Style) -> Self {
        let mut styled = Self::plain(text);
        styled.add_style(0..styled.len(), style);
        styled
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::with_style(text, Style::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::with_style(text, Style::Italic)
    }

    pub fn underline(text: impl Into<String>) -> Self {
        Self::with_style(text, Style::Underline)
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self::with_style(text, Style::Color(color))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Add a style over `range`, clamped to the text. Empty ranges are ignored.
    pub fn add_style(&mut self, range: Range<usize>, style: Style) {
        let end = range.end.min(self.len());
        if range.start >= end {
            return;
        }
        self.runs.push(StyleRun {
            range: range.start..end,
            style,
        });
    }

    /// Styles covering character `index`, in the order they were added
    pub fn styles_at(&self, index: usize) -> Vec<Style> {
        self.runs
            .iter()
            .filter(|run| run.range.contains(&index))
            .map(|run| run.style)
            .collect()
    }

    /// Character range of the first occurrence of `needle`
    pub fn find(&self, needle: &str) -> Option<Range<usize>> {
        if needle.is_empty() {
            return None;
        }
        let byte = self.text.find(needle)?;
        let start = self.text[..byte].chars().count();
        Some(start..start + needle.chars().count())
    }

    /// Character ranges of every non-overlapping occurrence of `needle`
    pub fn find_all(&self, needle: &str) -> Vec<Range<usize>> {
        if needle.is_empty() {
            return Vec::new();
        }
        let needle_len = needle.chars().count();
        let mut ranges = Vec::new();
        let mut chars_before = 0;
        let mut last_byte = 0;
        for (byte, _) in self.text.match_indices(needle) {
            chars_before += self.text[last_byte..byte].chars().count();
            ranges.push(chars_before..chars_before + needle_len);
            chars_before += needle_len;
            last_byte = byte + needle.len();
        }
        ranges
    }

    /// Color every occurrence of `substring`
    pub fn color_substring(&mut self, substring: &str, color: Color) {
        for range in self.find_all(substring) {
            self.add_style(range, Style::Color(color));
        }
    }

    /// Make the first occurrence of `substring` bold, using `font` when given.
    /// Returns `false` when the substring does not occur.
    pub fn make_substring_bold(&mut self, substring: &str, font: Option<FontSpec>) -> bool {
        self.style_first(substring, font.map_or(Style::Bold, Style::Font))
    }

    pub fn make_substrings_bold(&mut self, substrings: &[&str], font: Option<FontSpec>) {
        for substring in substrings {
            self.make_substring_bold(substring, font);
        }
    }

    /// Make the first occurrence of `substring` italic, using `font` when given.
    /// Returns `false` when the substring does not occur.
    pub fn make_substring_italic(&mut self, substring: &str, font: Option<FontSpec>) -> bool {
        self.style_first(substring, font.map_or(Style::Italic, Style::Font))
    }

    pub fn make_substrings_italic(&mut self, substrings: &[&str], font: Option<FontSpec>) {
        for substring in substrings {
            self.make_substring_italic(substring, font);
        }
    }

    /// Line height over the whole text
    pub fn set_line_height(&mut self, line_height: u16) {
        self.runs.retain(|run| !matches!(run.style, Style::LineHeight(_)));
        self.add_style(0..self.len(), Style::LineHeight(line_height));
    }

    /// Current line height, if one was set
    pub fn line_height(&self) -> Option<u16> {
        self.runs.iter().find_map(|run| match run.style {
            Style::LineHeight(h) => Some(h),
            _ => None,
        })
    }

    /// Decode HTML entities in the text, moving every run so it still
    /// covers the same characters. A run touching part of an entity grows to
    /// cover its whole replacement.
    pub fn decode_html_entities(&self) -> StyledText {
        let decoded = decode_html_entities(&self.text);
        let runs = self
            .runs
            .iter()
            .map(|run| StyleRun {
                range: decoded.remap(run.range.clone()),
                style: run.style,
            })
            .collect();
        log::debug!(
            "Decoded {} entities, remapped {} style runs",
            decoded.replacements(),
            self.runs.len()
        );
        StyledText {
            text: decoded.text,
            runs,
        }
    }

    fn style_first(&mut self, substring: &str, style: Style) -> bool {
        match self.find(substring) {
            Some(range) => {
                self.clear_font_styles(&range);
                self.add_style(range, style);
                true
            }
            None => false,
        }
    }

    /// Cut bold, italic and font runs out of `range`, keeping the parts
    /// outside it
    fn clear_font_styles(&mut self, range: &Range<usize>) {
        let mut kept = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            let overlaps = run.range.start < range.end && range.start < run.range.end;
            if !overlaps || !is_font_style(&run.style) {
                kept.push(run);
                continue;
            }
            if run.range.start < range.start {
                kept.push(StyleRun {
                    range: run.range.start..range.start,
                    style: run.style,
                });
            }
            if run.range.end > range.end {
                kept.push(StyleRun {
                    range: range.end..run.range.end,
                    style: run.style,
                });
            }
        }
        self.runs = kept;
    }
}

fn is_font_style(style: &Style) -> bool {
    matches!(style, Style::Bold | Style::Italic | Style::Font(_))
}
