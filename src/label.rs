//! Text label model
//!
//! Holds what a label displays and how it is styled. Transitions are only
//! recorded (their duration), never animated.

use std::time::Duration;

use crate::styled::{FontSpec, StyledText};

/// A pending text change, applied now or after a delay
#[derive(Debug, Clone, PartialEq)]
pub struct TextChange {
    pub text: Option<String>,
    pub animated: bool,
    pub duration: Duration,
}

impl TextChange {
    pub fn new(text: impl Into<String>, animated: bool, duration: Duration) -> Self {
        Self {
            text: Some(text.into()),
            animated,
            duration,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Label {
    text: Option<String>,
    styled: StyledText,
    /// Point size used when a style asks for the default font
    pub font_size: u16,
    last_transition: Option<Duration>,
}

impl Label {
    pub fn new(text: impl Into<String>, font_size: u16) -> Self {
        let text = text.into();
        Self {
            styled: StyledText::plain(text.clone()),
            text: Some(text),
            font_size,
            last_transition: None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn styled(&self) -> &StyledText {
        &self.styled
    }

    /// Duration of the cross-dissolve requested by the last animated change
    pub fn last_transition(&self) -> Option<Duration> {
        self.last_transition
    }

    /// Replace the text. Styling from the previous text is dropped.
    pub fn set_text(&mut self, text: Option<String>, animated: bool, duration: Duration) {
        self.styled = StyledText::plain(text.clone().unwrap_or_default());
        self.text = text;
        self.last_transition = animated.then_some(duration);
    }

    pub fn apply(&mut self, change: TextChange) {
        self.set_text(change.text, change.animated, change.duration);
    }

    /// Wait `delay` on the runtime timer, then apply `change`
    pub async fn set_text_after(&mut self, change: TextChange, delay: Duration) {
        log::debug!("Scheduling label text change in {:?}", delay);
        tokio::time::sleep(delay).await;
        self.apply(change);
    }

    /// Bold the first occurrence of each substring. Without a font, a bold
    /// font at the label's size is used.
    pub fn make_substrings_bold(&mut self, substrings: &[&str], font: Option<FontSpec>) {
        let font = font.unwrap_or_else(|| FontSpec::bold(self.font_size));
        self.styled.make_substrings_bold(substrings, Some(font));
    }

    /// Italicize the first occurrence of each substring. Without a font, an
    /// italic font at the label's size is used.
    pub fn make_substrings_italic(&mut self, substrings: &[&str], font: Option<FontSpec>) {
        let font = font.unwrap_or_else(|| FontSpec::italic(self.font_size));
        self.styled.make_substrings_italic(substrings, Some(font));
    }

    pub fn set_line_height(&mut self, line_height: u16) {
        self.styled.set_line_height(line_height);
    }
}
