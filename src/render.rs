//! Rendering of styled text
//!
//! Two targets: ANSI terminal output through crossterm, and a small HTML
//! fragment for anything that displays markup.

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

use crate::styled::{Color, Style, StyledText};

/// Whether terminal output should carry color and attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Decide whether to emit ANSI styling
///
/// Environment variables checked (in order):
/// - TEXTKIT_COLOR: "always" or "never" (explicit control, overrides `mode`)
/// - NO_COLOR: any non-empty value disables color in `Auto` mode
/// - TERM: "dumb" disables color in `Auto` mode
///
/// In `Auto` mode with none of the above, color is used when stdout is a
/// terminal.
pub fn color_enabled(mode: ColorMode) -> bool {
    if let Ok(choice) = env::var("TEXTKIT_COLOR") {
        match choice.to_lowercase().as_str() {
            "always" | "1" | "true" => return true,
            "never" | "0" | "false" => return false,
            _ => {}
        }
    }

    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if env::var("NO_COLOR").is_ok_and(|v| !v.is_empty()) {
                return false;
            }
            if env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Render for a terminal. Without color the plain text is returned.
pub fn to_ansi(styled: &StyledText, color: bool) -> String {
    if !color {
        return styled.text().to_string();
    }

    let mut out = String::new();
    for (segment, styles) in segments(styled) {
        if styles.is_empty() {
            out.push_str(&segment);
            continue;
        }
        let content_style = terminal_style(&styles);
        out.push_str(&content_style.apply(segment).to_string());
    }
    out
}

/// Render as an HTML paragraph with inline tags
pub fn to_html(styled: &StyledText) -> String {
    let mut out = match styled.line_height() {
        Some(h) => format!("<p style=\"line-height:{}px\">", h),
        None => String::from("<p>"),
    };

    for (segment, styles) in segments(styled) {
        let tags: Vec<(String, &str)> = styles.iter().filter_map(html_tag).collect();
        for (open, _) in &tags {
            out.push_str(open);
        }
        out.push_str(&html_escape::encode_text(&segment));
        for (_, close) in tags.iter().rev() {
            out.push_str(close);
        }
    }

    out.push_str("</p>");
    out
}

/// Split the text at every run boundary, pairing each piece with the
/// styles active over it
fn segments(styled: &StyledText) -> Vec<(String, Vec<Style>)> {
    let chars: Vec<char> = styled.text().chars().collect();
    let mut bounds: Vec<usize> = vec![0, chars.len()];
    for run in styled.runs() {
        bounds.push(run.range.start);
        bounds.push(run.range.end);
    }
    bounds.sort_unstable();
    bounds.dedup();

    bounds
        .windows(2)
        .map(|w| {
            let segment: String = chars[w[0]..w[1]].iter().collect();
            (segment, styled.styles_at(w[0]))
        })
        .collect()
}

fn terminal_style(styles: &[Style]) -> ContentStyle {
    let mut content_style = ContentStyle::new();
    for style in styles {
        match style {
            Style::Bold => content_style.attributes.set(Attribute::Bold),
            Style::Italic => content_style.attributes.set(Attribute::Italic),
            Style::Underline => content_style.attributes.set(Attribute::Underlined),
            Style::Color(color) => content_style.foreground_color = Some(terminal_color(*color)),
            Style::Font(font) => {
                if font.bold {
                    content_style.attributes.set(Attribute::Bold);
                }
                if font.italic {
                    content_style.attributes.set(Attribute::Italic);
                }
            }
            // Terminals have no line spacing control
            Style::LineHeight(_) => {}
        }
    }
    content_style
}

fn terminal_color(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::Red => TermColor::Red,
        Color::Green => TermColor::Green,
        Color::Yellow => TermColor::Yellow,
        Color::Blue => TermColor::Blue,
        Color::Magenta => TermColor::Magenta,
        Color::Cyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
    }
}

fn html_tag(style: &Style) -> Option<(String, &'static str)> {
    match style {
        Style::Bold => Some(("<b>".to_string(), "</b>")),
        Style::Italic => Some(("<i>".to_string(), "</i>")),
        Style::Underline => Some(("<u>".to_string(), "</u>")),
        Style::Color(color) => Some((format!("<span style=\"color:{}\">", color.css()), "</span>")),
        Style::Font(font) => {
            let mut css = format!("font-size:{}px", font.size);
            if font.bold {
                css.push_str(";font-weight:bold");
            }
            if font.italic {
                css.push_str(";font-style:italic");
            }
            Some((format!("<span style=\"{}\">", css), "</span>"))
        }
        Style::LineHeight(_) => None,
    }
}
