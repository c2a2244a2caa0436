//! Label demo screen
//!
//! Four labels exercising substring styling, line height and a delayed
//! text change, printed to a terminal or as HTML.

use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

use crate::label::{Label, TextChange};
use crate::render::{to_ansi, to_html};
use crate::styled::FontSpec;

const BOLD_TEXT: &str = "Testing bold : No te digo trigo por no llamarte Rodrigor me cago en tus muelas sexuarl tiene musho peligro";
const ITALIC_TEXT: &str = "Testing italic : No te digo trigo por no llamarte Rodrigor me cago en tus muelas sexuarl tiene musho peligro";
const LINE_HEIGHT_TEXT: &str = "Testing line height: Lorem fistrum laboris consequat tiene musho peligro ut ut. No te digo trigo por no llamarte Rodrigor torpedo reprehenderit nisi ut.";
const CHANGING_TEXT: &str = "Text that will change in 2 seconds...";
const CHANGED_TEXT: &str = "Text changed!";

#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Wait before the last label changes
    pub delay: Duration,
    /// Transition duration recorded on the change
    pub transition: Duration,
    pub html: bool,
    pub color: bool,
}

/// Build the four demo labels with their styling applied
pub fn build_labels() -> Vec<Label> {
    let mut bold = Label::new(BOLD_TEXT, 12);
    bold.make_substrings_bold(&["Testing", "bold"], Some(FontSpec::bold(14)));

    let mut italic = Label::new(ITALIC_TEXT, 12);
    italic.make_substrings_italic(&["Rodrigor", "tiene musho peligro"], None);

    let mut line_height = Label::new(LINE_HEIGHT_TEXT, 12);
    line_height.set_line_height(16);

    let changing = Label::new(CHANGING_TEXT.repeat(5), 12);

    vec![bold, italic, line_height, changing]
}

/// Print every label, wait, change the last one and print it again
pub async fn run_demo<W: Write>(out: &mut W, options: &DemoOptions) -> Result<()> {
    let mut labels = build_labels();

    writeln!(out, "{}", render_title(options)).context("Failed to write demo output")?;
    for label in &labels {
        write_label(out, label, options)?;
    }
    out.flush().context("Failed to flush demo output")?;

    if let Some(last) = labels.last_mut() {
        let change = TextChange::new(CHANGED_TEXT, true, options.transition);
        last.set_text_after(change, options.delay).await;
        log::info!("Demo label changed after {:?}", options.delay);
        write_label(out, last, options)?;
    }

    Ok(())
}

fn render_title(options: &DemoOptions) -> String {
    if options.html {
        "<h1>Label</h1>".to_string()
    } else {
        "Label".to_string()
    }
}

fn write_label<W: Write>(out: &mut W, label: &Label, options: &DemoOptions) -> Result<()> {
    let rendered = if options.html {
        to_html(label.styled())
    } else {
        to_ansi(label.styled(), options.color)
    };
    writeln!(out, "{}", rendered).context("Failed to write demo output")?;
    if !options.html {
        writeln!(out).context("Failed to write demo output")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styled::Style;

    fn options(html: bool) -> DemoOptions {
        DemoOptions {
            delay: Duration::ZERO,
            transition: Duration::from_millis(700),
            html,
            color: false,
        }
    }

    #[test]
    fn test_build_labels_styling() {
        let labels = build_labels();
        assert_eq!(labels.len(), 4);

        let bold = labels[0].styled();
        assert_eq!(bold.styles_at(0), vec![Style::Font(FontSpec::bold(14))]);
        assert_eq!(bold.styles_at(8), vec![Style::Font(FontSpec::bold(14))]);

        let italic = labels[1].styled();
        let rodrigor = italic.find("Rodrigor").unwrap();
        assert_eq!(italic.styles_at(rodrigor.start), vec![Style::Font(FontSpec::italic(12))]);

        assert_eq!(labels[2].styled().line_height(), Some(16));
        assert!(labels[3].text().unwrap().starts_with(CHANGING_TEXT));
    }

    #[tokio::test]
    async fn test_run_demo_plain() {
        let mut out = Vec::new();
        run_demo(&mut out, &options(false)).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Label\n"));
        assert!(text.contains(BOLD_TEXT));
        assert!(text.contains(CHANGING_TEXT));
        assert!(text.trim_end().ends_with(CHANGED_TEXT));
        assert!(!text.contains("\x1b["));
    }

    #[tokio::test]
    async fn test_run_demo_html() {
        let mut out = Vec::new();
        run_demo(&mut out, &options(true)).await.unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.starts_with("<h1>Label</h1>"));
        assert!(html.contains("<span style=\"font-size:14px;font-weight:bold\">Testing</span>"));
        assert!(html.contains("<p style=\"line-height:16px\">"));
        assert!(html.contains("<p>Text changed!</p>"));
    }
}
