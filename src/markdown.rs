//! Markdown-to-markup conversion for assistant replies.
//!
//! The renderer is a fixed sequence of rewrite passes. Markup emitted by a
//! pass is parked in a [`Stash`] and replaced by a private-use placeholder,
//! so later passes only ever see the author's text: a `*` inside a formula
//! or a `>` inside a tag can never be picked up again. Math and code bodies
//! are parked whole and come out verbatim; quote and emphasis bodies stay in
//! the text and keep being rewritten by the passes after them.

use std::sync::LazyLock;

use regex::{Captures, Regex};

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

const LINE_BREAK: &str = "<br>";
const BULLET_GLYPH: &str = "\u{2022}";

static BLOCK_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").expect("block math regex"));
static INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$\n]+)\$").expect("inline math regex"));
static BLOCK_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*>[ \t]*(.+)$").expect("block quote regex"));
static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([^`]+)```").expect("fenced code regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold regex"));
// An italic span must open and close against non-space text, so "* item"
// bullets and "2 * 3" never start one.
static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*").expect("italic regex")
});
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*][ \t]+(.+)$").expect("bullet regex"));
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}(\d+)\x{E001}").expect("placeholder regex"));

/// What happens to the captured body of a pass.
#[derive(Clone, Copy)]
enum Body {
    /// Parked with its tags; no later pass touches it.
    Verbatim,
    /// Left in the text between parked tags.
    Markdown,
}

struct Pass {
    pattern: &'static LazyLock<Regex>,
    open: &'static str,
    close: &'static str,
    body: Body,
}

static PASSES: [Pass; 7] = [
    Pass {
        pattern: &BLOCK_MATH,
        open: r#"<div class="math-display">"#,
        close: "</div>",
        body: Body::Verbatim,
    },
    Pass {
        pattern: &INLINE_MATH,
        open: r#"<span class="math-inline">"#,
        close: "</span>",
        body: Body::Verbatim,
    },
    Pass {
        pattern: &BLOCK_QUOTE,
        open: "<blockquote>",
        close: "</blockquote>",
        body: Body::Markdown,
    },
    Pass {
        pattern: &FENCED_CODE,
        open: "<pre><code>",
        close: "</code></pre>",
        body: Body::Verbatim,
    },
    Pass {
        pattern: &INLINE_CODE,
        open: "<code>",
        close: "</code>",
        body: Body::Verbatim,
    },
    Pass {
        pattern: &BOLD,
        open: "<strong>",
        close: "</strong>",
        body: Body::Markdown,
    },
    Pass {
        pattern: &ITALIC,
        open: "<em>",
        close: "</em>",
        body: Body::Markdown,
    },
];

impl Pass {
    fn apply(&self, text: &str, stash: &mut Stash) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let inner = &caps[1];
                match self.body {
                    Body::Verbatim => stash.hold(format!("{}{}{}", self.open, inner, self.close)),
                    Body::Markdown => {
                        let open = stash.hold(self.open.to_string());
                        let close = stash.hold(self.close.to_string());
                        format!("{open}{inner}{close}")
                    }
                }
            })
            .into_owned()
    }
}

/// Emitted markup waiting to be spliced back in.
#[derive(Default)]
struct Stash {
    fragments: Vec<String>,
}

impl Stash {
    fn hold(&mut self, markup: String) -> String {
        let index = self.fragments.len();
        self.fragments.push(markup);
        format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}")
    }

    // Fragment `n` can only contain placeholders for fragments held before it.
    fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.fragments.get(index))
                    .map(|fragment| self.restore(fragment))
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

/// Converts assistant text to markup.
///
/// Never fails: text that matches no pattern is passed through unchanged.
/// Formula and code bodies are emitted verbatim with no escaping.
pub fn render(text: &str) -> String {
    let mut text: String = text
        .replace("\r\n", "\n")
        .chars()
        .filter(|c| !matches!(*c, PLACEHOLDER_OPEN | PLACEHOLDER_CLOSE))
        .collect();

    let mut stash = Stash::default();
    for pass in &PASSES {
        text = pass.apply(&text, &mut stash);
    }

    let lines: Vec<String> = text.split('\n').map(bullet_line).collect();
    stash.restore(&lines.join(LINE_BREAK))
}

fn bullet_line(line: &str) -> String {
    match BULLET.captures(line) {
        Some(caps) => format!("{BULLET_GLYPH} {}", &caps[1]),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_math_is_verbatim() {
        let html = render("Area: $$x^2 + y*z*$$ done");
        assert_eq!(
            html,
            r#"Area: <div class="math-display">x^2 + y*z*</div> done"#
        );
        assert!(!html.contains("$$"));
    }

    #[test]
    fn test_empty_block_math() {
        assert_eq!(render("$$$$"), r#"<div class="math-display"></div>"#);
    }

    #[test]
    fn test_block_math_spans_lines() {
        let html = render("$$a\nb$$");
        assert_eq!(html, "<div class=\"math-display\">a\nb</div>");
    }

    #[test]
    fn test_inline_math() {
        assert_eq!(
            render("solve $x+1=2$ now"),
            r#"solve <span class="math-inline">x+1=2</span> now"#
        );
    }

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(
            render("**b** and *i*"),
            "<strong>b</strong> and <em>i</em>"
        );
        assert_eq!(render("**b***i*"), "<strong>b</strong><em>i</em>");
    }

    #[test]
    fn test_quotes_are_per_line() {
        assert_eq!(
            render("> one\n  > **two**"),
            "<blockquote>one</blockquote><br><blockquote><strong>two</strong></blockquote>"
        );
    }

    #[test]
    fn test_fenced_code_keeps_content() {
        assert_eq!(
            render("```\nlet x = *p;\n```"),
            "<pre><code>\nlet x = *p;\n</code></pre>"
        );
    }

    #[test]
    fn test_inline_code_is_not_emphasised() {
        assert_eq!(render("use `a*b*c`"), "use <code>a*b*c</code>");
    }

    #[test]
    fn test_bullets_and_breaks() {
        assert_eq!(
            render("- one\n* two *three*\nplain"),
            "\u{2022} one<br>\u{2022} two <em>three</em><br>plain"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(render(""), "");
        assert_eq!(render("nothing to see"), "nothing to see");
        assert_eq!(render("2 * 3 * 4"), "2 * 3 * 4");
    }

    #[test]
    fn test_placeholder_characters_in_input_are_dropped() {
        assert_eq!(render("a\u{E000}0\u{E001}b"), "a0b");
    }

    #[test]
    fn test_render_is_repeatable() {
        let text = "> $$f$$\n- **x** `y` *z*\n```code```";
        assert_eq!(render(text), render(text));
    }
}
