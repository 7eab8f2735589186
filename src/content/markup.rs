//! Lecture markup to terminal text
//!
//! Math lectures ship as pre-rendered HTML fragments. A terminal cannot lay
//! those out, so [`to_lines`] flattens them: tags are dropped, block-level
//! tags start a new line, list items get a bullet and the usual entities are
//! decoded. The scanner is a single pass over the characters, in the same
//! spirit as the source highlighter's tokenizer; it does not try to be a
//! conforming HTML parser.

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "br", "li", "ul", "ol", "tr", "table", "pre", "blockquote", "section", "hr", "h1",
    "h2", "h3", "h4", "h5", "h6",
];

/// Tags whose body is never shown
const HIDDEN_TAGS: &[&str] = &["script", "style"];

#[derive(Debug)]
struct Tag {
    name: String,
    closing: bool,
}

/// Whether the text after a `<` can open a tag; otherwise the `<` is literal
fn opens_tag(rest: &[char]) -> bool {
    match rest {
        ['/', next, ..] => next.is_ascii_alphabetic(),
        [first, ..] => first.is_ascii_alphabetic() || matches!(*first, '!' | '?'),
        [] => false,
    }
}

/// Parse the inside of `<...>` into a lowercase tag name
fn parse_tag(raw: &str) -> Option<Tag> {
    let raw = raw.trim();
    if raw.starts_with('!') || raw.starts_with('?') {
        return None;
    }
    let (closing, rest) = match raw.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let name: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    if name.is_empty() {
        return None;
    }
    Some(Tag { name, closing })
}

/// Decode one entity body (the part between `&` and `;`)
fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code).filter(|c| !c.is_control() || matches!(*c, '\n' | '\t'))
        }
    }
}

struct LineBuilder {
    lines: Vec<String>,
    current: String,
    preformatted: usize,
}

impl LineBuilder {
    fn new() -> Self {
        LineBuilder {
            lines: Vec::new(),
            current: String::new(),
            preformatted: 0,
        }
    }

    fn push_char(&mut self, c: char) {
        if self.preformatted > 0 {
            if c == '\n' {
                self.break_line();
            } else {
                self.current.push(c);
            }
            return;
        }
        if c.is_whitespace() {
            if !self.current.is_empty() && !self.current.ends_with(' ') {
                self.current.push(' ');
            }
        } else {
            self.current.push(c);
        }
    }

    fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            self.push_char(c);
        }
    }

    fn break_line(&mut self) {
        let line = if self.preformatted > 0 {
            std::mem::take(&mut self.current)
        } else {
            std::mem::take(&mut self.current).trim_end().to_string()
        };
        self.lines.push(line);
    }

    /// Break only if something is pending, so nested blocks don't stack blanks
    fn soft_break(&mut self) {
        if !self.current.trim().is_empty() {
            self.break_line();
        } else {
            self.current.clear();
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.soft_break();
        let mut out: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            let blank = line.trim().is_empty();
            if blank && out.last().map_or(true, |l| l.trim().is_empty()) {
                continue;
            }
            out.push(if blank { String::new() } else { line });
        }
        while out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }
        out
    }
}

/// Flatten an HTML fragment into display lines
pub fn to_lines(html: &str) -> Vec<String> {
    let mut builder = LineBuilder::new();
    let chars: Vec<char> = html.chars().collect();
    let mut hidden: Option<String> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '<' && opens_tag(&chars[i + 1..]) {
            let Some(len) = chars[i + 1..].iter().position(|&ch| ch == '>') else {
                // Unterminated tag: treat the rest as text
                if hidden.is_none() {
                    builder.push_str(&chars[i..].iter().collect::<String>());
                }
                break;
            };
            let raw: String = chars[i + 1..i + 1 + len].iter().collect();
            i += len + 2;

            let Some(tag) = parse_tag(&raw) else {
                continue;
            };

            if let Some(name) = &hidden {
                if tag.closing && *name == tag.name {
                    hidden = None;
                }
                continue;
            }
            if HIDDEN_TAGS.contains(&tag.name.as_str()) {
                if !tag.closing && !raw.trim_end().ends_with('/') {
                    hidden = Some(tag.name);
                }
                continue;
            }

            if tag.name == "pre" {
                builder.soft_break();
                if tag.closing {
                    builder.preformatted = builder.preformatted.saturating_sub(1);
                } else {
                    builder.preformatted += 1;
                }
                continue;
            }

            if tag.name == "br" {
                builder.break_line();
            } else if matches!(tag.name.as_str(), "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
                && tag.closing
            {
                builder.soft_break();
                builder.lines.push(String::new());
            } else if BLOCK_TAGS.contains(&tag.name.as_str()) {
                builder.soft_break();
                if tag.name == "li" && !tag.closing {
                    builder.current.push_str("• ");
                }
            } else if matches!(tag.name.as_str(), "td" | "th") && tag.closing {
                builder.push_char(' ');
            }
            continue;
        }

        if hidden.is_some() {
            i += 1;
            continue;
        }

        if c == '&' {
            let end = chars[i + 1..]
                .iter()
                .take(10)
                .position(|&ch| ch == ';');
            if let Some(len) = end {
                let entity: String = chars[i + 1..i + 1 + len].iter().collect();
                if let Some(decoded) = decode_entity(&entity) {
                    builder.push_char(decoded);
                    i += len + 2;
                    continue;
                }
            }
        }

        builder.push_char(c);
        i += 1;
    }

    builder.finish()
}
