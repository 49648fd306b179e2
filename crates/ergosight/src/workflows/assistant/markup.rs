use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Plain(String),
    Bold(String),
}

/// Splits reply text into lines of plain and `**bold**` segments.
///
/// A `**` without a closing partner stays literal. Blank lines yield an empty
/// segment list so callers can keep the vertical spacing.
pub fn render_lines(text: &str) -> Vec<Vec<Segment>> {
    text.split('\n').map(render_line).collect()
}

fn render_line(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            segments.push(Segment::Plain(rest[..open].to_string()));
        }
        segments.push(Segment::Bold(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Plain(rest.to_string()));
    }

    segments
}

/// Plain-text rendering with the bold markers removed.
pub fn strip_markup(text: &str) -> String {
    render_lines(text)
        .into_iter()
        .map(|line| {
            line.into_iter()
                .map(|segment| match segment {
                    Segment::Plain(text) | Segment::Bold(text) => text,
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
