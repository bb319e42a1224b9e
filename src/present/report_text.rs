// src/present/report_text.rs

pub const BULLET_MARKER: char = '•';

/// One display unit of a generated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBlock {
    /// Rendered as a list item; keeps its leading marker.
    Bullet(String),
    Paragraph(String),
}

impl ReportBlock {
    pub fn text(&self) -> &str {
        match self {
            ReportBlock::Bullet(s) | ReportBlock::Paragraph(s) => s,
        }
    }
}

/// Splits the model's free text into paragraphs and bullets, one per non-blank line.
pub fn split_report(text: &str) -> Vec<ReportBlock> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with(BULLET_MARKER) {
                ReportBlock::Bullet(line.to_string())
            } else {
                ReportBlock::Paragraph(line.to_string())
            }
        })
        .collect()
}

/// Plain-text rendering used by the CLI and the markdown export.
pub fn render_markdown(blocks: &[ReportBlock]) -> String {
    let mut out = String::new();
    let mut in_list = false;
    for block in blocks {
        match block {
            ReportBlock::Bullet(text) => {
                let item = text.trim_start_matches(BULLET_MARKER).trim_start();
                out.push_str("- ");
                out.push_str(item);
                out.push('\n');
                in_list = true;
            }
            ReportBlock::Paragraph(text) => {
                if in_list || !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(text);
                out.push('\n');
                in_list = false;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_and_paragraphs_in_order() {
        let blocks = split_report("• Point one\nSecond paragraph");
        assert_eq!(
            blocks,
            vec![
                ReportBlock::Bullet("• Point one".into()),
                ReportBlock::Paragraph("Second paragraph".into()),
            ]
        );
    }

    #[test]
    fn blank_lines_are_dropped() {
        let text = "Let me tell you about Jane.\n\n\nSome achievements:\n• Founded Acme\n   \n• IPO in 2020\r\nClosing thoughts";
        let blocks = split_report(text);
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[2], ReportBlock::Bullet("• Founded Acme".into()));
        assert_eq!(blocks[4].text(), "Closing thoughts");
    }

    #[test]
    fn dash_is_not_a_bullet() {
        assert_eq!(split_report("- not a bullet"), vec![ReportBlock::Paragraph("- not a bullet".into())]);
        assert!(split_report("").is_empty());
    }

    #[test]
    fn markdown_lists_bullets() {
        let md = render_markdown(&split_report("Intro\n• a\n• b\nOutro"));
        assert_eq!(md, "Intro\n- a\n- b\n\nOutro\n");
    }
}
