//! Markdown rendering for post bodies

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Markdown to HTML renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    /// Shift every heading down one level, so a body `# Title` does not
    /// compete with the page's own `<h1>`
    demote_headings: bool,
}

impl MarkdownRenderer {
    pub fn with_demoted_headings() -> Self {
        Self {
            demote_headings: true,
        }
    }

    fn options() -> Options {
        // YAML metadata blocks stay off: front-matter is split off before rendering
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let demote = self.demote_headings;

        let events = parser.map(move |event| match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) if demote => Event::Start(Tag::Heading {
                level: demote_level(level),
                id,
                classes,
                attrs,
            }),
            Event::End(TagEnd::Heading(level)) if demote => {
                Event::End(TagEnd::Heading(demote_level(level)))
            }
            other => other,
        });

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, events);
        html_output
    }

    /// The readable text of `markdown` with entities decoded and raw HTML
    /// dropped; blocks are separated by a space
    pub fn plain_text(&self, markdown: &str) -> String {
        let mut text = String::with_capacity(markdown.len());
        for event in Parser::new_ext(markdown, Self::options()) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::End(
                    TagEnd::Paragraph
                    | TagEnd::Heading(_)
                    | TagEnd::Item
                    | TagEnd::CodeBlock
                    | TagEnd::TableCell,
                ) => text.push(' '),
                _ => {}
            }
        }
        text
    }
}

fn demote_level(level: HeadingLevel) -> HeadingLevel {
    match level {
        HeadingLevel::H1 => HeadingLevel::H2,
        HeadingLevel::H2 => HeadingLevel::H3,
        HeadingLevel::H3 => HeadingLevel::H4,
        HeadingLevel::H4 => HeadingLevel::H5,
        HeadingLevel::H5 | HeadingLevel::H6 => HeadingLevel::H6,
    }
}
