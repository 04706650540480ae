use std::ops::Range;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

use super::token::{Token, collect_text};

/// Parses markdown into a [`Token`] tree.
///
/// Adjacent text is merged into one `Text` token, soft breaks become a single
/// space, and two top-level blocks separated by a blank line get a `Space`
/// token between them (headings, rules and code blocks absorb the blank lines
/// that follow them).
pub fn lex(markdown: &str) -> Vec<Token> {
    let mut builder = TokenTreeBuilder::new(markdown);
    for (event, range) in Parser::new_ext(markdown, Options::empty()).into_offset_iter() {
        builder.push(event, range);
    }
    builder.finish()
}

#[derive(Debug)]
enum OpenKind {
    Paragraph,
    Heading(u8),
    BlockQuote,
    List { ordered: bool },
    Item,
    Emphasis,
    Strong,
    Link(String),
    CodeBlock,
    Image,
    Other,
}

impl OpenKind {
    fn from_tag(tag: &Tag<'_>) -> Self {
        match tag {
            Tag::Paragraph => OpenKind::Paragraph,
            Tag::Heading { level, .. } => OpenKind::Heading(heading_depth(*level)),
            Tag::BlockQuote(_) => OpenKind::BlockQuote,
            Tag::CodeBlock(_) => OpenKind::CodeBlock,
            Tag::List(start) => OpenKind::List {
                ordered: start.is_some(),
            },
            Tag::Item => OpenKind::Item,
            Tag::Emphasis => OpenKind::Emphasis,
            Tag::Strong => OpenKind::Strong,
            Tag::Link { dest_url, .. } => OpenKind::Link(dest_url.to_string()),
            Tag::Image { .. } => OpenKind::Image,
            _ => OpenKind::Other,
        }
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// A container whose end event has not been seen yet.
struct OpenToken {
    kind: OpenKind,
    children: Vec<Token>,
}

impl OpenToken {
    fn close(self) -> Token {
        let tokens = self.children;
        match self.kind {
            OpenKind::Paragraph => Token::Paragraph { tokens },
            OpenKind::Heading(depth) => Token::Heading { depth, tokens },
            OpenKind::BlockQuote => Token::BlockQuote { tokens },
            OpenKind::List { ordered } => Token::List {
                ordered,
                items: tokens,
            },
            OpenKind::Item => Token::ListItem { tokens },
            OpenKind::Emphasis => Token::Emphasis { tokens },
            OpenKind::Strong => Token::Strong { tokens },
            OpenKind::Link(href) => Token::Link { href, tokens },
            OpenKind::CodeBlock => Token::CodeBlock {
                text: collect_text(&tokens),
            },
            // Alt text only
            OpenKind::Image => Token::text(collect_text(&tokens)),
            OpenKind::Other => Token::Group { tokens },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TopLevelEnd {
    offset: usize,
    keeps_blank_lines: bool,
}

struct TokenTreeBuilder<'s> {
    source: &'s str,
    stack: Vec<OpenToken>,
    out: Vec<Token>,
    last_top_level: Option<TopLevelEnd>,
}

impl<'s> TokenTreeBuilder<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            stack: vec![],
            out: vec![],
            last_top_level: None,
        }
    }

    fn push(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => {
                if self.stack.is_empty() {
                    self.separate_top_level(range.start);
                }
                self.stack.push(OpenToken {
                    kind: OpenKind::from_tag(&tag),
                    children: vec![],
                });
            }
            Event::End(_) => {
                if let Some(open) = self.stack.pop() {
                    self.emit(open.close(), range.end);
                }
            }
            Event::Text(text) => self.leaf(Token::text(text.to_string()), range),
            Event::Code(text) => self.leaf(
                Token::CodeSpan {
                    text: text.to_string(),
                },
                range,
            ),
            Event::Html(html) | Event::InlineHtml(html) => self.leaf(
                Token::Html {
                    text: html.to_string(),
                },
                range,
            ),
            Event::SoftBreak => self.leaf(Token::text(" "), range),
            Event::HardBreak => self.leaf(Token::LineBreak, range),
            Event::Rule => self.leaf(Token::Rule, range),
            _ => {}
        }
    }

    fn finish(self) -> Vec<Token> {
        self.out
    }

    fn leaf(&mut self, token: Token, range: Range<usize>) {
        if self.stack.is_empty() {
            self.separate_top_level(range.start);
        }
        self.emit(token, range.end);
    }

    fn emit(&mut self, token: Token, end: usize) {
        let siblings = match self.stack.last_mut() {
            Some(parent) => &mut parent.children,
            None => {
                self.last_top_level = Some(TopLevelEnd {
                    offset: end,
                    keeps_blank_lines: !matches!(
                        token,
                        Token::Heading { .. } | Token::Rule | Token::CodeBlock { .. }
                    ),
                });
                &mut self.out
            }
        };

        if let (Token::Text { text }, Some(Token::Text { text: previous })) =
            (&token, siblings.last_mut())
        {
            previous.push_str(text);
            return;
        }
        siblings.push(token);
    }

    fn separate_top_level(&mut self, start: usize) {
        let Some(previous) = self.last_top_level.take() else {
            return;
        };
        if previous.keeps_blank_lines && self.has_blank_line(previous.offset, start) {
            self.out.push(Token::Space);
        }
    }

    /// Whether at least one empty line lies between the end of one block and the start of the next.
    fn has_blank_line(&self, from: usize, to: usize) -> bool {
        let gap = self.source.get(from..to).unwrap_or("");
        let ended_line = self
            .source
            .get(..from)
            .is_some_and(|before| before.ends_with('\n'));
        gap.matches('\n').count() + usize::from(ended_line) >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Token {
        Token::text(s)
    }

    #[test]
    fn test_nested_inline_containers() {
        assert_eq!(
            lex("**bold and *em* text**"),
            vec![Token::Paragraph {
                tokens: vec![Token::Strong {
                    tokens: vec![
                        text("bold and "),
                        Token::Emphasis {
                            tokens: vec![text("em")]
                        },
                        text(" text"),
                    ]
                }]
            }]
        );
    }

    #[test]
    fn test_heading_depth() {
        assert_eq!(
            lex("### Grace"),
            vec![Token::Heading {
                depth: 3,
                tokens: vec![text("Grace")]
            }]
        );
    }

    #[test]
    fn test_blank_line_between_paragraphs_is_space() {
        assert_eq!(
            lex("First\n\nSecond"),
            vec![
                Token::Paragraph {
                    tokens: vec![text("First")]
                },
                Token::Space,
                Token::Paragraph {
                    tokens: vec![text("Second")]
                },
            ]
        );
    }

    #[test]
    fn test_heading_absorbs_following_blank_line() {
        assert_eq!(
            lex("# Title\n\nBody"),
            vec![
                Token::Heading {
                    depth: 1,
                    tokens: vec![text("Title")]
                },
                Token::Paragraph {
                    tokens: vec![text("Body")]
                },
            ]
        );
    }

    #[test]
    fn test_rule_between_blocks() {
        assert_eq!(
            lex("a\n\n---\n\nb"),
            vec![
                Token::Paragraph {
                    tokens: vec![text("a")]
                },
                Token::Space,
                Token::Rule,
                Token::Paragraph {
                    tokens: vec![text("b")]
                },
            ]
        );
    }

    #[test]
    fn test_list_items() {
        assert_eq!(
            lex("- one\n- two"),
            vec![Token::List {
                ordered: false,
                items: vec![
                    Token::ListItem {
                        tokens: vec![text("one")]
                    },
                    Token::ListItem {
                        tokens: vec![text("two")]
                    },
                ]
            }]
        );
    }

    #[test]
    fn test_ordered_list() {
        let tokens = lex("1. first\n2. second");
        assert!(matches!(tokens.as_slice(), [Token::List { ordered: true, items }] if items.len() == 2));
    }

    #[test]
    fn test_soft_break_joins_lines() {
        assert_eq!(
            lex("line one\nline two"),
            vec![Token::Paragraph {
                tokens: vec![text("line one line two")]
            }]
        );
    }

    #[test]
    fn test_hard_break() {
        assert_eq!(
            lex("Hard  \nbreak"),
            vec![Token::Paragraph {
                tokens: vec![text("Hard"), Token::LineBreak, text("break")]
            }]
        );
    }

    #[test]
    fn test_link_keeps_destination() {
        assert_eq!(
            lex("[site](https://example.com)"),
            vec![Token::Paragraph {
                tokens: vec![Token::Link {
                    href: "https://example.com".to_string(),
                    tokens: vec![text("site")]
                }]
            }]
        );
    }

    #[test]
    fn test_code_span() {
        assert_eq!(
            lex("`code`"),
            vec![Token::Paragraph {
                tokens: vec![Token::CodeSpan {
                    text: "code".to_string()
                }]
            }]
        );
    }

    #[test]
    fn test_image_becomes_alt_text() {
        assert_eq!(
            lex("![a map](map.png)"),
            vec![Token::Paragraph {
                tokens: vec![text("a map")]
            }]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("").is_empty());
    }
}
