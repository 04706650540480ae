use super::{lexer::lex, token::Token};
use crate::{
    error::SinkError,
    sink::DocumentSink,
    style::{HIGHLIGHT_YELLOW, RunStyle},
};

/// What the walker does with a token after merging its style delta.
enum Traversal<'t> {
    /// Recurse into nested `tokens`.
    Children(&'t [Token]),
    /// Recurse into list `items`.
    Items(&'t [Token]),
    /// Append one run.
    Leaf(&'t str),
    /// Append a line break; nothing below this token is visited.
    BreakOnly,
    Skip,
}

impl Token {
    fn traversal(&self) -> Traversal<'_> {
        if matches!(self, Token::Rule | Token::Space | Token::LineBreak) {
            return Traversal::BreakOnly;
        }
        if let Some(tokens) = self.tokens() {
            return Traversal::Children(tokens);
        }
        if let Some(items) = self.items() {
            return Traversal::Items(items);
        }
        match self.literal() {
            Some(text) if !text.is_empty() => Traversal::Leaf(text),
            _ => Traversal::Skip,
        }
    }
}

/// Renders markdown into styled runs on a [`DocumentSink`].
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    heading_base_size: u32,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEADING_BASE_SIZE)
    }
}

impl MarkdownConverter {
    /// Font size of a level-1 heading; each deeper level is one point smaller.
    pub const DEFAULT_HEADING_BASE_SIZE: u32 = 14;

    pub fn new(heading_base_size: u32) -> Self {
        Self { heading_base_size }
    }

    /// Lexes `markdown` and appends it to `sink`, starting from `base`.
    pub fn convert(
        &self,
        markdown: &str,
        base: &RunStyle,
        sink: &mut dyn DocumentSink,
    ) -> Result<(), SinkError> {
        let tokens = lex(markdown);
        self.convert_tokens(&tokens, base, sink)
    }

    /// Walks `tokens` depth first, appending runs and line breaks in document order.
    pub fn convert_tokens(
        &self,
        tokens: &[Token],
        inherited: &RunStyle,
        sink: &mut dyn DocumentSink,
    ) -> Result<(), SinkError> {
        for token in tokens {
            let style = inherited.merged(&self.style_delta(token));

            match token.traversal() {
                Traversal::Children(children) | Traversal::Items(children) => {
                    self.convert_tokens(children, &style, sink)?
                }
                Traversal::Leaf(text) => sink.append_run(text, &style)?,
                Traversal::BreakOnly => {
                    sink.append_line_break()?;
                    continue;
                }
                Traversal::Skip => {}
            }

            // Hyperlinks are not supported by the sink; keep the destination visible
            if let Token::Link { href, .. } = token
                && !href.is_empty()
            {
                sink.append_run(&format!("({href})"), inherited)?;
            }

            if token.is_block() {
                sink.append_line_break()?;
            }
        }

        Ok(())
    }

    fn style_delta(&self, token: &Token) -> RunStyle {
        match token {
            Token::Emphasis { .. } => RunStyle::italic(),
            Token::Strong { .. } => RunStyle::bold(),
            Token::CodeSpan { .. } => RunStyle::highlighted(HIGHLIGHT_YELLOW),
            Token::Heading { depth, .. } => RunStyle::bold().with_font_size(self.heading_size(*depth)),
            _ => RunStyle::default(),
        }
    }

    fn heading_size(&self, depth: u8) -> u32 {
        self.heading_base_size
            .saturating_sub(u32::from(depth.saturating_sub(1)))
    }
}
