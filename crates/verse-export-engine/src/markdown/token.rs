/// A node of the markdown token tree.
///
/// Containers hold their children in `tokens`; a list holds its list items in
/// `items`. Leaves carry literal `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Heading { depth: u8, tokens: Vec<Token> },
    Paragraph { tokens: Vec<Token> },
    BlockQuote { tokens: Vec<Token> },
    List { ordered: bool, items: Vec<Token> },
    ListItem { tokens: Vec<Token> },
    Emphasis { tokens: Vec<Token> },
    Strong { tokens: Vec<Token> },
    Link { href: String, tokens: Vec<Token> },
    /// Any other container construct; styled and broken like plain inline content.
    Group { tokens: Vec<Token> },
    CodeSpan { text: String },
    CodeBlock { text: String },
    Html { text: String },
    Text { text: String },
    Rule,
    /// Blank line(s) between two top-level blocks.
    Space,
    LineBreak,
}

impl Token {
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text { text: text.into() }
    }

    /// Nested child tokens, for container tokens.
    pub fn tokens(&self) -> Option<&[Token]> {
        match self {
            Token::Heading { tokens, .. }
            | Token::Paragraph { tokens }
            | Token::BlockQuote { tokens }
            | Token::ListItem { tokens }
            | Token::Emphasis { tokens }
            | Token::Strong { tokens }
            | Token::Link { tokens, .. }
            | Token::Group { tokens } => Some(tokens),
            _ => None,
        }
    }

    /// List items, for list tokens.
    pub fn items(&self) -> Option<&[Token]> {
        match self {
            Token::List { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Literal text, for leaf tokens.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Token::CodeSpan { text }
            | Token::CodeBlock { text }
            | Token::Html { text }
            | Token::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Block-level tokens are followed by a line break when rendered.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Token::Paragraph { .. }
                | Token::Heading { .. }
                | Token::BlockQuote { .. }
                | Token::ListItem { .. }
        )
    }
}

/// Concatenated literal text of a token sequence, depth first.
pub fn collect_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    push_text(tokens, &mut out);
    out
}

fn push_text(tokens: &[Token], out: &mut String) {
    for token in tokens {
        if let Some(children) = token.tokens().or_else(|| token.items()) {
            push_text(children, out);
        } else if let Some(text) = token.literal() {
            out.push_str(text);
        }
    }
}
