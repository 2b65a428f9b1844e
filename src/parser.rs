use thiserror::Error;

use crate::ast::{ClassItem, PatternNode, RepeatKind};

/// Characters that must be backslash-escaped to match literally.
const METACHARS: &str = ".*+?^$()[]|\\";

/// Raised by the parser for structurally invalid patterns. The matcher
/// itself has no error channel: any tree the parser produces yields a
/// definite boolean for any text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternSyntaxError {
    #[error("unmatched ')' at byte {0}")]
    UnmatchedCloseParen(usize),
    #[error("unclosed group opened at byte {0}")]
    UnclosedGroup(usize),
    #[error("unterminated character class opened at byte {0}")]
    UnterminatedClass(usize),
    #[error("empty character class at byte {0}")]
    EmptyClass(usize),
    #[error("reversed range `{0}-{1}` in character class")]
    ReversedClassRange(char, char),
    #[error("repetition operator `{0}` has nothing to repeat")]
    DanglingRepetition(char),
    #[error("repetition operator `{1}` applied to anchor `{0}`")]
    RepeatedAnchor(char, char),
    #[error("trailing backslash at end of pattern")]
    TrailingBackslash,
}

/// Recursive-descent parser for the supported regex subset.
///
/// Holds the pattern and the current byte position. One character of
/// lookahead, no parse-time backtracking; precedence (low to high) is
/// alternation, concatenation, repetition, atom.
pub struct Parser<'a> {
    pattern: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'a str) -> Self {
        Self { pattern, pos: 0 }
    }

    /// Peek at the next character in the pattern without advancing.
    fn peek(&self) -> Option<char> {
        self.pattern[self.pos..].chars().next()
    }

    /// Peek one character past the next one.
    fn peek_second(&self) -> Option<char> {
        self.pattern[self.pos..].chars().nth(1)
    }

    /// Advance the parser by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Expect a specific character and advance if it matches.
    fn expect(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Parse the whole pattern, requiring it to be consumed end to end.
    ///
    /// The only way `parse_alt` can stop early is on a `)` that no group
    /// opened, so leftover input is reported as an unmatched parenthesis.
    pub fn parse(&mut self) -> Result<PatternNode, PatternSyntaxError> {
        let node = self.parse_alt()?;
        if self.peek().is_some() {
            return Err(PatternSyntaxError::UnmatchedCloseParen(self.pos));
        }
        Ok(node)
    }

    /// Parse alternation (`|`).
    ///
    /// Example:
    /// - Pattern: `a|b|c` → Alternation([Concat([Literal('a')]), ...])
    /// - Pattern: `abc`   → Concat([Literal('a'), Literal('b'), Literal('c')])
    fn parse_alt(&mut self) -> Result<PatternNode, PatternSyntaxError> {
        let mut branches = Vec::new();
        branches.push(self.parse_seq()?);
        while self.peek() == Some('|') {
            self.advance();
            branches.push(self.parse_seq()?);
        }
        if branches.len() == 1 {
            Ok(branches.pop().unwrap())
        } else {
            Ok(PatternNode::Alternation(branches))
        }
    }

    /// Parse a sequence of repeated atoms (concatenation). An empty
    /// sequence is valid and matches the empty string.
    fn parse_seq(&mut self) -> Result<PatternNode, PatternSyntaxError> {
        let mut nodes = Vec::new();
        while let Some(ch) = self.peek() {
            if ch == ')' || ch == '|' {
                break;
            }
            nodes.push(self.parse_repeat()?);
        }
        Ok(PatternNode::Concat(nodes))
    }

    /// Parse repetition operators (`*`, `+`, `?`) after an atom.
    ///
    /// A repetition operator binds to the immediately preceding atom.
    /// Stacked operators (`a**`) are rejected: the second one reaches
    /// `parse_atom` with nothing to repeat. Repeating a zero-width anchor
    /// (`^*`) is rejected as well.
    fn parse_repeat(&mut self) -> Result<PatternNode, PatternSyntaxError> {
        let atom = self.parse_atom()?;
        let kind = match self.peek() {
            Some('*') => RepeatKind::ZeroOrMore,
            Some('+') => RepeatKind::OneOrMore,
            Some('?') => RepeatKind::ZeroOrOne,
            _ => return Ok(atom),
        };
        let op = self.advance().unwrap();
        match atom {
            PatternNode::StartAnchor => Err(PatternSyntaxError::RepeatedAnchor('^', op)),
            PatternNode::EndAnchor => Err(PatternSyntaxError::RepeatedAnchor('$', op)),
            _ => Ok(PatternNode::Repeat {
                node: Box::new(atom),
                kind,
            }),
        }
    }

    /// Parse a single atom: group, char class, escape, anchor, dot, or
    /// literal.
    ///
    /// Examples:
    /// - Pattern: `(ab)` → Group(Concat([Literal('a'), Literal('b')]))
    /// - Pattern: `[a-c]` → CharClass { items: [Range('a', 'c')], negated: false }
    /// - Pattern: `\.` → Literal('.')
    /// - Pattern: `.`  → AnyChar
    fn parse_atom(&mut self) -> Result<PatternNode, PatternSyntaxError> {
        match self.peek() {
            Some('(') => {
                let open_pos = self.pos;
                self.advance();
                let node = self.parse_alt()?;
                if !self.expect(')') {
                    return Err(PatternSyntaxError::UnclosedGroup(open_pos));
                }
                Ok(PatternNode::Group(Box::new(node)))
            }
            Some('[') => self.parse_char_class(),
            Some('\\') => self.parse_escape(),
            Some('.') => {
                self.advance();
                Ok(PatternNode::AnyChar)
            }
            Some('^') => {
                self.advance();
                Ok(PatternNode::StartAnchor)
            }
            Some('$') => {
                self.advance();
                Ok(PatternNode::EndAnchor)
            }
            Some(op @ ('*' | '+' | '?')) => Err(PatternSyntaxError::DanglingRepetition(op)),
            Some(c) => {
                self.advance();
                Ok(PatternNode::Literal(c))
            }
            // parse_seq stops before end of input, so this is only hit on
            // an empty pattern.
            None => Ok(PatternNode::Concat(Vec::new())),
        }
    }

    /// Parse a backslash escape outside a character class.
    ///
    /// A backslash before a metacharacter yields that character as a
    /// literal. Before anything else the backslash itself is literal, so
    /// `\d` is the two-character atom `\` `d` (no escape classes in this
    /// subset).
    fn parse_escape(&mut self) -> Result<PatternNode, PatternSyntaxError> {
        self.advance(); // consume '\'
        match self.advance() {
            Some(c) if METACHARS.contains(c) => Ok(PatternNode::Literal(c)),
            Some(c) => Ok(PatternNode::Concat(vec![
                PatternNode::Literal('\\'),
                PatternNode::Literal(c),
            ])),
            None => Err(PatternSyntaxError::TrailingBackslash),
        }
    }

    /// Parse a character class, e.g. `[abc]`, `[^abc]`, `[a-z0-9_]`.
    ///
    /// `-` is literal when it cannot close a range: first in the class,
    /// last before `]`, or right after a range. The class ends at the
    /// first unescaped `]`; a backslash escapes the next character.
    fn parse_char_class(&mut self) -> Result<PatternNode, PatternSyntaxError> {
        let open_pos = self.pos;
        self.advance(); // consume '['
        let negated = if self.peek() == Some('^') {
            self.advance();
            true
        } else {
            false
        };
        let mut items = Vec::new();
        loop {
            match self.peek() {
                None => return Err(PatternSyntaxError::UnterminatedClass(open_pos)),
                Some(']') => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    let lo = self.parse_class_char(open_pos)?;
                    if self.peek() == Some('-') && self.peek_second().is_some_and(|c| c != ']') {
                        self.advance(); // consume '-'
                        let hi = self.parse_class_char(open_pos)?;
                        if lo > hi {
                            return Err(PatternSyntaxError::ReversedClassRange(lo, hi));
                        }
                        items.push(ClassItem::Range(lo, hi));
                    } else {
                        items.push(ClassItem::Char(lo));
                    }
                }
            }
        }
        if items.is_empty() {
            return Err(PatternSyntaxError::EmptyClass(open_pos));
        }
        Ok(PatternNode::CharClass { items, negated })
    }

    /// Consume one class member character, honoring backslash escapes.
    fn parse_class_char(&mut self, open_pos: usize) -> Result<char, PatternSyntaxError> {
        match self.advance() {
            Some('\\') => self
                .advance()
                .ok_or(PatternSyntaxError::UnterminatedClass(open_pos)),
            Some(c) => Ok(c),
            None => Err(PatternSyntaxError::UnterminatedClass(open_pos)),
        }
    }
}
