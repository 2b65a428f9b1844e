#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternNode {
    Concat(Vec<PatternNode>),
    Alternation(Vec<PatternNode>),
    Repeat {
        node: Box<PatternNode>,
        kind: RepeatKind,
    },
    Group(Box<PatternNode>),
    StartAnchor,
    EndAnchor,
    AnyChar,
    CharClass {
        items: Vec<ClassItem>,
        negated: bool,
    },
    Literal(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
}

/// One entry of a character class: a single character or an inclusive
/// range like `a-z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    Char(char),
    Range(char, char),
}

impl ClassItem {
    pub fn contains(&self, ch: char) -> bool {
        match *self {
            ClassItem::Char(c) => c == ch,
            ClassItem::Range(lo, hi) => lo <= ch && ch <= hi,
        }
    }
}
