/// Block keyword types for Vim script constructs
use std::fmt;

/// The statement keywords that open a block requiring an end statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKeyword {
    Augroup,
    Def,
    For,
    Function,
    If,
    Try,
    While,
}

impl BlockKeyword {
    /// Map an opening keyword (as captured from a statement line) to its
    /// block type. Returns `None` for anything that does not open a block.
    #[must_use]
    pub fn from_opener(keyword: &str) -> Option<Self> {
        match keyword {
            "augroup" => Some(BlockKeyword::Augroup),
            "def" => Some(BlockKeyword::Def),
            "for" => Some(BlockKeyword::For),
            "function" => Some(BlockKeyword::Function),
            "if" => Some(BlockKeyword::If),
            "try" => Some(BlockKeyword::Try),
            "while" => Some(BlockKeyword::While),
            _ => None,
        }
    }

    /// Map a closing statement (as captured from a statement line) to the
    /// block type it closes. The capture for an `augroup` end marker carries
    /// the whole `augroup ... end` text.
    #[must_use]
    pub fn from_closer(closer: &str) -> Option<Self> {
        match closer {
            "endif" => Some(BlockKeyword::If),
            "endfor" => Some(BlockKeyword::For),
            "endfunction" => Some(BlockKeyword::Function),
            "endwhile" => Some(BlockKeyword::While),
            "endtry" => Some(BlockKeyword::Try),
            "enddef" => Some(BlockKeyword::Def),
            other if other.starts_with("augroup") => Some(BlockKeyword::Augroup),
            _ => None,
        }
    }

    /// The statement that closes this block. Every keyword closes with
    /// `end` + keyword except `augroup`, which closes with `augroup end`.
    #[must_use]
    pub fn end_statement(self) -> &'static str {
        match self {
            BlockKeyword::Augroup => "augroup end",
            BlockKeyword::Def => "enddef",
            BlockKeyword::For => "endfor",
            BlockKeyword::Function => "endfunction",
            BlockKeyword::If => "endif",
            BlockKeyword::Try => "endtry",
            BlockKeyword::While => "endwhile",
        }
    }
}

impl fmt::Display for BlockKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKeyword::Augroup => "augroup",
            BlockKeyword::Def => "def",
            BlockKeyword::For => "for",
            BlockKeyword::Function => "function",
            BlockKeyword::If => "if",
            BlockKeyword::Try => "try",
            BlockKeyword::While => "while",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_opener() {
        assert_eq!(BlockKeyword::from_opener("if"), Some(BlockKeyword::If));
        assert_eq!(
            BlockKeyword::from_opener("augroup"),
            Some(BlockKeyword::Augroup)
        );
        assert_eq!(BlockKeyword::from_opener("echo"), None);
        // Abbreviations are not openers
        assert_eq!(BlockKeyword::from_opener("func"), None);
    }

    #[test]
    fn test_end_statements() {
        assert_eq!(BlockKeyword::If.end_statement(), "endif");
        assert_eq!(BlockKeyword::For.end_statement(), "endfor");
        assert_eq!(BlockKeyword::Function.end_statement(), "endfunction");
        assert_eq!(BlockKeyword::While.end_statement(), "endwhile");
        assert_eq!(BlockKeyword::Try.end_statement(), "endtry");
        assert_eq!(BlockKeyword::Def.end_statement(), "enddef");
        assert_eq!(BlockKeyword::Augroup.end_statement(), "augroup end");
    }

    #[test]
    fn test_from_closer() {
        assert_eq!(BlockKeyword::from_closer("endif"), Some(BlockKeyword::If));
        assert_eq!(
            BlockKeyword::from_closer("augroup END"),
            Some(BlockKeyword::Augroup)
        );
        assert_eq!(BlockKeyword::from_closer("echo"), None);
    }

    #[test]
    fn test_closer_roundtrip() {
        for kw in [
            BlockKeyword::Def,
            BlockKeyword::For,
            BlockKeyword::Function,
            BlockKeyword::If,
            BlockKeyword::Try,
            BlockKeyword::While,
        ] {
            assert_eq!(BlockKeyword::from_closer(kw.end_statement()), Some(kw));
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for kw in [
            BlockKeyword::Augroup,
            BlockKeyword::Def,
            BlockKeyword::For,
            BlockKeyword::Function,
            BlockKeyword::If,
            BlockKeyword::Try,
            BlockKeyword::While,
        ] {
            assert_eq!(BlockKeyword::from_opener(&kw.to_string()), Some(kw));
        }
    }
}
