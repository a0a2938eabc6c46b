use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IndentKind {
    Space,
    Tab,
}

/// One level of output indentation, written on the command line as
/// `{count}{kind}`: `4s` is four spaces, `t` is one tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IndentPattern {
    pub count: usize,
    pub kind: IndentKind,
}

impl IndentPattern {
    /// The literal text emitted per nesting level.
    pub fn unit(&self) -> String {
        let ch = match self.kind {
            IndentKind::Space => ' ',
            IndentKind::Tab => '\t',
        };
        std::iter::repeat_n(ch, self.count).collect()
    }
}

impl Default for IndentPattern {
    fn default() -> Self {
        Self {
            count: 4,
            kind: IndentKind::Space,
        }
    }
}

impl std::fmt::Display for IndentPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            IndentKind::Space => 's',
            IndentKind::Tab => 't',
        };
        write!(f, "{}{kind}", self.count)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum IndentPatternError {
    #[error("indent pattern is empty; expected e.g. `4s` or `1t`")]
    Empty,

    #[error("unknown indent kind `{0}`; expected `s` (space) or `t` (tab)")]
    UnknownKind(char),

    #[error("invalid indent count `{0}`")]
    InvalidCount(String),
}

impl FromStr for IndentPattern {
    type Err = IndentPatternError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let pattern = pattern.trim();
        let Some(kind_char) = pattern.chars().last() else {
            return Err(IndentPatternError::Empty);
        };
        let kind = match kind_char {
            's' => IndentKind::Space,
            't' => IndentKind::Tab,
            other => return Err(IndentPatternError::UnknownKind(other)),
        };

        let count_text = &pattern[..pattern.len() - kind_char.len_utf8()];
        let count = if count_text.is_empty() {
            1
        } else {
            count_text
                .parse::<usize>()
                .map_err(|_| IndentPatternError::InvalidCount(count_text.to_string()))?
        };

        Ok(Self { count, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::IndentKind;
    use super::IndentPattern;
    use super::IndentPatternError;

    #[test]
    fn parses_count_and_kind() {
        let pattern: IndentPattern = "2s".parse().unwrap();
        assert_eq!(pattern, IndentPattern { count: 2, kind: IndentKind::Space });
        assert_eq!(pattern.unit(), "  ");

        let pattern: IndentPattern = "3t".parse().unwrap();
        assert_eq!(pattern.unit(), "\t\t\t");
    }

    #[test]
    fn count_defaults_to_one() {
        let pattern: IndentPattern = "t".parse().unwrap();
        assert_eq!(pattern, IndentPattern { count: 1, kind: IndentKind::Tab });
    }

    #[test]
    fn default_is_four_spaces() {
        assert_eq!(IndentPattern::default().unit(), "    ");
        assert_eq!(IndentPattern::default().to_string(), "4s");
    }

    #[test]
    fn zero_count_is_flush_left() {
        let pattern: IndentPattern = "0s".parse().unwrap();
        assert_eq!(pattern.unit(), "");
    }

    #[test]
    fn rejects_invalid_patterns() {
        assert_eq!("".parse::<IndentPattern>(), Err(IndentPatternError::Empty));
        assert_eq!(
            "4x".parse::<IndentPattern>(),
            Err(IndentPatternError::UnknownKind('x')),
        );
        assert_eq!(
            "fours".parse::<IndentPattern>(),
            Err(IndentPatternError::InvalidCount("four".to_string())),
        );
        assert_eq!(
            "-2s".parse::<IndentPattern>(),
            Err(IndentPatternError::InvalidCount("-2".to_string())),
        );
    }
}
