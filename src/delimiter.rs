//! Delimiter Pair Table
//!
//! The fixed set of bracket pairs the validator understands.

/// Opening delimiter paired with its closing delimiter.
///
/// `<` and `>` are plain brackets here, not comparison operators.
pub const PAIRS: [(char, char); 4] = [('(', ')'), ('[', ']'), ('{', '}'), ('<', '>')];

/// Which side of a pair a character sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterClass {
    /// Opener, carrying the closer that pairs with it
    Opening { closer: char },
    Closing,
}

/// Classify a character, returning `None` for anything that is not a delimiter
pub fn classify(ch: char) -> Option<DelimiterClass> {
    if let Some(closer) = closing_for(ch) {
        Some(DelimiterClass::Opening { closer })
    } else if is_closing(ch) {
        Some(DelimiterClass::Closing)
    } else {
        None
    }
}

pub fn is_opening(ch: char) -> bool {
    PAIRS.iter().any(|&(open, _)| open == ch)
}

pub fn is_closing(ch: char) -> bool {
    PAIRS.iter().any(|&(_, close)| close == ch)
}

/// The closer expected for `opener`
pub fn closing_for(opener: char) -> Option<char> {
    PAIRS
        .iter()
        .find(|&&(open, _)| open == opener)
        .map(|&(_, close)| close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openers_and_closers_are_disjoint() {
        for &(open, close) in &PAIRS {
            assert!(!is_closing(open), "{open} must not be a closer");
            assert!(!is_opening(close), "{close} must not be an opener");
        }
    }

    #[test]
    fn test_each_opener_has_one_closer() {
        for &(open, _) in &PAIRS {
            let count = PAIRS.iter().filter(|&&(o, _)| o == open).count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn test_closing_for() {
        assert_eq!(closing_for('('), Some(')'));
        assert_eq!(closing_for('['), Some(']'));
        assert_eq!(closing_for('{'), Some('}'));
        assert_eq!(closing_for('<'), Some('>'));
        assert_eq!(closing_for(')'), None);
        assert_eq!(closing_for('a'), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('<'), Some(DelimiterClass::Opening { closer: '>' }));
        assert_eq!(classify('>'), Some(DelimiterClass::Closing));
        assert_eq!(classify('"'), None);
        assert_eq!(classify(' '), None);
    }
}
