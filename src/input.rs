use std::num::{IntErrorKind, ParseIntError};

use tracing::warn;

use crate::error::ScoreError;
use crate::Score;

// Upper bound on what a declared count may reserve up front.
const MAX_PREALLOC: usize = 4096;

/// Parses `<count> <score>...` from whitespace-separated text.
///
/// Tokens after the declared number of scores are ignored.
pub fn parse_scores(text: &str) -> Result<Vec<Score>, ScoreError> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or(ScoreError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| ScoreError::BadCount(count_token.to_string()))?;

    let mut scores = Vec::with_capacity(count.min(MAX_PREALLOC));
    for position in 1..=count {
        let token = tokens.next().ok_or(ScoreError::MissingScores {
            expected: count,
            found: position - 1,
        })?;
        let score = token.parse::<Score>().map_err(|err: ParseIntError| {
            let token = token.to_string();
            match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ScoreError::ScoreOutOfRange { position, token }
                }
                _ => ScoreError::BadScore { position, token },
            }
        })?;
        scores.push(score);
    }

    let extra = tokens.count();
    if extra > 0 {
        warn!("ignoring {} token(s) after the {} declared scores", extra, count);
    }

    Ok(scores)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn count_then_marks() {
        let scores = parse_scores("6\n72 65 90 78 85 60\n").unwrap();
        assert_eq!(scores, [72, 65, 90, 78, 85, 60]);
    }

    #[test]
    fn any_whitespace_separates() {
        let scores = parse_scores("  3\t-4\n\n 0   17 ").unwrap();
        assert_eq!(scores, [-4, 0, 17]);
    }

    #[test]
    fn zero_count_is_empty_list() {
        assert!(parse_scores("0").unwrap().is_empty());
    }

    #[test]
    fn extra_tokens_ignored() {
        let scores = parse_scores("2 10 20 30 junk").unwrap();
        assert_eq!(scores, [10, 20]);
    }

    #[test]
    fn blank_input() {
        assert!(matches!(parse_scores(" \n "), Err(ScoreError::MissingCount)));
    }

    #[test]
    fn negative_count() {
        match parse_scores("-2 1 2") {
            Err(ScoreError::BadCount(token)) => assert_eq!(token, "-2"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn non_numeric_mark() {
        match parse_scores("3 50 fifty 70") {
            Err(ScoreError::BadScore { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "fifty");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn mark_past_i64_range() {
        match parse_scores("3 50 60 99999999999999999999") {
            Err(err @ ScoreError::ScoreOutOfRange { .. }) => {
                assert_eq!(
                    err.to_string(),
                    "score #3 does not fit in a 64-bit integer: '99999999999999999999'"
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn mark_below_i64_range() {
        assert!(matches!(
            parse_scores("1 -99999999999999999999"),
            Err(ScoreError::ScoreOutOfRange { position: 1, .. })
        ));
    }

    #[test]
    fn too_few_marks() {
        match parse_scores("4 50 60") {
            Err(ScoreError::MissingScores { expected, found }) => {
                assert_eq!((expected, found), (4, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn huge_count_does_not_preallocate() {
        let text = format!("{} 1", usize::MAX);
        assert!(matches!(
            parse_scores(&text),
            Err(ScoreError::MissingScores { found: 1, .. })
        ));
    }
}
