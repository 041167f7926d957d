use super::super::domain::{AnswerDomain, FivePointAnswer, TernaryAnswer};

/// Score for a single answer. Anything the domain does not recognize,
/// including an empty token, scores 0 and drags its category down.
pub fn score(domain: AnswerDomain, token: &str) -> u8 {
    let scored = match domain {
        AnswerDomain::Ternary => TernaryAnswer::from_token(token).map(TernaryAnswer::score),
        AnswerDomain::FivePoint => FivePointAnswer::from_token(token).map(FivePointAnswer::score),
    };
    scored.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ternary_scores_are_asymmetric() {
        assert_eq!(score(AnswerDomain::Ternary, "yes"), 5);
        assert_eq!(score(AnswerDomain::Ternary, "no"), 1);
        assert_eq!(score(AnswerDomain::Ternary, "dont_know"), 2);
    }

    #[test]
    fn five_point_scores_descend() {
        let scores: Vec<u8> = ["excellent", "good", "average", "poor", "very_poor"]
            .into_iter()
            .map(|token| score(AnswerDomain::FivePoint, token))
            .collect();
        assert_eq!(scores, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn unrecognized_tokens_score_zero() {
        for token in ["", " ", "YES", "maybe", "excellent"] {
            assert_eq!(score(AnswerDomain::Ternary, token), 0, "token {token:?}");
        }
        for token in ["", "yes", "very poor", "great"] {
            assert_eq!(score(AnswerDomain::FivePoint, token), 0, "token {token:?}");
        }
    }
}
