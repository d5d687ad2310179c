/// One proposed fix-text and the strategy that produced it.
///
/// `score` is the fuzzy similarity for match-based strategies and `None` for
/// curated ones. It never reorders candidates across strategies: the order in
/// which strategies were registered is authoritative.
#[derive(Clone, PartialEq, Debug)]
pub struct SuggestionCandidate {
    pub text: String,
    pub source: &'static str,
    pub score: Option<f64>,
}

impl SuggestionCandidate {
    /// Create an unscored candidate.
    pub fn new(text: impl Into<String>, source: &'static str) -> Self {
        SuggestionCandidate {
            text: text.into(),
            source,
            score: None,
        }
    }

    /// Create a candidate carrying its similarity score.
    pub fn scored(text: impl Into<String>, source: &'static str, score: f64) -> Self {
        SuggestionCandidate {
            text: text.into(),
            source,
            score: Some(score),
        }
    }
}
