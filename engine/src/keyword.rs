use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Built-in English noise words, used when the caller supplies no
    /// noise-word file. Alphabetic forms only; contracted forms like
    /// "don't" can never survive normalization anyway.
    pub static ref DEFAULT_NOISE_WORDS: HashSet<String> = {
        let words: &[&str] = &[
            "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
            "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
            "between", "both", "but", "by", "can", "cannot", "could", "did", "do", "does",
            "doing", "down", "during", "each", "few", "for", "from", "further", "had",
            "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
            "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
            "me", "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on",
            "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out",
            "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
            "the", "their", "theirs", "them", "themselves", "then", "there", "these",
            "they", "this", "those", "through", "to", "too", "under", "until", "up",
            "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
            "whom", "why", "with", "would", "you", "your", "yours", "yourself",
            "yourselves",
        ];
        words.iter().map(|w| w.to_string()).collect()
    };
}

/// Normalize a raw whitespace-delimited token into an index keyword.
///
/// A keyword is a token that, after being stripped of a trailing run of
/// non-letter characters, consists only of letters and is not a noise
/// word. Keywords are stored lowercase, so lookup is case-insensitive by
/// construction.
///
/// The rule is strict: a token is rejected outright when it is empty,
/// starts with a non-letter, or a letter reappears after the first
/// non-letter. `"ab?cd"` yields nothing, not `"ab"`.
pub fn normalize(token: &str, noise_words: &HashSet<String>) -> Option<String> {
    let mut chars = token.char_indices();
    let (_, first) = chars.next()?;
    if !first.is_alphabetic() {
        return None;
    }
    // Once non-letters start they must run to the end of the token.
    let mut trailer_start = None;
    for (i, ch) in chars {
        match (ch.is_alphabetic(), trailer_start) {
            (true, Some(_)) => return None,
            (false, None) => trailer_start = Some(i),
            _ => {}
        }
    }
    let candidate = match trailer_start {
        Some(end) => &token[..end],
        None => token,
    };
    let lowered = candidate.to_lowercase();
    if noise_words.contains(&lowered) {
        None
    } else {
        Some(lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_noise() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(normalize("Coming.", &no_noise()), Some("coming".into()));
        assert_eq!(normalize("farts,", &no_noise()), Some("farts".into()));
        assert_eq!(normalize("word?!...", &no_noise()), Some("word".into()));
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize("HELLO", &no_noise()), Some("hello".into()));
    }

    #[test]
    fn rejects_leading_non_letter() {
        assert_eq!(normalize(".hello", &no_noise()), None);
        assert_eq!(normalize("9lives", &no_noise()), None);
    }

    #[test]
    fn rejects_letter_after_non_letter_run() {
        assert_eq!(normalize("ab?cd", &no_noise()), None);
        assert_eq!(normalize("don't", &no_noise()), None);
        assert_eq!(normalize("ff??d??", &no_noise()), None);
    }

    #[test]
    fn rejects_empty_and_all_punctuation() {
        assert_eq!(normalize("", &no_noise()), None);
        assert_eq!(normalize("---", &no_noise()), None);
    }

    #[test]
    fn rejects_noise_words_case_insensitively() {
        let noise: HashSet<String> = ["the".to_string()].into_iter().collect();
        assert_eq!(normalize("The", &noise), None);
        assert_eq!(normalize("THE.", &noise), None);
        assert_eq!(normalize("theory", &noise), Some("theory".into()));
    }

    #[test]
    fn default_noise_words_filter_common_words() {
        assert_eq!(normalize("the", &DEFAULT_NOISE_WORDS), None);
        assert_eq!(normalize("and", &DEFAULT_NOISE_WORDS), None);
        assert_eq!(normalize("ferret", &DEFAULT_NOISE_WORDS), Some("ferret".into()));
    }
}
