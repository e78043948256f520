use crate::lexicon::Lexicons;

/// Code points above this are treated as emoji candidates.
pub const EMOJI_CODEPOINT_THRESHOLD: u32 = 1000;

/// Lexicon hit counts for a single post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostSignals {
    pub positive_words: i64,
    pub negative_words: i64,
    pub positive_hashtags: i64,
    pub negative_hashtags: i64,
    pub positive_emoji: i64,
    pub negative_emoji: i64,
    /// Net keyword score per topic bucket, in lexicon order.
    pub topics: Vec<i64>,
}

impl PostSignals {
    pub fn from_text(text: &str, lexicons: &Lexicons) -> Self {
        let tokens = tokenize(text);
        let hashtags = extract_hashtags(text);
        let emoji = extract_emoji(text);

        let count = |items: &[String], set: &std::collections::HashSet<String>| {
            items.iter().filter(|item| set.contains(*item)).count() as i64
        };

        Self {
            positive_words: count(&tokens, &lexicons.positive_words),
            negative_words: count(&tokens, &lexicons.negative_words),
            positive_hashtags: count(&hashtags, &lexicons.positive_hashtags),
            negative_hashtags: count(&hashtags, &lexicons.negative_hashtags),
            positive_emoji: count(&emoji, &lexicons.positive_emoji),
            negative_emoji: count(&emoji, &lexicons.negative_emoji),
            topics: topic_scores(text, lexicons),
        }
    }

    /// Positive minus negative hits across words, hashtags and emoji.
    pub fn net(&self) -> i64 {
        let positive = self.positive_words + self.positive_hashtags + self.positive_emoji;
        let negative = self.negative_words + self.negative_hashtags + self.negative_emoji;
        positive - negative
    }

    pub fn is_positive(&self) -> bool {
        self.net() > 0
    }
}

/// Lower-cased runs of ASCII letters and apostrophes.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in lowered.chars() {
        if ch.is_ascii_alphabetic() || ch == '\'' {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// `#word` tokens, lower-cased with the `#` kept.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tags = Vec::new();
    let mut idx = 0;
    while idx < chars.len() {
        if chars[idx] != '#' {
            idx += 1;
            continue;
        }
        let start = idx + 1;
        let mut end = start;
        while end < chars.len() && is_word_char(chars[end]) {
            end += 1;
        }
        if end > start {
            let word: String = chars[start..end].iter().collect();
            tags.push(format!("#{}", word.to_lowercase()));
            idx = end;
        } else {
            idx += 1;
        }
    }
    tags
}

/// Single code points above [`EMOJI_CODEPOINT_THRESHOLD`], as strings.
pub fn extract_emoji(text: &str) -> Vec<String> {
    text.chars()
        .filter(|ch| *ch as u32 > EMOJI_CODEPOINT_THRESHOLD)
        .map(String::from)
        .collect()
}

/// Keyword hits minus negative keyword hits per topic. Keywords match as
/// substrings of the lower-cased text, so "art" also fires on "party".
pub fn topic_scores(text: &str, lexicons: &Lexicons) -> Vec<i64> {
    let lowered = text.to_lowercase();
    lexicons
        .topics
        .iter()
        .map(|bucket| {
            let positive = bucket
                .positive
                .iter()
                .filter(|word| lowered.contains(word.as_str()))
                .count() as i64;
            let negative = bucket
                .negative
                .iter()
                .filter(|word| lowered.contains(word.as_str()))
                .count() as i64;
            positive - negative
        })
        .collect()
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
