use crate::error::{QaError, Result};
use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref ENGLISH_STOPWORDS: HashSet<String> = {
        let words: &[&str] = &[
            "i","me","my","myself","we","our","ours","ourselves",
            "you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
            "he","him","his","himself","she","she's","her","hers","herself",
            "it","it's","its","itself","they","them","their","theirs","themselves",
            "what","which","who","whom","this","that","that'll","these","those",
            "am","is","are","was","were","be","been","being","have","has","had","having","do","does","did","doing",
            "a","an","the","and","but","if","or","because","as","until","while",
            "of","at","by","for","with","about","against","between","into","through","during","before","after",
            "above","below","to","from","up","down","in","out","on","off","over","under",
            "again","further","then","once","here","there","when","where","why","how",
            "all","any","both","each","few","more","most","other","some","such",
            "no","nor","not","only","own","same","so","than","too","very",
            "s","t","can","will","just","don","don't","should","should've","now",
            "d","ll","m","o","re","ve","y",
            "ain","aren","aren't","couldn","couldn't","didn","didn't","doesn","doesn't",
            "hadn","hadn't","hasn","hasn't","haven","haven't","isn","isn't","ma",
            "mightn","mightn't","mustn","mustn't","needn","needn't","shan","shan't",
            "shouldn","shouldn't","wasn","wasn't","weren","weren't","won","won't","wouldn","wouldn't"
        ];
        words.iter().map(|w| w.to_string()).collect()
    };
}

/// Word normalizer shared by documents, sentences and queries.
///
/// Holds the stopword set explicitly so callers decide which resources are
/// loaded; the bundled English list is built once on first use.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: HashSet<String>,
    nfkc: bool,
}

impl Default for Tokenizer {
    fn default() -> Self { Self::english() }
}

impl Tokenizer {
    /// Tokenizer with the bundled English stopword list.
    pub fn english() -> Self {
        Self { stopwords: ENGLISH_STOPWORDS.clone(), nfkc: false }
    }

    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase().replace(RIGHT_QUOTE, "'"))
            .collect();
        Self { stopwords, nfkc: false }
    }

    /// Load a stopword list with one word per line. Blank lines and `#` comments are skipped.
    pub fn from_stopword_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| QaError::io(path, source))?;
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        let tokenizer = Self::with_stopwords(words);
        tracing::debug!(path = %path.display(), count = tokenizer.stopwords.len(), "loaded stopwords");
        Ok(tokenizer)
    }

    /// Apply NFKC compatibility normalization before lowercasing.
    pub fn nfkc(mut self, enabled: bool) -> Self {
        self.nfkc = enabled;
        self
    }

    pub fn is_stopword(&self, token: &str) -> bool { self.stopwords.contains(token) }

    /// Lowercase, split on Unicode word boundaries, and drop whitespace,
    /// lone punctuation and stopwords. Order is preserved.
    ///
    /// Curly apostrophes are read as `'`. A word that is not itself a
    /// stopword loses its trailing clitics (`rust's` → `rust`,
    /// `can't` → `ca`) and the remaining base is checked again.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = if self.nfkc {
            text.nfkc().collect::<String>().to_lowercase()
        } else {
            text.to_lowercase()
        };
        lowered
            .split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .filter(|token| !is_punctuation(token))
            .map(|token| token.replace(RIGHT_QUOTE, "'"))
            .filter(|word| !self.is_stopword(word))
            .map(|word| strip_clitics(&word).to_string())
            .filter(|word| !word.is_empty() && !self.is_stopword(word))
            .collect()
    }

    /// Query terms: tokens with duplicates collapsed.
    pub fn query(&self, text: &str) -> BTreeSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}

const RIGHT_QUOTE: char = '\u{2019}';
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

fn strip_clitics(mut word: &str) -> &str {
    while let Some(base) = CLITICS.iter().find_map(|clitic| word.strip_suffix(clitic)) {
        word = base.trim_end_matches('\'');
    }
    word
}

fn is_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_alphanumeric())
}

/// Split text into sentences. Line breaks always end a passage; sentence
/// boundaries are only searched for within a passage.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.lines()
        .flat_map(|passage| passage.unicode_sentences())
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
