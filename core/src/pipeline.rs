use crate::corpus::{load_files, Corpus, TokenizedDocs};
use crate::error::{QaError, Result};
use crate::idf::{compute_idfs, IdfTable};
use crate::rank::{rank_files, rank_sentences, ScoredFile, ScoredSentence, SentenceSet};
use crate::tokenizer::{split_sentences, Tokenizer};
use serde::Serialize;
use std::path::Path;

pub const FILE_MATCHES: usize = 1;
pub const SENTENCE_MATCHES: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaConfig {
    /// Files whose sentences become answer candidates.
    pub file_matches: usize,
    /// Sentences returned.
    pub sentence_matches: usize,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self { file_matches: FILE_MATCHES, sentence_matches: SENTENCE_MATCHES }
    }
}

impl QaConfig {
    pub fn new(file_matches: usize, sentence_matches: usize) -> Result<Self> {
        let config = Self { file_matches, sentence_matches };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_matches == 0 {
            return Err(QaError::InvalidConfig("file_matches must be at least 1"));
        }
        if self.sentence_matches == 0 {
            return Err(QaError::InvalidConfig("sentence_matches must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub query: Vec<String>,
    /// Query terms that occur in no document and therefore score zero everywhere.
    pub unknown: Vec<String>,
    pub files: Vec<ScoredFile>,
    pub sentences: Vec<ScoredSentence>,
}

impl Answer {
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }
}

/// A corpus tokenized once, with its document-level IDFs, ready to answer queries.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    tokenizer: Tokenizer,
    files: Corpus,
    file_words: TokenizedDocs,
    file_idfs: IdfTable,
}

impl CorpusIndex {
    pub fn build(files: Corpus, tokenizer: Tokenizer) -> Self {
        let file_words: TokenizedDocs = files
            .iter()
            .map(|(name, text)| (name.clone(), tokenizer.tokenize(text)))
            .collect();
        let file_idfs = compute_idfs(file_words.values());
        tracing::info!(num_docs = file_words.len(), num_terms = file_idfs.len(), "indexed corpus");
        Self { tokenizer, files, file_words, file_idfs }
    }

    pub fn open<P: AsRef<Path>>(dir: P, tokenizer: Tokenizer) -> Result<Self> {
        Ok(Self::build(load_files(dir)?, tokenizer))
    }

    pub fn tokenizer(&self) -> &Tokenizer { &self.tokenizer }

    pub fn file_words(&self) -> &TokenizedDocs { &self.file_words }

    pub fn file_idfs(&self) -> &IdfTable { &self.file_idfs }

    pub fn is_empty(&self) -> bool { self.files.is_empty() }

    /// Rank files for `query`, then rank the sentences of the winning files
    /// against IDFs computed over those sentences alone.
    pub fn answer(&self, query: &str, config: &QaConfig) -> Answer {
        let query = self.tokenizer.query(query);
        let unknown: Vec<String> = query.iter().filter(|w| !self.file_idfs.contains(w)).cloned().collect();
        if !unknown.is_empty() {
            tracing::debug!(?unknown, "query terms found in no document");
        }
        if self.files.is_empty() {
            tracing::warn!("corpus is empty, nothing to rank");
        }

        let files = rank_files(&query, &self.file_words, &self.file_idfs, config.file_matches);
        tracing::debug!(files = ?files.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(), "top files");

        let sentences = self.sentence_candidates(&files);
        let sentence_idfs = compute_idfs(sentences.values());
        tracing::debug!(num_sentences = sentences.len(), num_terms = sentence_idfs.len(), "sentence candidates");

        let sentences = rank_sentences(&query, &sentences, &sentence_idfs, config.sentence_matches);
        Answer { query: query.into_iter().collect(), unknown, files, sentences }
    }

    /// Tokenized sentences of `files`, in file rank order. Sentences that
    /// leave no tokens are dropped; repeated sentence text keeps its first slot.
    fn sentence_candidates(&self, files: &[ScoredFile]) -> SentenceSet {
        let mut sentences = SentenceSet::new();
        for file in files {
            let Some(text) = self.files.get(&file.name) else { continue };
            for sentence in split_sentences(text) {
                if sentences.contains_key(sentence) { continue; }
                let tokens = self.tokenizer.tokenize(sentence);
                if !tokens.is_empty() {
                    sentences.insert(sentence.to_string(), tokens);
                }
            }
        }
        sentences
    }
}

/// One-shot: query an already loaded corpus.
pub fn answer_query(files: Corpus, tokenizer: Tokenizer, query: &str, config: &QaConfig) -> Answer {
    CorpusIndex::build(files, tokenizer).answer(query, config)
}
