//! File- and sentence-level ranking.
//!
//! Both rankers sort with explicit comparators so that equal scores always
//! come out in the same order:
//! - files: TF-IDF descending, then file name ascending
//! - sentences: IDF sum descending, then query density descending, then first appearance

use crate::corpus::TokenizedDocs;
use crate::idf::IdfTable;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

/// Sentence text → token sequence, in order of first appearance.
pub type SentenceSet = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredFile {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub idf_score: f64,
    /// Share of the sentence's tokens that are query terms.
    pub density: f64,
    /// Index in the sentence set; breaks exact ties.
    pub position: usize,
}

pub fn compare_files(a: &ScoredFile, b: &ScoredFile) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.name.cmp(&b.name))
}

pub fn compare_sentences(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    b.idf_score
        .total_cmp(&a.idf_score)
        .then_with(|| b.density.total_cmp(&a.density))
        .then_with(|| a.position.cmp(&b.position))
}

/// Score every file by Σ tf(word) × idf(word) over the query and keep the best `n`.
pub fn rank_files(query: &BTreeSet<String>, files: &TokenizedDocs, idfs: &IdfTable, n: usize) -> Vec<ScoredFile> {
    let mut scored: Vec<ScoredFile> = files
        .iter()
        .map(|(name, words)| {
            let score = query
                .iter()
                .map(|word| term_count(word, words) as f64 * idfs.weight(word))
                .fold(0.0, |acc, x| acc + x);
            ScoredFile { name: name.clone(), score }
        })
        .collect();
    scored.sort_by(compare_files);
    scored.truncate(n);
    scored
}

pub fn top_files(query: &BTreeSet<String>, files: &TokenizedDocs, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_files(query, files, idfs, n).into_iter().map(|f| f.name).collect()
}

/// Score sentences by the summed IDF of the query words they contain and keep the best `n`.
///
/// Sentences without tokens have no density and are not candidates.
pub fn rank_sentences(query: &BTreeSet<String>, sentences: &SentenceSet, idfs: &IdfTable, n: usize) -> Vec<ScoredSentence> {
    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .enumerate()
        .filter(|(_, (_, tokens))| !tokens.is_empty())
        .map(|(position, (text, tokens))| {
            let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            let matched: Vec<&String> = query.iter().filter(|w| present.contains(w.as_str())).collect();
            let idf_score = matched.iter().fold(0.0, |acc, w| acc + idfs.weight(w));
            let density = matched.len() as f64 / tokens.len() as f64;
            ScoredSentence { text: text.clone(), idf_score, density, position }
        })
        .collect();
    scored.sort_by(compare_sentences);
    scored.truncate(n);
    scored
}

pub fn top_sentences(query: &BTreeSet<String>, sentences: &SentenceSet, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_sentences(query, sentences, idfs, n).into_iter().map(|s| s.text).collect()
}

fn term_count(word: &str, words: &[String]) -> usize {
    words.iter().filter(|w| *w == word).count()
}
