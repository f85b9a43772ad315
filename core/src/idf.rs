use std::collections::{BTreeMap, HashSet};

/// Inverse document frequencies for one document set.
///
/// Only words seen in at least one document have an entry. Lookups of any
/// other word go through [`IdfTable::weight`], which returns zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    weights: BTreeMap<String, f64>,
    num_docs: usize,
}

impl IdfTable {
    /// IDF of `word`, or `0.0` when the word never occurred in the set.
    pub fn weight(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    /// The stored IDF, distinguishing "absent" from any real weight.
    pub fn get(&self, word: &str) -> Option<f64> { self.weights.get(word).copied() }

    pub fn contains(&self, word: &str) -> bool { self.weights.contains_key(word) }

    pub fn len(&self) -> usize { self.weights.len() }

    pub fn is_empty(&self) -> bool { self.weights.is_empty() }

    /// Size of the document set the table was computed over.
    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, idf)| (w.as_str(), *idf))
    }
}

/// Compute `idf = 1 + N / (1 + df)` over a set of token sequences.
///
/// A word counts once per document no matter how often it repeats there.
/// An empty set yields an empty table.
pub fn compute_idfs<'a, I>(documents: I) -> IdfTable
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let mut df: BTreeMap<String, u32> = BTreeMap::new();
    let mut num_docs = 0usize;
    for tokens in documents {
        num_docs += 1;
        let seen_in_doc: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for word in seen_in_doc {
            *df.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let n = num_docs as f64;
    let weights = df
        .into_iter()
        .map(|(word, df_t)| (word, 1.0 + n / (1.0 + df_t as f64)))
        .collect();
    IdfTable { weights, num_docs }
}
