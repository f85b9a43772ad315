use proptest::prelude::*;
use qa_core::{compute_idfs, rank_sentences, top_files, top_sentences, SentenceSet, TokenizedDocs, Tokenizer};
use std::collections::{BTreeMap, BTreeSet, HashSet};

fn vocab() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["apple", "birch", "cedar", "delta", "ember", "fjord", "grove", "heron"])
        .prop_map(str::to_string)
}

fn docs() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(vocab(), 0..12), 0..8)
}

fn named(docs: &[Vec<String>]) -> TokenizedDocs {
    docs.iter().enumerate().map(|(i, d)| (format!("doc{i:02}.txt"), d.clone())).collect()
}

proptest! {
    #[test]
    fn tokenize_is_idempotent(text in "[a-zA-Z0-9 ,.!?'\\-]{0,80}") {
        let tokenizer = Tokenizer::english();
        let once = tokenizer.tokenize(&text);
        let twice = tokenizer.tokenize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn idf_stays_within_bounds(docs in docs()) {
        let idfs = compute_idfs(&docs);
        let n = docs.len() as f64;
        for (word, idf) in idfs.iter() {
            prop_assert!(idf > 1.0, "{} has idf {}", word, idf);
            prop_assert!(idf <= 1.0 + n / 2.0, "{} has idf {}", word, idf);
        }
    }

    #[test]
    fn every_seen_word_is_in_the_table(docs in docs()) {
        let idfs = compute_idfs(&docs);
        let seen: HashSet<&String> = docs.iter().flatten().collect();
        prop_assert_eq!(idfs.len(), seen.len());
        for word in seen {
            prop_assert!(idfs.contains(word));
        }
    }

    #[test]
    fn rarer_words_weigh_more(docs in docs()) {
        let idfs = compute_idfs(&docs);
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &docs {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for w in unique { *df.entry(w).or_default() += 1; }
        }
        for (a, dfa) in &df {
            for (b, dfb) in &df {
                if dfa < dfb {
                    prop_assert!(idfs.weight(a) > idfs.weight(b));
                }
            }
        }
    }

    #[test]
    fn file_ranking_is_deterministic_and_bounded(docs in docs(), q in prop::collection::btree_set(vocab(), 0..4), k in 0usize..10) {
        let files = named(&docs);
        let idfs = compute_idfs(files.values());
        let first = top_files(&q, &files, &idfs, k);
        let second = top_files(&q, &files, &idfs, k);
        prop_assert_eq!(first.len(), k.min(files.len()));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sentence_ranking_is_deterministic_and_bounded(docs in docs(), q in prop::collection::btree_set(vocab(), 0..4), k in 0usize..10) {
        let sentences: SentenceSet = docs
            .iter()
            .filter(|d| !d.is_empty())
            .enumerate()
            .map(|(i, d)| (format!("sentence {i}"), d.clone()))
            .collect();
        let idfs = compute_idfs(sentences.values());
        let first = top_sentences(&q, &sentences, &idfs, k);
        let second = top_sentences(&q, &sentences, &idfs, k);
        prop_assert_eq!(first.len(), k.min(sentences.len()));
        prop_assert_eq!(first, second);

        let ranked = rank_sentences(&q, &sentences, &idfs, k);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].idf_score >= pair[1].idf_score);
            if pair[0].idf_score == pair[1].idf_score {
                prop_assert!(pair[0].density >= pair[1].density);
            }
        }
    }
}

#[test]
fn empty_query_scores_nothing() {
    let files = named(&[vec!["apple".to_string()], vec!["birch".to_string()]]);
    let idfs = compute_idfs(files.values());
    let ranked = qa_core::rank_files(&BTreeSet::new(), &files, &idfs, 2);
    assert!(ranked.iter().all(|f| f.score == 0.0));
}
