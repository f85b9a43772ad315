pub mod corpus;
pub mod error;
pub mod idf;
pub mod pipeline;
pub mod rank;
pub mod tokenizer;

pub use corpus::{load_files, Corpus, TokenizedDocs};
pub use error::{QaError, Result};
pub use idf::{compute_idfs, IdfTable};
pub use pipeline::{answer_query, Answer, CorpusIndex, QaConfig};
pub use rank::{rank_files, rank_sentences, top_files, top_sentences, ScoredFile, ScoredSentence, SentenceSet};
pub use tokenizer::{split_sentences, Tokenizer};
