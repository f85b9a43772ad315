use anyhow::{Context, Result};
use clap::Parser;
use qa_core::pipeline::{FILE_MATCHES, SENTENCE_MATCHES};
use qa_core::{CorpusIndex, QaConfig, Tokenizer};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ask")]
#[command(about = "Answer a question with the best matching sentences from a directory of .txt files", long_about = None)]
pub struct Cli {
    /// Directory holding the .txt corpus
    pub corpus: PathBuf,
    /// Number of top-ranked files whose sentences are considered
    #[arg(long, default_value_t = FILE_MATCHES)]
    pub files: usize,
    /// Number of sentences to print
    #[arg(long, default_value_t = SENTENCE_MATCHES)]
    pub sentences: usize,
    /// Query text; read from stdin after a prompt when omitted
    #[arg(long)]
    pub query: Option<String>,
    /// Stopword list, one word per line, replacing the bundled English list
    #[arg(long)]
    pub stopwords: Option<PathBuf>,
    /// Apply NFKC normalization before lowercasing
    #[arg(long, default_value_t = false)]
    pub nfkc: bool,
    /// Print the full scored answer as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    pub fn config(&self) -> Result<QaConfig> {
        Ok(QaConfig::new(self.files, self.sentences)?)
    }

    pub fn tokenizer(&self) -> Result<Tokenizer> {
        let tokenizer = match &self.stopwords {
            Some(path) => Tokenizer::from_stopword_file(path)
                .with_context(|| format!("loading stopwords from {}", path.display()))?,
            None => Tokenizer::english(),
        };
        Ok(tokenizer.nfkc(self.nfkc))
    }
}

/// Load the corpus, read the query and write the answer lines to `out`.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> Result<()> {
    let config = cli.config()?;
    let tokenizer = cli.tokenizer()?;
    let index = CorpusIndex::open(&cli.corpus, tokenizer)
        .with_context(|| format!("loading corpus from {}", cli.corpus.display()))?;

    let query = match &cli.query {
        Some(q) => q.clone(),
        None => prompt(input, out)?,
    };
    let answer = index.answer(&query, &config);
    tracing::info!(files = answer.files.len(), sentences = answer.sentences.len(), "answered query");
    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &answer)?;
        writeln!(out)?;
    } else {
        for sentence in answer.sentence_texts() {
            writeln!(out, "{sentence}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "Query: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading query from stdin")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
