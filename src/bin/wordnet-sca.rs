use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordnet_sca::{Digraph, Outcast, ShortestCommonAncestor, WordNet};

#[derive(Parser)]
#[command(name = "wordnet-sca")]
#[command(about = "Shortest common ancestor queries over rooted DAGs and WordNet", long_about = None)]
struct Cli {
    /// Log more detail to stderr (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read vertex pairs from stdin and print their SCA and path length
    Sca {
        /// Digraph file: `V E` followed by `E` vertex pairs
        digraph: PathBuf,

        /// Print one JSON object per pair
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the distance and SCA synset of two nouns
    Query {
        synsets: PathBuf,
        hypernyms: PathBuf,
        noun1: String,
        noun2: String,
    },
    /// Print the outcast of each file's list of nouns
    Outcast {
        synsets: PathBuf,
        hypernyms: PathBuf,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sca { digraph, json } => run_sca(&digraph, json),
        Commands::Query {
            synsets,
            hypernyms,
            noun1,
            noun2,
        } => {
            let wordnet = load_wordnet(&synsets, &hypernyms)?;
            let distance = wordnet.distance(&noun1, &noun2)?;
            let sca = wordnet.sca(&noun1, &noun2)?;
            println!("distance = {distance}, sca = {sca}");
            Ok(())
        }
        Commands::Outcast {
            synsets,
            hypernyms,
            files,
        } => {
            let wordnet = load_wordnet(&synsets, &hypernyms)?;
            let outcast = Outcast::new(&wordnet);
            for file in files {
                let text = fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                let nouns: Vec<&str> = text.split_whitespace().collect();
                let found = outcast
                    .outcast(&nouns)
                    .with_context(|| format!("Failed to find outcast in {}", file.display()))?;
                println!("{}: {}", file.display(), found.unwrap_or_default());
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_wordnet(synsets: &Path, hypernyms: &Path) -> Result<WordNet> {
    WordNet::from_files(synsets, hypernyms).context("Failed to load WordNet")
}

/// Groups vertex tokens into `(v, w)` pairs, independent of line breaks.
#[derive(Debug, Default)]
struct VertexPairs {
    pending: Option<i64>,
}

impl VertexPairs {
    /// Consumes one token, returning a pair once its second vertex arrives.
    fn push(&mut self, token: &str) -> Result<Option<(i64, i64)>> {
        let raw: i64 = token
            .parse()
            .with_context(|| format!("Invalid vertex `{token}`"))?;
        Ok(match self.pending.take() {
            Some(v) => Some((v, raw)),
            None => {
                self.pending = Some(raw);
                None
            }
        })
    }

    /// Fails if a vertex is still waiting for its partner.
    fn finish(self) -> Result<()> {
        if let Some(v) = self.pending {
            bail!("Unpaired vertex {v} at end of input");
        }
        Ok(())
    }
}

fn run_sca(path: &Path, json: bool) -> Result<()> {
    let graph = Digraph::from_file(path).context("Failed to load digraph")?;
    let sca = ShortestCommonAncestor::new(&graph)
        .with_context(|| format!("{} is not a rooted DAG", path.display()))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut pairs = VertexPairs::default();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        for token in line.split_whitespace() {
            let Some((v, w)) = pairs.push(token)? else {
                continue;
            };

            let ancestry = sca
                .vertex(v)
                .and_then(|v| sca.vertex(w).and_then(|w| sca.ancestry(v, w)));
            match ancestry {
                Ok(found) if json => writeln!(stdout, "{}", serde_json::to_string(&found)?)?,
                Ok(found) => writeln!(
                    stdout,
                    "length = {}, ancestor = {}",
                    found.length, found.ancestor
                )?,
                Err(err) => eprintln!("{v} {w}: {err}"),
            }
        }
    }

    pairs.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_all(text: &str) -> Result<Vec<(i64, i64)>> {
        let mut pairs = VertexPairs::default();
        let mut found = Vec::new();
        for line in text.lines() {
            for token in line.split_whitespace() {
                found.extend(pairs.push(token)?);
            }
        }
        pairs.finish()?;
        Ok(found)
    }

    #[test]
    fn pairs_span_line_breaks() {
        assert_eq!(pair_all("0 1\n2\n3 4 5\n").unwrap(), vec![(0, 1), (2, 3), (4, 5)]);
    }

    #[test]
    fn negative_ids_pass_through() {
        assert_eq!(pair_all("-1 0").unwrap(), vec![(-1, 0)]);
    }

    #[test]
    fn unpaired_trailing_vertex_is_rejected() {
        let err = pair_all("0 1\n7\n").unwrap_err();
        assert_eq!(err.to_string(), "Unpaired vertex 7 at end of input");
    }

    #[test]
    fn non_numeric_token_is_rejected() {
        let err = pair_all("0 x").unwrap_err();
        assert_eq!(err.to_string(), "Invalid vertex `x`");
    }

    #[test]
    fn empty_input_has_no_pairs() {
        assert!(pair_all("").unwrap().is_empty());
    }
}
