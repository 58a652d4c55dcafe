//! The WordNet noun hierarchy.
//!
//! WordNet groups nouns into synsets (sets of synonyms) and links each synset
//! to its hypernyms (more general synsets). [`WordNet`] loads both files,
//! validates the hypernym graph as a rooted DAG and answers noun-level
//! questions by mapping each noun to the set of synsets containing it.
//!
//! ```rust
//! use wordnet_sca::WordNet;
//!
//! let synsets = "0,entity,\n1,animal beast,\n2,plant flora,\n3,cat,\n4,fern,\n";
//! let hypernyms = "1,0\n2,0\n3,1\n4,2\n";
//! let wordnet = WordNet::parse(synsets, hypernyms).unwrap();
//!
//! assert_eq!(wordnet.distance("cat", "fern").unwrap(), 4);
//! assert_eq!(wordnet.sca("cat", "beast").unwrap(), "animal beast");
//! ```

mod outcast;
mod parse;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{LoadError, WordNetError};
use crate::sca::ShortestCommonAncestor;

pub use outcast::Outcast;

/// WordNet nouns, synsets and the hypernym DAG.
#[derive(Debug, Clone)]
pub struct WordNet {
    synsets: Vec<String>,
    nouns: BTreeMap<String, Vec<usize>>,
    sca: ShortestCommonAncestor,
}

impl WordNet {
    /// Loads WordNet from a synsets file and a hypernyms file.
    pub fn from_files(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let synsets = synsets.as_ref();
        let hypernyms = hypernyms.as_ref();
        Self::build(
            &synsets.display().to_string(),
            &read(synsets)?,
            &hypernyms.display().to_string(),
            &read(hypernyms)?,
        )
    }

    /// Builds WordNet from in-memory synsets and hypernyms text.
    pub fn parse(synsets: &str, hypernyms: &str) -> Result<Self, LoadError> {
        Self::build("synsets", synsets, "hypernyms", hypernyms)
    }

    fn build(
        synsets_input: &str,
        synsets_text: &str,
        hypernyms_input: &str,
        hypernyms_text: &str,
    ) -> Result<Self, LoadError> {
        let parsed = parse::parse_synsets(synsets_input, synsets_text)?;
        let graph = parse::parse_hypernyms(hypernyms_input, hypernyms_text, parsed.words.len())?;
        let sca = ShortestCommonAncestor::new(&graph)?;

        tracing::debug!(
            synsets = parsed.words.len(),
            nouns = parsed.nouns.len(),
            hypernyms = graph.edge_count(),
            root = sca.dag().root(),
            "loaded WordNet"
        );

        Ok(Self {
            synsets: parsed.words,
            nouns: parsed.nouns,
            sca,
        })
    }

    /// All WordNet nouns, sorted and without repeats.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.nouns.keys().map(String::as_str)
    }

    /// Number of distinct nouns.
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Number of synsets.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Is `word` a WordNet noun?
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Ids of the synsets containing `noun`.
    pub fn synsets_of(&self, noun: &str) -> Option<&[usize]> {
        self.nouns.get(noun).map(Vec::as_slice)
    }

    /// The word field of synset `id`.
    pub fn synset(&self, id: usize) -> Option<&str> {
        self.synsets.get(id).map(String::as_str)
    }

    /// Distance between two nouns: the shortest ancestral path between any
    /// synset of `noun1` and any synset of `noun2`.
    pub fn distance(&self, noun1: &str, noun2: &str) -> Result<usize, WordNetError> {
        let (a, b) = self.lookup(noun1, noun2)?;
        Ok(self.sca.length_sets(a.iter().copied(), b.iter().copied())?)
    }

    /// Word field of a synset that is a shortest common ancestor of `noun1`
    /// and `noun2`.
    pub fn sca(&self, noun1: &str, noun2: &str) -> Result<&str, WordNetError> {
        let (a, b) = self.lookup(noun1, noun2)?;
        let ancestor = self.sca.ancestor_sets(a.iter().copied(), b.iter().copied())?;
        Ok(&self.synsets[ancestor])
    }

    /// The ancestor query engine over the hypernym DAG.
    pub fn graph(&self) -> &ShortestCommonAncestor {
        &self.sca
    }

    fn lookup(&self, noun1: &str, noun2: &str) -> Result<(&[usize], &[usize]), WordNetError> {
        let find = |noun: &str| {
            self.synsets_of(noun)
                .ok_or_else(|| WordNetError::UnknownNoun(noun.to_owned()))
        };
        Ok((find(noun1)?, find(noun2)?))
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
