//! Parsers for the synsets and hypernyms CSV files.

use std::collections::BTreeMap;

use crate::error::LoadError;
use crate::graph::Digraph;

/// The parsed synsets file.
#[derive(Debug, Default)]
pub(crate) struct Synsets {
    /// Word field of each synset, indexed by synset id.
    pub(crate) words: Vec<String>,
    /// Synset ids containing each noun, in file order.
    pub(crate) nouns: BTreeMap<String, Vec<usize>>,
}

/// Parses lines of the form `id,word1 word2 ...,gloss`.
///
/// Ids must be distinct and lie in `0..line_count`. The gloss may contain
/// commas and is discarded.
pub(crate) fn parse_synsets(input: &str, text: &str) -> Result<Synsets, LoadError> {
    let lines: Vec<&str> = text.lines().collect();
    let count = lines.len();
    let mut words: Vec<Option<String>> = vec![None; count];
    let mut nouns: BTreeMap<String, Vec<usize>> = BTreeMap::new();

    for (idx, line) in lines.iter().enumerate() {
        let lineno = idx + 1;
        let mut fields = line.splitn(3, ',');
        let id = parse_id(input, lineno, fields.next().unwrap_or_default(), count)?;
        let synset = fields
            .next()
            .ok_or_else(|| LoadError::parse(input, lineno, "missing word field"))?;

        let slot = &mut words[id];
        if slot.is_some() {
            return Err(LoadError::parse(
                input,
                lineno,
                format!("duplicate synset id {id}"),
            ));
        }
        *slot = Some(synset.to_owned());

        for noun in synset.split(' ').filter(|w| !w.is_empty()) {
            nouns.entry(noun.to_owned()).or_default().push(id);
        }
    }

    // `count` slots, `count` distinct ids in range: every slot is filled.
    let words = words.into_iter().map(Option::unwrap_or_default).collect();
    Ok(Synsets { words, nouns })
}

/// Parses lines of the form `id,hypernym1,hypernym2,...` into a digraph over
/// `synset_count` vertices.
pub(crate) fn parse_hypernyms(
    input: &str,
    text: &str,
    synset_count: usize,
) -> Result<Digraph, LoadError> {
    let mut graph = Digraph::new(synset_count);
    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let mut fields = line.split(',');
        let v = parse_id(input, lineno, fields.next().unwrap_or_default(), synset_count)?;
        for field in fields {
            let w = parse_id(input, lineno, field, synset_count)?;
            graph
                .add_edge(v, w)
                .map_err(|err| LoadError::parse(input, lineno, err.to_string()))?;
        }
    }
    Ok(graph)
}

fn parse_id(input: &str, line: usize, field: &str, count: usize) -> Result<usize, LoadError> {
    let field = field.trim();
    let id: usize = field
        .parse()
        .map_err(|_| LoadError::parse(input, line, format!("invalid synset id `{field}`")))?;
    if id >= count {
        return Err(LoadError::parse(
            input,
            line,
            format!("synset id {id} is out of range for {count} synsets"),
        ));
    }
    Ok(id)
}
