//! # Edge Codes
//!
//! An edge code is a pair of vertex labels `uv` denoting the edge `u -> v`.
//! Codes are separated by exactly one separator character; a single trailing separator is
//! accepted. Parsing consumes three characters per edge and stops at the end of the input.

use std::{fmt, str::CharIndices};

use itertools::Itertools;

use crate::prelude::*;

const DEFAULT_SEPARATOR: char = ' ';

/// Parser for edge-code strings such as `"AB AC"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCodeReader {
    /// Character expected between two edge codes
    separator: char,
}

impl Default for EdgeCodeReader {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl EdgeCodeReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Returns a lazy iterator over the `(from, to)` label pairs in `codes`.
    ///
    /// The iterator yields an [`GraphError::InvalidArgument`] and then stops if it encounters
    /// an incomplete code, an empty code or an unexpected separator.
    ///
    /// # Example
    /// ```
    /// use lgraphs::io::EdgeCodeReader;
    ///
    /// let edges: Vec<_> = EdgeCodeReader::new()
    ///     .read("AB AC")
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(edges, vec![('A', 'B'), ('A', 'C')]);
    /// ```
    pub fn read<'a>(&self, codes: &'a str) -> EdgeCodes<'a> {
        EdgeCodes {
            chars: codes.char_indices(),
            separator: self.separator,
            finished: false,
        }
    }
}

/// Iterator over the label pairs of an edge-code string, see [`EdgeCodeReader::read`]
pub struct EdgeCodes<'a> {
    chars: CharIndices<'a>,
    separator: char,
    finished: bool,
}

impl EdgeCodes<'_> {
    fn next_code(&mut self) -> Option<GraphResult<(Label, Label)>> {
        let (pos, from) = self.chars.next()?;

        let Some((_, to)) = self.chars.next() else {
            return Some(Err(GraphError::invalid_argument(format!(
                "incomplete edge code '{from}' at byte {pos}"
            ))));
        };

        if from == self.separator || to == self.separator {
            return Some(Err(GraphError::invalid_argument(format!(
                "empty edge code at byte {pos}"
            ))));
        }

        match self.chars.next() {
            Some((_, c)) if c != self.separator => Some(Err(GraphError::invalid_argument(
                format!(
                    "expected separator {:?} after edge code '{from}{to}', found {c:?}",
                    self.separator
                ),
            ))),
            _ => Some(Ok((from, to))),
        }
    }
}

impl Iterator for EdgeCodes<'_> {
    type Item = GraphResult<(Label, Label)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let code = self.next_code();
        if !matches!(code, Some(Ok(_))) {
            self.finished = true;
        }
        code
    }
}

/// Renders the edges of a graph as edge codes.
///
/// Codes are grouped by source vertex in index order. Within a group, edges are written in the
/// reverse of their stored order, so reading the output back into a [`Graph`] reproduces the
/// neighbor order of every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCodeWriter {
    separator: char,
}

impl Default for EdgeCodeWriter {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl EdgeCodeWriter {
    /// Creates a new (default) writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Writes all edge codes of `graph` into `out`
    pub fn write_edge_codes<G, W>(&self, graph: &G, out: &mut W) -> fmt::Result
    where
        G: AdjacencyList + Labelled,
        W: fmt::Write + ?Sized,
    {
        let mut first = true;
        for u in graph.vertices() {
            let from = graph.label_of(u);
            for v in graph.neighbors_of(u).collect_vec().into_iter().rev() {
                if !first {
                    out.write_char(self.separator)?;
                }
                first = false;

                out.write_char(from)?;
                out.write_char(graph.label_of(v))?;
            }
        }
        Ok(())
    }

    /// Returns all edge codes of `graph` as a string
    pub fn to_edge_codes<G>(&self, graph: &G) -> String
    where
        G: AdjacencyList + Labelled,
    {
        EdgeCodesDisplay {
            writer: *self,
            graph,
        }
        .to_string()
    }
}

struct EdgeCodesDisplay<'a, G> {
    writer: EdgeCodeWriter,
    graph: &'a G,
}

impl<G> fmt::Display for EdgeCodesDisplay<'_, G>
where
    G: AdjacencyList + Labelled,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.writer.write_edge_codes(self.graph, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(reader: EdgeCodeReader, codes: &str) -> GraphResult<Vec<(Label, Label)>> {
        reader.read(codes).collect()
    }

    #[test]
    fn well_formed() {
        let reader = EdgeCodeReader::new();

        assert_eq!(parse(reader, ""), Ok(vec![]));
        assert_eq!(parse(reader, "AB"), Ok(vec![('A', 'B')]));
        assert_eq!(parse(reader, "AB "), Ok(vec![('A', 'B')]));
        assert_eq!(
            parse(reader, "AB AC GF"),
            Ok(vec![('A', 'B'), ('A', 'C'), ('G', 'F')])
        );
        assert_eq!(parse(reader, "AA"), Ok(vec![('A', 'A')]));
        assert_eq!(parse(reader, "äö ÄÖ"), Ok(vec![('ä', 'ö'), ('Ä', 'Ö')]));
    }

    #[test]
    fn custom_separator() {
        let reader = EdgeCodeReader::new().separator(',');
        assert_eq!(parse(reader, "AB,BC"), Ok(vec![('A', 'B'), ('B', 'C')]));
        assert!(parse(reader, "AB BC").is_err());
    }

    #[test]
    fn malformed() {
        let reader = EdgeCodeReader::new();

        for codes in ["A", "AB A", "AB,AC", "ABC", "AB  AC", " AB"] {
            assert!(
                matches!(parse(reader, codes), Err(GraphError::InvalidArgument { .. })),
                "{codes:?} should be rejected"
            );
        }
    }

    #[test]
    fn stops_after_error() {
        let mut codes = EdgeCodeReader::new().read("AB-CD EF");
        assert_eq!(codes.next(), Some(Err(GraphError::invalid_argument(
            "expected separator ' ' after edge code 'AB', found '-'"
        ))));
        assert_eq!(codes.next(), None);
    }

    #[test]
    fn write_reproduces_neighbor_order() {
        let codes = "AB AC BG BE CF DA DB DC DF DG GF";
        let graph = Graph::from_strings(GraphType::Directed, "ABCDEFG", codes).unwrap();

        let written = EdgeCodeWriter::new().to_edge_codes(&graph);
        assert_eq!(written, codes);

        let reread = Graph::from_strings(GraphType::Directed, "ABCDEFG", &written).unwrap();
        for u in graph.vertices() {
            assert_eq!(
                reread.neighbors_of(u).collect_vec(),
                graph.neighbors_of(u).collect_vec()
            );
        }

        assert_eq!(
            EdgeCodeWriter::new().separator(';').to_edge_codes(&reread),
            codes.replace(' ', ";")
        );
    }
}
