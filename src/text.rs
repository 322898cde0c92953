//! Pipe-delimited text format.
//!
//! ```text
//! 4
//! sam|y|rutgers
//! jane|y|rutgers
//! bob|n
//! kaitlin|y|penn state
//! sam|jane
//! jane|bob
//! ```
//!
//! The first line is the person count `N`. The next `N` lines are person
//! records `name|y|school` or `name|n`. Every remaining non-blank line is an
//! edge `name1|name2`. Fields are trimmed and case-folded on read.
//!
//! Writing emits the count, one record per person in position order, and one
//! line per unique unordered edge. Parallel edges collapse to a single line
//! here only; the graph itself keeps them.

use std::io::{BufRead, Write};

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::PeopleGraph;
use crate::types::{Person, PersonName, School};

/// Build a graph from text records with the default configuration.
pub fn load<I, S>(records: I) -> Result<PeopleGraph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_with(records, &GraphConfig::default())
}

/// Build a graph from text records.
///
/// Any malformed record aborts construction; no partial graph is returned.
pub fn load_with<I, S>(records: I, config: &GraphConfig) -> Result<PeopleGraph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = records.into_iter().enumerate().map(|(i, line)| (i + 1, line));

    let Some((header_line, header)) = lines.next() else {
        return Err(GraphError::malformed(1, "missing person count"));
    };
    let header = header.as_ref().trim();
    let count: usize = header.parse().map_err(|_| {
        GraphError::malformed(header_line, format!("expected person count, found `{header}`"))
    })?;

    let mut graph = PeopleGraph::with_config(config.clone());
    let mut last_line = header_line;

    for read in 0..count {
        let Some((line, record)) = lines.next() else {
            return Err(GraphError::malformed(
                last_line + 1,
                format!("expected {count} person records, found {read}"),
            ));
        };
        last_line = line;
        graph.insert(parse_person(line, record.as_ref())?)?;
    }

    for (line, record) in lines {
        let record = record.as_ref().trim();
        if record.is_empty() {
            continue;
        }
        let (a, b) = parse_edge(line, record)?;
        graph.add_edge(&a, &b).map_err(|e| match e {
            GraphError::UnknownPerson(name) => {
                GraphError::malformed(line, format!("edge references unknown person `{name}`"))
            }
            other => other,
        })?;
    }

    tracing::debug!(
        persons = graph.len(),
        edges = graph.edge_count(),
        "Loaded graph from text"
    );

    Ok(graph)
}

/// Parse a whole document.
pub fn parse(input: &str) -> Result<PeopleGraph> {
    load(input.lines())
}

/// Read a document with the default configuration.
pub fn read(reader: impl BufRead) -> Result<PeopleGraph> {
    read_with(reader, &GraphConfig::default())
}

/// Read a document.
pub fn read_with(reader: impl BufRead, config: &GraphConfig) -> Result<PeopleGraph> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    load_with(lines, config)
}

fn parse_person(line: usize, record: &str) -> Result<Person> {
    let fields: Vec<&str> = record.split('|').map(str::trim).collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(GraphError::malformed(
            line,
            format!("expected `name|y|school` or `name|n`, found {} fields", fields.len()),
        ));
    }

    let name = PersonName::new(fields[0]);
    if name.is_empty() {
        return Err(GraphError::malformed(line, "empty person name"));
    }

    let school_field = fields.get(2).copied().unwrap_or("");
    let school = match fields[1].to_lowercase().as_str() {
        "y" => match School::parse(school_field) {
            Some(school) => Some(school),
            None => return Err(GraphError::malformed(line, "school flag is `y` but no school given")),
        },
        "n" if school_field.is_empty() => None,
        "n" => return Err(GraphError::malformed(line, "school flag is `n` but a school is given")),
        other => {
            return Err(GraphError::malformed(
                line,
                format!("school flag must be `y` or `n`, found `{other}`"),
            ))
        }
    };

    Ok(Person::from_parts(name, school))
}

fn parse_edge(line: usize, record: &str) -> Result<(String, String)> {
    let fields: Vec<&str> = record.split('|').map(str::trim).collect();
    if fields.len() != 2 {
        return Err(GraphError::malformed(
            line,
            format!("expected `name1|name2`, found {} fields", fields.len()),
        ));
    }
    if fields.iter().any(|f| f.is_empty()) {
        return Err(GraphError::malformed(line, "empty name in edge"));
    }
    Ok((fields[0].to_string(), fields[1].to_string()))
}

/// Record lines of a graph, without line terminators.
fn records(graph: &PeopleGraph) -> impl Iterator<Item = String> + '_ {
    let edges = graph.unique_edges().into_iter().filter_map(move |edge| {
        let a = graph.person_at(edge.a)?;
        let b = graph.person_at(edge.b)?;
        Some(format!("{}|{}", a.name(), b.name()))
    });

    std::iter::once(graph.len().to_string())
        .chain(graph.persons().iter().map(ToString::to_string))
        .chain(edges)
}

/// Render a graph in the text format.
pub fn to_text(graph: &PeopleGraph) -> String {
    records(graph).map(|line| line + "\n").collect()
}

/// Write a graph in the text format.
pub fn write(graph: &PeopleGraph, mut out: impl Write) -> Result<()> {
    for line in records(graph) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
