//! Writer for undirected Graphviz DOT documents

use std::io::Write;

use crate::error::Result;
use crate::graph::{DisplayAttrs, Graph};

const KEYWORDS: [&str; 6] = ["graph", "digraph", "node", "edge", "subgraph", "strict"];

/// Quote an identifier unless DOT accepts it bare
///
/// Only `"` is escaped. Other backslash sequences such as `\l` or `\\` are
/// kept verbatim, the way the reader keeps them, so they survive a load and
/// save unchanged.
pub fn quote_id(id: &str) -> String {
    if is_plain_identifier(id) || is_numeral(id) {
        id.to_string()
    } else {
        format!("\"{}\"", id.replace('"', "\\\""))
    }
}

fn is_plain_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id))
}

fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    let mut dots = 0;
    let mut has_digit = false;
    for c in digits.chars() {
        match c {
            '.' => dots += 1,
            c if c.is_ascii_digit() => has_digit = true,
            _ => return false,
        }
    }
    has_digit && dots <= 1
}

fn display_attrs(display: &DisplayAttrs) -> Vec<(&'static str, String)> {
    vec![
        ("color", quote_id(&display.color)),
        ("fontcolor", quote_id(&display.font_color)),
        ("penwidth", display.line_width.to_string()),
    ]
}

fn format_attrs(attrs: &[(&str, String)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Serialize `graph` as DOT into `out`
pub fn write(graph: &Graph, out: &mut impl Write) -> Result<()> {
    match graph.name() {
        Some(name) => writeln!(out, "graph {} {{", quote_id(name))?,
        None => writeln!(out, "graph {{")?,
    }

    for v in graph.vertices() {
        let vertex = graph.vertex(v);
        writeln!(
            out,
            "  {} [{}];",
            quote_id(vertex.id()),
            format_attrs(&display_attrs(vertex.display()))
        )?;
    }

    for e in graph.edges() {
        let edge = graph.edge(e);
        let (u, v) = edge.raw_endpoints();
        let mut attrs = display_attrs(edge.display());
        attrs.insert(2, ("label", quote_id(edge.label())));
        attrs.push(("weight", edge.weight().to_string()));
        writeln!(
            out,
            "  {} -- {} [{}];",
            quote_id(graph.vertex_name(u)),
            quote_id(graph.vertex_name(v)),
            format_attrs(&attrs)
        )?;
    }

    writeln!(out, "}}")?;
    Ok(())
}

/// Serialize `graph` as a DOT string
pub fn to_string(graph: &Graph) -> Result<String> {
    let mut buf = Vec::new();
    write(graph, &mut buf)?;
    String::from_utf8(buf).map_err(|e| crate::error::PathmarkError::Other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dot::parse;
    use crate::graph::EdgeAttrs;

    #[test]
    fn test_quote_id() {
        assert_eq!(quote_id("A"), "A");
        assert_eq!(quote_id("node_1"), "node_1");
        assert_eq!(quote_id("42"), "42");
        assert_eq!(quote_id("-1.5"), "-1.5");
        assert_eq!(quote_id("New York"), "\"New York\"");
        assert_eq!(quote_id("node"), "\"node\"");
        assert_eq!(quote_id(""), "\"\"");
        assert_eq!(quote_id("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_id("1.2.3"), "\"1.2.3\"");
        assert_eq!(quote_id(r"a\b"), r#""a\b""#);
        assert_eq!(quote_id(r"left\l"), r#""left\l""#);
    }

    #[test]
    fn test_backslashes_survive_repeated_round_trips() {
        let source = r#"graph { "a\b" -- c [label="x\ly \\ z", color="say \"hi\""] }"#;
        let first = parse(source).unwrap();
        let second = parse(&to_string(&first).unwrap()).unwrap();
        let third = parse(&to_string(&second).unwrap()).unwrap();

        for graph in [&second, &third] {
            assert!(graph.find_vertex(r"a\b").is_some());
            let edge = graph.edges().next().unwrap();
            assert_eq!(graph.edge(edge).label(), first.edge(edge).label());
            assert_eq!(graph.edge(edge).color(), "say \"hi\"");
        }
        assert_eq!(first.edge(first.edges().next().unwrap()).label(), r"x\ly \\ z");
        assert_eq!(to_string(&second).unwrap(), to_string(&first).unwrap());
    }

    #[test]
    fn test_write_graph() {
        let mut graph = Graph::new();
        graph.set_name(Some("G".to_string()));
        graph.add_vertex("a", DisplayAttrs::default()).unwrap();
        graph.add_vertex("b c", DisplayAttrs::default()).unwrap();
        graph
            .add_edge("a", "b c", 3, EdgeAttrs::default())
            .unwrap();

        let text = to_string(&graph).unwrap();
        assert_eq!(
            text,
            "graph G {\n\
             \x20 a [color=black, fontcolor=black, penwidth=1];\n\
             \x20 \"b c\" [color=black, fontcolor=black, penwidth=1];\n\
             \x20 a -- \"b c\" [color=black, fontcolor=black, label=3, penwidth=1, weight=3];\n\
             }\n"
        );
    }

    #[test]
    fn test_output_reads_back() {
        let source = r#"graph routes {
            "St. Petersburg" -- Moscow [weight=700, label="M10", color=red];
            Moscow -- Tver [weight=180, penwidth=2.5];
        }"#;
        let graph = parse(source).unwrap();
        let reparsed = parse(&to_string(&graph).unwrap()).unwrap();

        assert_eq!(reparsed.name(), Some("routes"));
        assert_eq!(reparsed.vertex_count(), 3);
        let edges: Vec<_> = reparsed.edges().collect();
        assert_eq!(reparsed.edge(edges[0]).label(), "M10");
        assert_eq!(reparsed.edge(edges[0]).color(), "red");
        assert_eq!(reparsed.edge(edges[1]).weight(), 180);
        assert_eq!(reparsed.edge(edges[1]).line_width(), 2.5);
    }
}
