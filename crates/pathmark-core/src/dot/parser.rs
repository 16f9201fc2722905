//! Reader for undirected Graphviz DOT documents
//!
//! Supported: `[strict] graph [ID] { ... }` with node, edge and attribute
//! statements. Subgraphs and HTML labels are rejected. Attributes other than
//! `color`, `fontcolor`, `penwidth`, `weight` and `label` are ignored.

use crate::bail_syntax;
use crate::dot::lexer::{Lexer, Token, TokenKind};
use crate::error::{PathmarkError, Result};
use crate::graph::types::{DisplayAttrs, EdgeAttrs};
use crate::graph::{Graph, VertexId};

type AttrList = Vec<(String, String)>;

/// Parse a DOT document into a graph
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse(input: &str) -> Result<Graph> {
    let tokens = Lexer::new(input).tokenize()?;
    let graph = Parser::new(tokens).parse_graph()?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "dot_parsed"
    );
    Ok(graph)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    graph: Graph,
    node_defaults: AttrList,
    edge_defaults: AttrList,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            graph: Graph::new(),
            node_defaults: Vec::new(),
            edge_defaults: Vec::new(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Line of the current token, or of the last one at end of input
    fn line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            bail_syntax!(self.line(), "expected {}", what)
        }
    }

    fn expect_id(&mut self, what: &str) -> Result<String> {
        let line = self.line();
        match self.next() {
            Some(Token {
                kind: TokenKind::Id { text, .. },
                ..
            }) => Ok(text),
            _ => bail_syntax!(line, "expected {}", what),
        }
    }

    fn parse_graph(mut self) -> Result<Graph> {
        if self.peek().is_some_and(|t| t.is_keyword("strict")) {
            self.pos += 1;
        }

        match self.next() {
            Some(t) if t.is_keyword("graph") => {}
            Some(t) if t.is_keyword("digraph") => return Err(PathmarkError::DirectedGraph),
            Some(t) => bail_syntax!(t.line, "expected 'graph'"),
            None => bail_syntax!(1, "empty document"),
        }

        if let Some(TokenKind::Id { .. }) = self.peek_kind() {
            let name = self.expect_id("graph name")?;
            self.graph.set_name(Some(name));
        }

        self.expect(&TokenKind::LBrace, "'{'")?;
        self.parse_statements()?;
        self.expect(&TokenKind::RBrace, "'}'")?;

        if let Some(t) = self.peek() {
            bail_syntax!(t.line, "unexpected content after closing brace");
        }

        Ok(self.graph)
    }

    fn parse_statements(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                None => return Ok(()),
                Some(t) if t.kind == TokenKind::RBrace => return Ok(()),
                Some(t) if t.kind == TokenKind::Semicolon => {
                    self.pos += 1;
                }
                Some(t) if t.kind == TokenKind::LBrace || t.is_keyword("subgraph") => {
                    bail_syntax!(t.line, "subgraphs are not supported")
                }
                Some(_) => self.parse_statement()?,
            }
        }
    }

    fn parse_statement(&mut self) -> Result<()> {
        let Some(token) = self.peek().cloned() else {
            return Ok(());
        };

        for (keyword, is_node) in [("node", Some(true)), ("edge", Some(false)), ("graph", None)] {
            if token.is_keyword(keyword) {
                self.pos += 1;
                let attrs = self.parse_attr_lists()?;
                match is_node {
                    Some(true) => self.node_defaults.extend(attrs),
                    Some(false) => self.edge_defaults.extend(attrs),
                    // Graph-level attributes carry nothing pathmark uses
                    None => {}
                }
                return Ok(());
            }
        }

        let first = self.parse_node_id()?;

        if self.eat(&TokenKind::Equals) {
            self.expect_id("attribute value")?;
            return Ok(());
        }

        let mut chain = vec![first];
        loop {
            match self.peek_kind() {
                Some(TokenKind::UndirectedEdge) => {
                    self.pos += 1;
                    if matches!(self.peek_kind(), Some(TokenKind::LBrace))
                        || self.peek().is_some_and(|t| t.is_keyword("subgraph"))
                    {
                        bail_syntax!(self.line(), "subgraphs are not supported");
                    }
                    chain.push(self.parse_node_id()?);
                }
                Some(TokenKind::DirectedEdge) => return Err(PathmarkError::DirectedGraph),
                _ => break,
            }
        }

        let attrs = self.parse_attr_lists()?;
        if chain.len() == 1 {
            self.node_statement(&chain[0], &attrs)
        } else {
            self.edge_statement(&chain, &attrs, token.line)
        }
    }

    /// Node identifier with an optional (ignored) port
    fn parse_node_id(&mut self) -> Result<String> {
        let id = self.expect_id("node identifier")?;
        let mut ports = 0;
        while ports < 2 && self.eat(&TokenKind::Colon) {
            self.expect_id("port")?;
            ports += 1;
        }
        Ok(id)
    }

    fn parse_attr_lists(&mut self) -> Result<AttrList> {
        let mut attrs = Vec::new();
        while self.eat(&TokenKind::LBracket) {
            loop {
                if self.eat(&TokenKind::RBracket) {
                    break;
                }
                let key = self.expect_id("attribute name")?;
                self.expect(&TokenKind::Equals, "'=' after attribute name")?;
                let value = self.expect_id("attribute value")?;
                attrs.push((key, value));
                if !self.eat(&TokenKind::Comma) {
                    self.eat(&TokenKind::Semicolon);
                }
            }
        }
        Ok(attrs)
    }

    fn ensure_vertex(&mut self, id: &str) -> Result<VertexId> {
        if let Some(v) = self.graph.find_vertex(id) {
            return Ok(v);
        }
        let mut display = DisplayAttrs::default();
        apply_display(&mut display, &self.node_defaults)?;
        self.graph.add_vertex(id, display)
    }

    fn node_statement(&mut self, id: &str, attrs: &AttrList) -> Result<()> {
        let v = self.ensure_vertex(id)?;
        apply_display(self.graph.vertex_mut(v).display_mut(), attrs)
    }

    fn edge_statement(&mut self, chain: &[String], attrs: &AttrList, line: usize) -> Result<()> {
        for id in chain {
            self.ensure_vertex(id)?;
        }

        let merged: AttrList = self
            .edge_defaults
            .iter()
            .chain(attrs.iter())
            .cloned()
            .collect();

        let mut weight = 0i64;
        let mut edge_attrs = EdgeAttrs::default();
        apply_display(&mut edge_attrs.display, &merged)?;
        for (key, value) in &merged {
            match key.as_str() {
                "weight" => {
                    weight = value
                        .trim()
                        .parse()
                        .map_err(|_| PathmarkError::invalid_attribute("weight", value))?;
                }
                "label" => edge_attrs.label = Some(value.clone()),
                _ => {}
            }
        }

        for pair in chain.windows(2) {
            if weight < 0 {
                tracing::debug!(line, "negative weight in input");
                return Err(PathmarkError::NegativeWeight {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    weight,
                });
            }
            self.graph
                .add_edge(&pair[0], &pair[1], weight, edge_attrs.clone())?;
        }
        Ok(())
    }
}

fn apply_display(display: &mut DisplayAttrs, attrs: &AttrList) -> Result<()> {
    for (key, value) in attrs {
        match key.as_str() {
            "color" => display.color.clone_from(value),
            "fontcolor" => display.font_color.clone_from(value),
            "penwidth" => {
                display.line_width = value
                    .trim()
                    .parse()
                    .map_err(|_| PathmarkError::invalid_attribute("penwidth", value))?;
            }
            _ => {}
        }
    }
    Ok(())
}
