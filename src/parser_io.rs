extern crate dot;

use std::io;
use std::io::Write;

use crate::parser::Formula;

/// Parse tree of a formula, flattened into pre-order node labels and labelled edges.
pub struct FormulaParseTree {
    labels: Vec<String>,
    edges: Vec<GraphEdge>,
}

type GraphNode = usize;
type GraphEdge = (usize, String, usize);

impl FormulaParseTree {
    pub fn new(src: &Formula) -> Self {
        let mut tree = Self {
            labels: Vec::new(),
            edges: Vec::new(),
        };

        tree.visit(src);
        tree
    }

    pub fn render_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn visit(&mut self, node: &Formula) -> GraphNode {
        let id = self.labels.len();

        let (label, children): (String, Vec<(&str, &Formula)>) = match node {
            Formula::Var(v) => (format!("Var {v}"), vec![]),
            Formula::Not(f) => ("Not".to_string(), vec![("", f.as_ref())]),
            Formula::And(l, r) => ("And".to_string(), vec![("L", l.as_ref()), ("R", r.as_ref())]),
            Formula::Or(l, r) => ("Or".to_string(), vec![("L", l.as_ref()), ("R", r.as_ref())]),
            Formula::Implies(l, r) => (
                "Implies".to_string(),
                vec![("L", l.as_ref()), ("R", r.as_ref())],
            ),
            Formula::Iff(l, r) => ("Iff".to_string(), vec![("L", l.as_ref()), ("R", r.as_ref())]),
        };

        self.labels.push(label);

        for (edge_label, child) in children {
            let child_id = self.visit(child);
            self.edges.push((id, edge_label.to_string(), child_id));
        }

        id
    }
}

impl<'a> dot::Labeller<'a, GraphNode, GraphEdge> for FormulaParseTree {
    fn graph_id(&self) -> dot::Id<'a> {
        dot::Id::new("parse_tree").expect("cannot create Id named 'parse_tree'")
    }

    fn node_id(&self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(format!("n_{}", n))
            .unwrap_or_else(|_| panic!("cannot create Id named 'n_{n}'"))
    }

    fn node_label(&self, n: &GraphNode) -> dot::LabelText<'a> {
        dot::LabelText::label(self.labels[*n].clone())
    }

    fn edge_label(&self, e: &GraphEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.1.clone())
    }
}

impl<'a> dot::GraphWalk<'a, GraphNode, GraphEdge> for FormulaParseTree {
    fn nodes(&self) -> dot::Nodes<'a, GraphNode> {
        (0..self.labels.len()).collect()
    }

    fn edges(&self) -> dot::Edges<'a, GraphEdge> {
        self.edges.clone().into()
    }

    fn source(&self, e: &GraphEdge) -> GraphNode {
        e.0
    }

    fn target(&self, e: &GraphEdge) -> GraphNode {
        e.2
    }
}
