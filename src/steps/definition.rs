/// One node of a directed process graph, together with its outgoing edges.
///
/// This is the canonical input of the flowchart builder. Any custom format is
/// converted into a list of these (see [`IntoSteps`](super::IntoSteps)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: String,
    pub label: String,
    pub next: StepNext,
}

/// The outgoing edges of a step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StepNext {
    /// Terminal step, rendered as an isolated labeled node.
    #[default]
    NoEdge,
    /// Exactly one unconditional edge.
    SingleEdge { target: String },
    /// One labeled edge per branch, in list order.
    ConditionalEdges(Vec<Branch>),
}

/// A conditional outgoing edge. An empty `condition` renders an unlabeled arrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub condition: String,
    pub target: String,
}

/// A single rendered edge, derived from a step on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub source_id: &'a str,
    pub label: &'a str,
    pub condition: Option<&'a str>,
    pub target_id: &'a str,
}

impl StepDescriptor {
    pub fn terminal(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            next: StepNext::NoEdge,
        }
    }

    pub fn to(id: impl Into<String>, label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            next: StepNext::SingleEdge {
                target: target.into(),
            },
        }
    }

    pub fn branching(
        id: impl Into<String>,
        label: impl Into<String>,
        branches: impl IntoIterator<Item = Branch>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            next: StepNext::ConditionalEdges(branches.into_iter().collect()),
        }
    }

    /// Iterates the edges leaving this step in emission order.
    ///
    /// A terminal step yields nothing.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        let (single, branches) = self.next.parts();

        let single_edge = single.map(|target_id| Edge {
            source_id: &self.id,
            label: &self.label,
            condition: None,
            target_id,
        });
        let branch_edges = branches.iter().map(move |branch| Edge {
            source_id: &self.id,
            label: &self.label,
            condition: (!branch.condition.is_empty()).then_some(branch.condition.as_str()),
            target_id: &branch.target,
        });

        single_edge.into_iter().chain(branch_edges)
    }

    /// Number of body lines this step contributes: one per edge, or one node line.
    pub fn line_count(&self) -> usize {
        match &self.next {
            StepNext::ConditionalEdges(branches) => branches.len().max(1),
            _ => 1,
        }
    }
}

impl StepNext {
    /// All referenced target ids, in order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        let (single, branches) = self.parts();
        single
            .into_iter()
            .chain(branches.iter().map(|b| b.target.as_str()))
    }

    fn parts(&self) -> (Option<&str>, &[Branch]) {
        match self {
            StepNext::NoEdge => (None, &[]),
            StepNext::SingleEdge { target } => (Some(target.as_str()), &[]),
            StepNext::ConditionalEdges(branches) => (None, branches.as_slice()),
        }
    }
}

impl Branch {
    pub fn new(condition: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            target: target.into(),
        }
    }

    pub fn unconditional(target: impl Into<String>) -> Self {
        Self::new(String::new(), target)
    }
}
