use serde::Serialize;

/// Who authored a message. Generated diagrams are always assistant replies.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    Ai,
}

/// A chat message carrying a fenced Mermaid diagram.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiagramMessage {
    #[serde(rename = "type")]
    pub role: MessageRole,
    /// The full text a chat front end renders.
    pub content: String,
    /// The raw diagram text placed inside the fence, newline terminated.
    pub diagram: String,
    /// Steps for a flowchart, slices for a pie chart.
    pub item_count: usize,
}

impl DiagramMessage {
    pub(crate) fn new(content: String, diagram: String, item_count: usize) -> Self {
        Self {
            role: MessageRole::Ai,
            content,
            diagram,
            item_count,
        }
    }

    pub fn step_count(&self) -> usize {
        self.item_count
    }

    /// The diagram header line, e.g. `graph TD`.
    pub fn header(&self) -> &str {
        self.diagram.lines().next().unwrap_or_default()
    }

    /// Diagram lines after the header.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.diagram.lines().skip(1)
    }
}

/// Appends a fenced `mermaid` block. `diagram` ends with a newline, so the
/// closing fence follows a blank line.
pub(crate) fn push_mermaid_fence(content: &mut String, diagram: &str) {
    content.push_str("```mermaid\n");
    content.push_str(diagram);
    content.push_str("\n```\n");
}

pub(crate) fn flowchart_message(diagram: String, step_count: usize) -> DiagramMessage {
    let mut content = String::from("\n流程说明：\n\n");
    push_mermaid_fence(&mut content, &diagram);
    content.push_str(&format!("\n这个流程包含 {} 个步骤。\n", step_count));
    DiagramMessage::new(content, diagram, step_count)
}
