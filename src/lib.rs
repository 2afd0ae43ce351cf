//! # Flowtext - Mermaid Diagrams for Chat Messages
//!
//! **Flowtext** turns a description of a process (an ordered list of steps and
//! the edges between them) into Mermaid flowchart text, and wraps it into a chat
//! message a diagram-capable front end can render.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Parse steps from JSON with [`parse_steps_json`](steps::parse_steps_json),
//!     chain plain labels with [`LinearSteps`](steps::LinearSteps), or implement
//!     [`IntoSteps`](steps::IntoSteps) for your own structs.
//! 2.  **Configure**: Create a [`FlowchartTextBuilder`](flowchart::FlowchartTextBuilder) and pick
//!     a direction, a policy for references to unknown steps, and label sanitizing.
//! 3.  **Build**: Call `build` to get a [`DiagramMessage`](message::DiagramMessage). The builder is
//!     a pure function of its input and can be shared freely.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowtext::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let steps = parse_steps_json(
//!         r#"[
//!             {"id": "A", "label": "开始", "next": "B"},
//!             {"id": "B", "label": "结束", "next": null}
//!         ]"#,
//!     )?;
//!
//!     let message = FlowchartTextBuilder::new().build(&steps)?;
//!
//!     let body: Vec<&str> = message.body_lines().collect();
//!     assert_eq!(body, ["  A[开始] --> B", "  B[结束]"]);
//!     assert_eq!(message.step_count(), 2);
//!     println!("{}", message.content);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod flowchart;
pub mod label;
pub mod message;
pub mod pie;
pub mod prelude;
pub mod steps;

pub use flowchart::build;
