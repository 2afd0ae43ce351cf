//! Common test fixtures for step lists and their JSON form.
use flowtext::prelude::*;

/// The two-step process: `A[开始] --> B`, `B[结束]`.
#[allow(dead_code)]
pub fn create_two_step_flow() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::to("A", "开始", "B"),
        StepDescriptor::terminal("B", "结束"),
    ]
}

/// A request-handling process with one two-way decision.
///
/// Logic: A -> B -> C -> (查询: D | 分析: E) -> F
#[allow(dead_code)]
pub fn create_branching_flow() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::to("A", "开始", "B"),
        StepDescriptor::to("B", "接收请求", "C"),
        StepDescriptor::branching(
            "C",
            "判断类型",
            vec![Branch::new("查询", "D"), Branch::new("分析", "E")],
        ),
        StepDescriptor::to("D", "执行查询", "F"),
        StepDescriptor::to("E", "执行分析", "F"),
        StepDescriptor::terminal("F", "返回结果"),
    ]
}

/// Expected body lines for `create_branching_flow`.
#[allow(dead_code)]
pub const BRANCHING_FLOW_BODY: [&str; 7] = [
    "  A[开始] --> B",
    "  B[接收请求] --> C",
    "  C[判断类型] -->|查询| D",
    "  C[判断类型] -->|分析| E",
    "  D[执行查询] --> F",
    "  E[执行分析] --> F",
    "  F[返回结果]",
];

/// `create_branching_flow` in the JSON wire format.
#[allow(dead_code)]
pub const BRANCHING_FLOW_JSON: &str = r#"[
    {"id": "A", "label": "开始", "next": "B"},
    {"id": "B", "label": "接收请求", "next": "C"},
    {
        "id": "C",
        "label": "判断类型",
        "next": [
            {"condition": "查询", "target": "D"},
            {"condition": "分析", "target": "E"}
        ]
    },
    {"id": "D", "label": "执行查询", "next": "F"},
    {"id": "E", "label": "执行分析", "next": "F"},
    {"id": "F", "label": "返回结果", "next": null}
]"#;

/// Language usage shares that add up to 100.
#[allow(dead_code)]
pub fn create_language_shares() -> Vec<(&'static str, f64)> {
    vec![
        ("Python", 35.0),
        ("JavaScript", 25.0),
        ("TypeScript", 20.0),
        ("Go", 15.0),
        ("其他", 5.0),
    ]
}
