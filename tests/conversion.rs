//! Tests for converting JSON and plain label lists into steps.
mod common;
use common::*;
use flowtext::prelude::*;

#[test]
fn test_json_steps_match_hand_built_steps() {
    let steps = parse_steps_json(BRANCHING_FLOW_JSON).expect("Failed to parse");
    assert_eq!(steps, create_branching_flow());
}

#[test]
fn test_json_to_message_end_to_end() {
    let steps = parse_steps_json(BRANCHING_FLOW_JSON).expect("Failed to parse");
    let message = flowtext::build(&steps).expect("Failed to build");

    let body: Vec<&str> = message.body_lines().collect();
    assert_eq!(body, BRANCHING_FLOW_BODY);
    assert!(message.content.contains("这个流程包含 6 个步骤。"));
}

#[test]
fn test_falsy_next_values_mean_terminal() {
    let json = r#"[
        {"id": "A", "label": "无字段"},
        {"id": "B", "label": "空值", "next": null},
        {"id": "C", "label": "空串", "next": ""},
        {"id": "D", "label": "空列表", "next": []}
    ]"#;

    let steps = parse_steps_json(json).expect("Failed to parse");
    assert_eq!(steps.len(), 4);
    for step in &steps {
        assert_eq!(step.next, StepNext::NoEdge, "step {} should be terminal", step.id);
    }
}

#[test]
fn test_missing_or_null_condition_is_empty() {
    let json = r#"[
        {"id": "C", "label": "判断", "next": [
            {"target": "D"},
            {"condition": null, "target": "E"},
            {"condition": "其他", "target": "F"}
        ]}
    ]"#;

    let steps = parse_steps_json(json).expect("Failed to parse");
    assert_eq!(
        steps[0].next,
        StepNext::ConditionalEdges(vec![
            Branch::unconditional("D"),
            Branch::unconditional("E"),
            Branch::new("其他", "F"),
        ])
    );
}

#[test]
fn test_missing_fields_report_position_and_name() {
    let cases = [
        (r#"[{"id": "A", "label": "a"}, {"label": "b"}]"#, 1, "id"),
        (r#"[{"id": "A"}]"#, 0, "label"),
        (
            r#"[{"id": "A", "label": "a", "next": [{"condition": "x", "target": "A"}, {"condition": "y"}]}]"#,
            0,
            "next[1].target",
        ),
    ];

    for (json, expected_index, expected_field) in cases {
        match parse_steps_json(json) {
            Err(StepConversionError::MissingField { index, field }) => {
                assert_eq!(index, expected_index);
                assert_eq!(field, expected_field);
            }
            other => panic!("Expected MissingField for {json}, got {:?}", other),
        }
    }
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let broken = parse_steps_json("[{\"id\": \"A\",");
    assert!(matches!(broken, Err(StepConversionError::JsonParseError(_))));

    let wrong_next_type = parse_steps_json(r#"[{"id": "A", "label": "a", "next": 5}]"#);
    assert!(matches!(
        wrong_next_type,
        Err(StepConversionError::JsonParseError(_))
    ));
}

#[test]
fn test_linear_steps_chain_in_order() {
    let steps = LinearSteps(vec![
        "收集信息".to_string(),
        "   ".to_string(),
        "分析原因".to_string(),
        "生成报告".to_string(),
    ])
    .into_steps()
    .expect("Failed to convert");

    assert_eq!(
        steps,
        vec![
            StepDescriptor::to("s0", "收集信息", "s1"),
            StepDescriptor::to("s1", "分析原因", "s2"),
            StepDescriptor::terminal("s2", "生成报告"),
        ]
    );

    let message = flowtext::build(&steps).expect("Failed to build");
    let body: Vec<&str> = message.body_lines().collect();
    assert_eq!(
        body,
        ["  s0[收集信息] --> s1", "  s1[分析原因] --> s2", "  s2[生成报告]"]
    );
}

#[test]
fn test_linear_steps_empty_input() {
    let steps = LinearSteps(Vec::new()).into_steps().expect("Failed to convert");
    assert!(steps.is_empty());
}

#[test]
fn test_vec_of_steps_converts_to_itself() {
    let steps = create_two_step_flow();
    assert_eq!(steps.clone().into_steps().expect("Infallible"), steps);
}

struct Checklist(Vec<(&'static str, &'static str)>);

impl IntoSteps for Checklist {
    fn into_steps(self) -> std::result::Result<Vec<StepDescriptor>, StepConversionError> {
        if self.0.iter().any(|(id, _)| id.is_empty()) {
            return Err(StepConversionError::ValidationError(
                "checklist entry without an id".to_string(),
            ));
        }
        Ok(self
            .0
            .into_iter()
            .map(|(id, label)| StepDescriptor::terminal(id, label))
            .collect())
    }
}

#[test]
fn test_custom_conversion_reports_validation_error() {
    let result = Checklist(vec![("A", "检查"), ("", "遗漏")]).into_steps();
    match result {
        Err(StepConversionError::ValidationError(message)) => {
            assert!(message.contains("without an id"))
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }

    let steps = Checklist(vec![("A", "检查")]).into_steps().expect("Valid checklist");
    assert_eq!(steps, vec![StepDescriptor::terminal("A", "检查")]);
}
