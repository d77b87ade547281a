use agent_trace_extractor::parser::{
    parse_response_str, read_response_body, AgentId, EntryKind, TraceSummary,
};
use agent_trace_extractor::utils::error::ParseError;
use std::io::Write;
use tempfile::NamedTempFile;

const BODY: &str = r#"{
  "responses": [
    "Function Call - planning_agent:\n{ 'args': {'request': 'Write a post about meditation'},\n  'id': 'adk-1',\n  'name': 'planning_agent'}",
    "Function Response:\n{ 'id': 'adk-1',\n  'name': 'planning_agent',\n  'response': { 'agent_plan': '{\"content_format\": \"LinkedIn post\"}'},\n  'scheduling': None,\n  'will_continue': None}",
    "Feeling stressed? Meditation can help."
  ],
  "session_id": "session_id_123",
  "user_id": "test_user_123"
}"#;

#[test]
fn test_parse_full_body() {
    let body = parse_response_str(BODY).unwrap();

    assert_eq!(body.responses.len(), 3);
    assert_eq!(body.session_id.as_deref(), Some("session_id_123"));
    assert!(body.responses[1].contains("'agent_plan': '{\"content_format\""));
}

#[test]
fn test_read_body_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BODY.as_bytes()).unwrap();

    let body = read_response_body(file.path()).unwrap();
    assert_eq!(body.user_id.as_deref(), Some("test_user_123"));
}

#[test]
fn test_read_missing_file() {
    let result = read_response_body("/no/such/body.json");
    assert!(matches!(result, Err(ParseError::ReadFailed(_))));
}

#[test]
fn test_invalid_json() {
    let result = parse_response_str("{ responses: ");
    assert!(matches!(result, Err(ParseError::JsonError(_))));
}

#[test]
fn test_empty_responses_allowed() {
    let body = parse_response_str(r#"{"responses": []}"#).unwrap();
    assert!(body.responses.is_empty());
}

#[test]
fn test_entry_kinds_in_body() {
    let body = parse_response_str(BODY).unwrap();
    let kinds: Vec<EntryKind> = body.responses.iter().map(|e| EntryKind::of(e)).collect();

    assert_eq!(
        kinds,
        vec![
            EntryKind::FunctionCall {
                agent: AgentId::Planning
            },
            EntryKind::FunctionResponse {
                agent: Some(AgentId::Planning)
            },
            EntryKind::FinalText,
        ]
    );
}

#[test]
fn test_summary_of_body() {
    let body = parse_response_str(BODY).unwrap();
    let summary = TraceSummary::from_entries(&body.responses);

    assert_eq!(summary.total_entries, 3);
    assert_eq!(summary.responses_by_agent.get("planning_agent"), Some(&1));
    assert!(summary.pending_calls().is_empty());
}

#[test]
fn test_unknown_agent_counted_by_name() {
    let entries = ["Function Call - review_agent:\n{}"];
    let summary = TraceSummary::from_entries(&entries);

    assert_eq!(summary.calls_by_agent.get("review_agent"), Some(&1));
}
