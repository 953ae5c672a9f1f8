//! End-to-end tests over the demo script: lex, parse, complete, highlight, and drive an
//! editor session the way an embedding editor would.

use driven_script::editor::{EditorSession, HostError, ScriptHost, analyze};
use driven_script::highlight;
use driven_script::{completion, lexer, parser};

const ORCHARD: &str = include_str!("../demos/orchard.dsc");

#[test]
fn orchard_lexes_cleanly_and_covers_itself() {
    let tokens = lexer::lex(ORCHARD);
    assert!(
        tokens.iter().all(|t| !t.kind.is_invalid()),
        "invalid token in demo script: {:?}",
        tokens.iter().find(|t| t.kind.is_invalid())
    );

    let rebuilt: String = tokens.iter().map(|t| t.lexeme).collect();
    assert_eq!(rebuilt, ORCHARD);
}

#[test]
fn orchard_parses_with_the_expected_structure() {
    let script = parser::parse(ORCHARD).unwrap();
    assert_eq!(script.modules.len(), 1);
    assert_eq!(script.rule_count(), 4);

    let module = &script.modules[0];
    assert_eq!(module.name.as_ref().unwrap().text, "Orchard");

    let names: Vec<_> = module
        .rulesets
        .iter()
        .map(|rs| rs.name.as_ref().unwrap().text.as_str())
        .collect();
    assert_eq!(names, vec!["Baseline", "Escalation"]);

    let quiet_hours = &module.rulesets[0].rules[0];
    assert_eq!(quiet_hours.name.as_ref().unwrap().text, "QuietHours");
    assert_eq!(
        quiet_hours.expression.unwrap().text(ORCHARD),
        "TIME >= 2100 OR TIME < 600"
    );
}

#[test]
fn completion_tracks_context_in_the_demo_script() {
    // Between the two rulesets the cursor sits in the module body.
    let in_module = ORCHARD.find("RULESET [Escalation]").unwrap();
    let labels: Vec<_> = completion::completions(ORCHARD, in_module)
        .iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, vec!["RULESET"]);

    // After the final END everything is closed again.
    let labels: Vec<_> = completion::completions(ORCHARD, ORCHARD.len())
        .iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, vec!["MODULE"]);

    // Inside a rule expression nothing is offered.
    let in_expression = ORCHARD.find("activity_index").unwrap();
    assert!(completion::completions(ORCHARD, in_expression).is_empty());
}

#[test]
fn highlighting_preserves_the_source_text() {
    let rendered = highlight::render_ansi(ORCHARD);

    let mut stripped = String::new();
    let mut rest = rendered.as_str();
    while let Some(start) = rest.find('\x1b') {
        stripped.push_str(&rest[..start]);
        let after = &rest[start..];
        let end = after.find('m').map(|i| i + 1).unwrap_or(after.len());
        rest = &after[end..];
    }
    stripped.push_str(rest);
    assert_eq!(stripped, ORCHARD);
}

#[test]
fn token_stream_snapshot_for_a_minimal_module() {
    let dump: String = lexer::lex("MODULE [Demo]:\nEND\n")
        .iter()
        .map(|t| format!("{} {}..{} {:?}\n", t.kind.name(), t.span.start, t.span.end, t.lexeme))
        .collect();
    insta::assert_snapshot!(dump, @r#"
    keyword 0..6 "MODULE"
    text 6..7 " "
    identifier 7..13 "[Demo]"
    text 13..15 ":\n"
    keyword 15..18 "END"
    text 18..19 "\n"
    "#);
}

#[test]
fn broken_script_reports_positioned_errors() {
    // Drop the final END from the demo script.
    let truncated = ORCHARD.trim_end().strip_suffix("END").unwrap();
    let errors = parser::parse(truncated).unwrap_err();
    assert!(
        errors.iter().any(|e| e.message == "MODULE block is never closed"),
        "{errors:?}"
    );
}

// ============================================================================
// Editor session flows
// ============================================================================

struct RecordingHost;

impl ScriptHost for RecordingHost {
    async fn compile(&self, source: &str) -> Result<(), HostError> {
        // The external engine wants the text verbatim; reject anything we did not analyze.
        if source.is_empty() {
            Err(HostError::Compile("empty script".to_string()))
        } else {
            Ok(())
        }
    }

    async fn save(&self, _source: &str) -> Result<(), HostError> {
        Ok(())
    }
}

#[tokio::test]
async fn editor_session_drives_the_full_surface() {
    let mut session = EditorSession::new(RecordingHost);

    session.set_source(ORCHARD);
    assert!(session.analysis().is_clean());
    assert_eq!(session.source(), ORCHARD);

    assert!(session.compile().await);
    assert_eq!(session.status(), Some("compiled"));
    assert!(session.save().await);
    assert_eq!(session.status(), Some("saved"));
}

#[test]
fn analyze_matches_the_standalone_frontend() {
    let analysis = analyze(ORCHARD);
    assert!(analysis.is_clean());
    assert_eq!(analysis.tokens.len(), lexer::lex(ORCHARD).len());
}
