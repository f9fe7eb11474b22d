//! Integration tests for the full lint pipeline: scanning, decomposition,
//! combinator splitting, classification and aggregation.

use seass_lint::{LintSession, Message, lint_sources};

/// Helper to lint sources in order and return the rendered findings
fn lint(sources: &[(&str, &str)]) -> Vec<String> {
    lint_sources(sources.iter().copied())
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn lint_one(css: &str) -> Vec<String> {
    lint(&[("a.css", css)])
}

#[test]
fn test_single_class_rule() {
    assert!(lint_one(".foo { color: red; }").is_empty());
}

#[test]
fn test_id_selector() {
    assert_eq!(
        lint_one("#foo { color: red; }"),
        vec!["a.css:1:1-1:4 - id selector '#' not allowed"]
    );
}

#[test]
fn test_element_selector() {
    assert_eq!(
        lint_one("div { color: red; }"),
        vec!["a.css:1:1-1:3 - element selector not allowed"]
    );
}

#[test]
fn test_attribute_selector_also_reports_element() {
    assert_eq!(
        lint_one("a[href] { color: blue; }"),
        vec![
            "a.css:1:1-1:7 - attribute selector not allowed",
            "a.css:1:1-1:7 - element selector not allowed",
        ]
    );
}

#[test]
fn test_child_combinator_between_classes() {
    assert_eq!(
        lint_one(".foo > .bar { color: red; }"),
        vec!["a.css:1:1-1:11 - child selector '>' not allowed"]
    );
}

#[test]
fn test_classes_in_combinators_are_registered() {
    let found = lint(&[("a.css", ".foo > .bar {}"), ("b.css", ".bar {}")]);
    assert_eq!(
        found,
        vec![
            "a.css:1:1-1:11 - child selector '>' not allowed",
            "a.css:1:1-1:11 - duplicate selector '.bar'",
            "b.css:1:1-1:4 - duplicate selector '.bar'",
        ]
    );
}

#[test]
fn test_duplicate_across_files() {
    let found = lint(&[
        ("a.css", ".shared { color: red; }"),
        ("b.css", ".shared { color: red; }"),
    ]);
    assert_eq!(
        found,
        vec![
            "a.css:1:1-1:7 - duplicate selector '.shared'",
            "b.css:1:1-1:7 - duplicate selector '.shared'",
        ]
    );
}

#[test]
fn test_first_occurrence_alone_is_not_a_duplicate() {
    assert!(lint(&[("a.css", ".shared {}"), ("b.css", ".other {}")]).is_empty());
}

#[test]
fn test_every_occurrence_flagged_once_repeated() {
    let found = lint(&[
        ("a.css", ".x {}"),
        ("b.css", ".x {}"),
        ("c.css", ".x {}"),
    ]);
    assert_eq!(
        found,
        vec![
            "a.css:1:1-1:2 - duplicate selector '.x'",
            "b.css:1:1-1:2 - duplicate selector '.x'",
            "c.css:1:1-1:2 - duplicate selector '.x'",
        ]
    );
}

#[test]
fn test_duplicate_within_one_file() {
    assert_eq!(
        lint_one(".x { top: 0; }\n.x {}"),
        vec![
            "a.css:1:1-1:2 - duplicate selector '.x'",
            "a.css:2:1-2:3 - duplicate selector '.x'",
        ]
    );
}

#[test]
fn test_rule_after_empty_body_is_not_checked() {
    assert!(lint_one(".a {}\n#b { color: red; }").is_empty());
    assert!(lint_one(".a { }\n#b { color: red; }").is_empty());
    assert_eq!(
        lint_one(".a {}\n#b { color: red; }\n#c {}"),
        vec!["a.css:3:1-3:3 - id selector '#' not allowed"]
    );
}

#[test]
fn test_compound_class_is_its_own_name() {
    assert!(lint_one(".a.b { top: 0; }\n.a { top: 0; }\n.b {}").is_empty());
}

#[test]
fn test_all_combinator_kinds() {
    assert_eq!(
        lint_one(".a, .b > .c + .d ~ .e .f {}"),
        vec![
            "a.css:1:1-1:24 - adjacent sibiling selector '+' not allowed",
            "a.css:1:1-1:24 - child selector '>' not allowed",
            "a.css:1:1-1:24 - decendant selector ' ' not allowed",
            "a.css:1:1-1:24 - general sibiling selector '~' not allowed",
            "a.css:1:1-1:24 - selector list not allowed",
        ]
    );
}

#[test]
fn test_descendant_of_elements() {
    assert_eq!(
        lint_one("ul li {}"),
        vec![
            "a.css:1:1-1:5 - decendant selector ' ' not allowed",
            "a.css:1:1-1:5 - element selector not allowed",
        ]
    );
}

#[test]
fn test_pseudo_class_arguments_allowed() {
    assert!(lint_one(".item:nth-child(2n + 1) {}").is_empty());
    assert!(lint_one(":root { --gap: 4px; }").is_empty());
}

#[test]
fn test_element_with_pseudo_class_is_element() {
    assert_eq!(
        lint_one("a:hover {}"),
        vec!["a.css:1:1-1:7 - element selector not allowed"]
    );
}

#[test]
fn test_at_rules_produce_nothing() {
    let css = "\
@charset \"utf-8\";
@import url(\"x.css\");
@font-face { font-family: x; }
@keyframes k { 0% { top: 0 } 100% { top: 1px } }
@page { margin: 0 }
.ok {}
";
    assert!(lint_one(css).is_empty());
}

#[test]
fn test_rules_inside_media_are_checked() {
    assert_eq!(
        lint_one("@media screen {\n  div { color: red; }\n}"),
        vec!["a.css:2:3-2:6 - element selector not allowed"]
    );
}

#[test]
fn test_comment_before_rule() {
    assert_eq!(
        lint_one("/* .x { } */\n.a > .b {}"),
        vec!["a.css:2:1-2:8 - child selector '>' not allowed"]
    );
}

#[test]
fn test_selector_list_over_lines() {
    assert_eq!(
        lint_one(".a,\n.b {}"),
        vec!["a.css:1:1-2:3 - selector list not allowed"]
    );
}

#[test]
fn test_body_strings_do_not_leak() {
    assert_eq!(
        lint_one(".a { content: \"}\"; }\ndiv {}"),
        vec!["a.css:2:1-2:4 - element selector not allowed"]
    );
}

#[test]
fn test_result_is_sorted_and_unique() {
    let found = lint(&[
        ("z.css", "div { top: 0; }\nspan { top: 0; }\n#a {}"),
        ("a.css", "p { top: 0; }\np {}"),
    ]);
    let mut sorted = found.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(found, sorted);
}

#[test]
fn test_idempotent_across_sessions() {
    let sources = [
        ("a.css", ".a > .b { top: 0; }\n.c {}"),
        ("b.css", ".c { top: 0; }\n#d { top: 0; }\ninput[type=text] {}"),
    ];
    assert_eq!(lint(&sources), lint(&sources));
}

#[test]
fn test_session_exposes_structured_findings() {
    let mut session = LintSession::new();
    session.lint_source("a.css", "#main {}");
    let findings = session.finish();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, Message::IdSelector);
    assert_eq!(findings[0].span.file, "a.css");
}

#[test]
fn test_json_shape() {
    let findings = lint_sources([("a.css", "div {}")]);
    let json = serde_json::to_value(&findings).unwrap();
    assert_eq!(json[0]["file"], "a.css");
    assert_eq!(json[0]["start"]["line"], 1);
    assert_eq!(json[0]["end"]["column"], 3);
    assert_eq!(json[0]["message"], "element selector not allowed");
    assert_eq!(
        json[0]["rendered"],
        "a.css:1:1-1:3 - element selector not allowed"
    );
}
