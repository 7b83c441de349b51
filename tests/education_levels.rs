use lumina::{essay::EducationLevel, scoring::ScoringPrompts};
use serde_json::json;

#[test]
fn display_names_match_the_wire_contract() {
    assert_eq!(EducationLevel::MiddleSchool.to_string(), "Middle School");
    assert_eq!(EducationLevel::HighSchool.to_string(), "High School");
    assert_eq!(EducationLevel::Undergraduate.to_string(), "Undergraduate");
    assert_eq!(EducationLevel::Graduate.to_string(), "Graduate/Professional");
}

#[test]
fn serde_uses_display_names() {
    assert_eq!(
        serde_json::to_value(EducationLevel::Graduate).expect("serializes"),
        json!("Graduate/Professional")
    );
    assert_eq!(
        serde_json::from_value::<EducationLevel>(json!("Middle School")).expect("parses"),
        EducationLevel::MiddleSchool
    );
}

#[test]
fn parses_cli_tokens_and_display_names() {
    let parse = |s: &str| s.parse::<EducationLevel>().expect("level parses");

    assert_eq!(parse("middle-school"), EducationLevel::MiddleSchool);
    assert_eq!(parse("high-school"), EducationLevel::HighSchool);
    assert_eq!(parse("High School"), EducationLevel::HighSchool);
    assert_eq!(parse("undergrad"), EducationLevel::Undergraduate);
    assert_eq!(parse("Graduate/Professional"), EducationLevel::Graduate);
    assert_eq!(parse("GRADUATE"), EducationLevel::Graduate);
}

#[test]
fn unknown_levels_are_rejected() {
    let err = "kindergarten".parse::<EducationLevel>().unwrap_err();
    assert!(err.to_string().contains("kindergarten"));
}

#[test]
fn default_level_is_high_school() {
    assert_eq!(EducationLevel::default(), EducationLevel::HighSchool);
}

#[test]
fn every_level_round_trips_through_its_cli_token() {
    for level in EducationLevel::ALL {
        assert_eq!(level.cli_token().parse::<EducationLevel>().expect("round trip"), level);
    }
}

#[test]
fn grading_request_embeds_level_and_essay() {
    let prompts = ScoringPrompts::load();
    let rendered = prompts.grading_request("My essay body.", EducationLevel::Undergraduate);

    assert!(rendered.contains("for a Undergraduate student"));
    assert!(rendered.contains("My essay body."));
    assert!(!rendered.contains("{LEVEL}"));
    assert!(!rendered.contains("{ESSAY}"));
}

#[test]
fn essay_text_is_never_treated_as_a_template() {
    let prompts = ScoringPrompts::load();
    let rendered =
        prompts.grading_request("Mentions {LEVEL} literally.", EducationLevel::HighSchool);

    assert!(rendered.contains("Mentions {LEVEL} literally."));
    assert!(rendered.contains("for a High School student"));
}

#[test]
fn assessor_prompt_states_the_numeric_ranges() {
    let prompts = ScoringPrompts::load();
    let system = prompts.assessor_system();

    assert!(system.contains("between 0 and 100"));
    assert!(system.contains("0 to 10"));
    assert!(system.contains("0 to 1"));
    assert!(system.contains("Flesch-Kincaid"));
}
