use crate::{format_summary, load_all_fixtures, run_harness, ExpectedFailures};
use std::path::Path;

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_all_fixtures_pass() {
    let fixtures = load_all_fixtures(&manifest_dir().join("fixtures")).unwrap();
    let expected = ExpectedFailures::load(&manifest_dir().join("expected-failures.toml")).unwrap();

    let (result, reports) = run_harness(&fixtures, &expected);
    let failed = result.total - result.passed;

    assert!(
        result.success(),
        "{}{}",
        reports.join(""),
        format_summary(
            "fixtures",
            result.passed,
            failed,
            result.expected_failures,
            result.regressions
        )
    );
    assert!(
        result.unexpected_passes.is_empty(),
        "listed as expected failures but passing: {:?}",
        result.unexpected_passes
    );
}

#[test]
fn test_fixtures_cover_both_languages() {
    let fixtures = load_all_fixtures(&manifest_dir().join("fixtures")).unwrap();
    assert!(fixtures.iter().any(|(_, f)| f.lang == "en"));
    assert!(fixtures.iter().any(|(_, f)| f.lang.starts_with("pt")));
}

#[test]
fn test_gender_fixture() {
    let fixtures = load_all_fixtures(&manifest_dir().join("fixtures")).unwrap();
    let (_, gender) = fixtures
        .iter()
        .find(|(name, _)| name == "gender.toml")
        .unwrap();

    assert_eq!(gender.title.as_deref(), Some("Gendered nouns and names"));
    let girl = gender.case_by_name("girl-trash").unwrap();
    assert_eq!(girl.rows.len(), 9);
    assert_eq!(
        girl.rewrite.as_deref(),
        Some("The girl said The girl would take the trash out")
    );
}
