use super::test_utils::names;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use testcase_loader::{BuildSettings, ScanSettings, TestCaseLoader, TestType};

fn fixture_base() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("Tst")
}

fn loader() -> TestCaseLoader {
    let build = BuildSettings::new("x86", "Debug", "/src/P");
    TestCaseLoader::new(ScanSettings::new(fixture_base(), build))
}

#[test]
fn test_default_roots_over_fixture_tree() {
    let (cases, errors) = loader().discover_all();

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(
        names(&cases),
        vec![
            "Combined/Correct/multi",
            "Feature2Stmts/A/B/case1",
            "Feature2Stmts/direct",
        ]
    );
}

#[test]
fn test_fixture_configs() {
    let (cases, _) = loader().discover_all();
    let case1 = cases
        .iter()
        .find(|c| c.name == "Feature2Stmts/A/B/case1")
        .unwrap();
    let root = fixture_base()
        .join("RegressionTests")
        .join("Feature2Stmts")
        .canonicalize()
        .unwrap();

    assert_eq!(case1.category, "Feature2Stmts/A/B");
    assert_eq!(
        case1.test_types().collect::<Vec<_>>(),
        vec![TestType::Pc, TestType::Prt]
    );

    let pc = &case1.configs[&TestType::Pc];
    assert_eq!(pc.arguments, vec!["/generate:C#"]);
    assert_eq!(
        pc.includes,
        vec![
            format!("{}/Common/common.p", root.display()),
            format!("{}/Common/other.p", root.display()),
        ]
    );
    assert_eq!(pc.description.as_deref(), Some("nested statement test"));
    assert_eq!(
        pc.link.as_deref(),
        Some("https://github.com/p-org/P/issues/1")
    );

    let prt = &case1.configs[&TestType::Prt];
    assert_eq!(
        prt.arguments,
        vec!["/src/P/bld/drops/Debug/x86/binaries/prt-tester"]
    );
    assert_eq!(
        prt.deletes,
        vec![format!("{}/A/B/case1/Prt/out.txt", root.display())]
    );
    assert_eq!(prt.description.as_deref(), Some("second"));
}

#[test]
fn test_fixture_direct_case() {
    let (cases, _) = loader().discover_all();
    let direct = cases
        .iter()
        .find(|c| c.name == "Feature2Stmts/direct")
        .unwrap();

    assert_eq!(direct.category, "Feature2Stmts");
    assert_eq!(
        direct.configs[&TestType::Pt].arguments,
        vec!["/platform:x86", "/config:Debug", "$(undefined)"]
    );
}
