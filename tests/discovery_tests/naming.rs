use super::test_utils::TestTree;
use pretty_assertions::assert_eq;
use testcase_loader::{BuildSettings, ScanSettings, TestCaseLoader};

#[test]
fn test_nested_case_name_and_category() {
    let tree = TestTree::new();
    tree.case("RegressionTests/Feature2Stmts/A/B/case1", &["Pc"]);

    let cases = tree.cases(&["RegressionTests/Feature2Stmts"]);
    assert_eq!(cases[0].category, "Feature2Stmts/A/B");
    assert_eq!(cases[0].name, "Feature2Stmts/A/B/case1");
}

#[test]
fn test_direct_child_category_is_root_name() {
    let tree = TestTree::new();
    tree.case("RegressionTests/Feature2Stmts/case1", &["Pc"]);

    let cases = tree.cases(&["RegressionTests/Feature2Stmts"]);
    assert_eq!(cases[0].category, "Feature2Stmts");
    assert_eq!(cases[0].name, "Feature2Stmts/case1");
}

#[test]
fn test_custom_separator() {
    let tree = TestTree::new();
    tree.case("Integration/Correct/Deep/case", &["Prt"]);

    let build = BuildSettings::new("x86", "Debug", "/src/P");
    let settings = ScanSettings::new(tree.base(), build)
        .with_roots(["Integration"])
        .with_separator(".");
    let (cases, errors) = TestCaseLoader::new(settings).discover_all();

    assert!(errors.is_empty());
    assert_eq!(cases[0].category, "Integration.Correct.Deep");
    assert_eq!(cases[0].name, "Integration.Correct.Deep.case");
}

#[test]
fn test_directory_points_at_case() {
    let tree = TestTree::new();
    let dir = tree.case("Root/A/case", &["Pt"]);

    let cases = tree.cases(&["Root"]);
    assert_eq!(cases[0].directory, dir.canonicalize().unwrap());
}

#[test]
fn test_rediscovery_is_stable() {
    let tree = TestTree::new();
    tree.case("Root/A/one", &["Pc"]);
    tree.case("Root/B/two", &["Pt", "Zing"]);
    tree.config("Root/A/one", "Pc", "inc: $(testroot)/x.p\ndsc: one\n");

    let first = tree.cases(&["Root"]);
    let second = tree.cases(&["Root"]);
    assert_eq!(first, second);
}
