use super::test_utils::{names, TestTree};
use pretty_assertions::assert_eq;
use testcase_loader::{TestConfig, TestType};

#[test]
fn test_only_types_with_config_file_are_recorded() {
    let tree = TestTree::new();
    tree.case("Root/case", &["Pc", "Prt", "Zing"]);
    tree.config("Root/case", "Prt", "arg: -v\n");
    tree.config("Root/case", "Zing", "");

    let cases = tree.cases(&["Root"]);
    let types: Vec<TestType> = cases[0].test_types().collect();

    assert_eq!(types, vec![TestType::Prt, TestType::Zing]);
    assert_eq!(cases[0].configs[&TestType::Zing], TestConfig::default());
}

#[test]
fn test_variables_resolve_against_scan() {
    let tree = TestTree::new();
    tree.case("Root/case", &["Pc"]);
    tree.config(
        "Root/case",
        "Pc",
        "inc: $(testroot)/common.p\n\
         arg: $(Platform)-$(CONFIGURATION)\n\
         arg: $(testbinaries)/tool\n\
         arg: $(Unknown)\n",
    );

    let cases = tree.cases(&["Root"]);
    let root = tree.base().join("Root").canonicalize().unwrap();
    let config = &cases[0].configs[&TestType::Pc];

    assert_eq!(
        config.includes,
        vec![format!("{}/common.p", root.display())]
    );
    assert_eq!(
        config.arguments,
        vec![
            "x64-Release".to_string(),
            "/src/P/bld/drops/Release/x64/binaries/tool".to_string(),
            "$(Unknown)".to_string(),
        ]
    );
}

#[test]
fn test_testroot_differs_per_root() {
    let tree = TestTree::new();
    tree.config("First/case", "Pt", "inc: $(testroot)\n");
    tree.config("Second/case", "Pt", "inc: $(testroot)\n");

    let cases = tree.cases(&["First", "Second"]);
    let first = &cases[0].configs[&TestType::Pt].includes[0];
    let second = &cases[1].configs[&TestType::Pt].includes[0];

    assert!(first.ends_with("First"));
    assert!(second.ends_with("Second"));
}

#[test]
fn test_unknown_keys_do_not_change_config() {
    let tree = TestTree::new();
    tree.config("Root/with", "Pc", "inc: a\nfoo: bar\ndsc: d\n");
    tree.config("Root/without", "Pc", "inc: a\ndsc: d\n");

    let cases = tree.cases(&["Root"]);
    assert_eq!(cases[0].configs, cases[1].configs);
}

#[test]
fn test_stray_file_named_like_type_is_skipped() {
    let tree = TestTree::new();
    tree.config("Root/case", "Pc", "inc: a\n");
    std::fs::write(tree.base().join("Root/case/Pt"), "not a directory").unwrap();

    let cases = tree.cases(&["Root"]);
    assert_eq!(names(&cases), vec!["Root/case"]);
    assert_eq!(
        cases[0].test_types().collect::<Vec<_>>(),
        vec![TestType::Pc]
    );
    assert_eq!(cases[0].configs[&TestType::Pc].includes, vec!["a"]);
}

#[test]
fn test_config_path_that_is_a_directory_is_skipped() {
    let tree = TestTree::new();
    tree.config("Root/case", "Prt", "arg: -v\n");
    std::fs::create_dir_all(tree.base().join("Root/case/Pc/testconfig.txt")).unwrap();

    let cases = tree.cases(&["Root"]);
    assert_eq!(names(&cases), vec!["Root/case"]);
    assert_eq!(
        cases[0].test_types().collect::<Vec<_>>(),
        vec![TestType::Prt]
    );
}

#[test]
fn test_non_utf8_config_still_resolves() {
    let tree = TestTree::new();
    tree.case("Root/case", &["Pc"]);
    std::fs::write(
        tree.base().join("Root/case/Pc/testconfig.txt"),
        b"inc: a\ndsc: caf\xe9 test\n",
    )
    .unwrap();

    let cases = tree.cases(&["Root"]);
    let config = &cases[0].configs[&TestType::Pc];
    assert_eq!(config.includes, vec!["a"]);
    assert_eq!(config.description.as_deref(), Some("caf\u{fffd} test"));
}

#[test]
fn test_config_in_wrong_file_name_is_ignored() {
    let tree = TestTree::new();
    tree.case("Root/case", &["Pc"]);
    std::fs::write(
        tree.base().join("Root/case/Pc/TestConfig.txt.bak"),
        "inc: a\n",
    )
    .unwrap();

    let cases = tree.cases(&["Root"]);
    assert!(cases[0].configs.is_empty());
}
