pub const TEST_CONFIG_FILE_NAME: &str = "testconfig.txt";

pub const CATEGORY_SEPARATOR: &str = "/";

pub const DEFAULT_TEST_DIRS: &[&str] = &[
    "RegressionTests/Combined",
    "RegressionTests/Feature1SMLevelDecls",
    "RegressionTests/Feature2Stmts",
    "RegressionTests/Feature3Exprs",
    "RegressionTests/Feature4DataTypes",
    "RegressionTests/Integration",
];

pub const DEFAULT_PLATFORM: &str = "x86";
pub const DEFAULT_CONFIGURATION: &str = "Debug";

pub const TEST_RESULTS_DIR_NAME: &str = "TestResult";
pub const DISPLAY_DIFFS_FILE_NAME: &str = "display-diffs.bat";

pub const VAR_PLATFORM: &str = "platform";
pub const VAR_TEST_ROOT: &str = "testroot";
pub const VAR_CONFIGURATION: &str = "configuration";
pub const VAR_TEST_BINARIES: &str = "testbinaries";
