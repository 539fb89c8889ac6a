/// Test Case Loader
///
/// Discovers regression test cases laid out as a directory tree and resolves
/// each case's per-type `testconfig.txt` into structured data for a runner.
pub mod cli;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod housekeeping;
pub mod logging;
pub mod output;
pub mod settings;

pub use discovery::{TestCaseDescriptor, TestCaseLoader, TestConfig, TestType};
pub use settings::{BuildSettings, ScanSettings};
