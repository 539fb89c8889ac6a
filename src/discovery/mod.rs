pub mod category;
pub mod config;
pub mod descriptor;
pub mod loader;
pub mod test_type;
pub mod variables;

pub use category::{derive_category, qualified_category};
pub use config::{load_test_config, parse_test_config, TestConfig};
pub use descriptor::{ScanRoot, TestCaseDescriptor};
pub use loader::{is_test_case_dir, TestCaseLoader};
pub use test_type::TestType;
pub use variables::{substitute, VariableMap};
