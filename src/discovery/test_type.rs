use serde::Serialize;
use std::fmt;

/// The closed set of test kinds a test-case directory can carry. A variant's
/// name is also the name of the subdirectory holding its `testconfig.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TestType {
    Pc,
    Prt,
    Pt,
    Zing,
}

impl TestType {
    pub const ALL: [TestType; 4] = [TestType::Pc, TestType::Prt, TestType::Pt, TestType::Zing];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Pc => "Pc",
            TestType::Prt => "Prt",
            TestType::Pt => "Pt",
            TestType::Zing => "Zing",
        }
    }

    /// Exact, case-sensitive match of a directory name against the variants.
    pub fn from_dir_name(name: &str) -> Option<TestType> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
