use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::discovery::TestCaseDescriptor;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub total_cases: usize,
    pub failures: usize,
    pub cases: &'a [TestCaseDescriptor],
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(
        cases: &[TestCaseDescriptor],
        failures: usize,
        format: OutputFormat,
    ) -> Result<String> {
        let report = Report {
            total_cases: cases.len(),
            failures,
            cases,
        };

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&report)?),
            OutputFormat::Text => Ok(Self::format_text(cases)),
        }
    }

    /// One line per case: `<name> [<category>] <types>`.
    pub fn format_text(cases: &[TestCaseDescriptor]) -> String {
        cases
            .iter()
            .map(|case| {
                let types: Vec<&str> = case.test_types().map(|t| t.as_str()).collect();
                format!("{} [{}] {}", case.name, case.category, types.join(","))
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
