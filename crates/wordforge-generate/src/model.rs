use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where run artifacts (wordlist, report) are written.
    pub out_dir: PathBuf,
    /// Run identifier; a fresh UUID is used when unset.
    pub run_id: Option<String>,
    /// Optional global cap on the candidate list length. The default is
    /// unbounded, matching the catalog's own combinatorial bound.
    pub cap: Option<usize>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            run_id: None,
            cap: None,
        }
    }
}

/// Structured generation issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationIssue {
    pub level: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation_id: Option<String>,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub templates_total: u64,
    pub templates_rendered: u64,
    pub base_count: u64,
    pub candidate_count: u64,
    pub capped: bool,
    pub template_skips: BTreeMap<String, u64>,
    pub mutation_usage: BTreeMap<String, u64>,
    pub duration_ms: u64,
    pub bytes_written: u64,
    pub warnings_by_code: BTreeMap<String, u64>,
    pub warnings: Vec<GenerationIssue>,
}

impl GenerationReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            templates_total: 0,
            templates_rendered: 0,
            base_count: 0,
            candidate_count: 0,
            capped: false,
            template_skips: BTreeMap::new(),
            mutation_usage: BTreeMap::new(),
            duration_ms: 0,
            bytes_written: 0,
            warnings_by_code: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    pub fn record_template_skip(&mut self, code: &str) {
        *self.template_skips.entry(code.to_string()).or_insert(0) += 1;
    }

    pub fn record_mutation_usage(&mut self, id: &str) {
        *self.mutation_usage.entry(id.to_string()).or_insert(0) += 1;
    }

    pub fn record_warning(&mut self, issue: GenerationIssue) {
        *self.warnings_by_code.entry(issue.code.clone()).or_insert(0) += 1;
        self.warnings.push(issue);
    }
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub wordlist_path: PathBuf,
    pub report: GenerationReport,
}
