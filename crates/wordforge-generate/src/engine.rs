use std::any::Any;
use std::collections::HashSet;
use std::time::Instant;

use tracing::{info, trace, warn};

use wordforge_core::Profile;

use crate::catalog::{render, Rendered, CATALOG};
use crate::errors::GenerationError;
use crate::fields::{derive, FieldSet};
use crate::model::{GenerateOptions, GenerationIssue, GenerationReport, GenerationResult};
use crate::mutate::MutationRegistry;
use crate::output::wordlist::write_wordlist;

/// Evaluate the catalog against a field set, in catalog order.
///
/// Defective or absent-field templates are skipped silently; duplicates keep
/// their first-discovery position. The result never contains an empty string.
pub fn build_base(fields: &FieldSet) -> Vec<String> {
    let mut report = GenerationReport::new(String::new());
    build_base_traced(fields, &mut report)
}

pub(crate) fn build_base_traced(fields: &FieldSet, report: &mut GenerationReport) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut bases = Vec::new();

    report.templates_total = CATALOG.len() as u64;
    for pattern in CATALOG {
        match render(pattern, fields) {
            Rendered::Text(candidate) => {
                report.templates_rendered += 1;
                if seen.insert(candidate.clone()) {
                    bases.push(candidate);
                }
            }
            Rendered::Skipped(reason) => {
                report.record_template_skip(reason.code());
                trace!(template = pattern, reason = reason.code(), "template skipped");
            }
        }
    }

    report.base_count = bases.len() as u64;
    bases
}

/// Apply the whole mutation pipeline to one base candidate.
///
/// Deduplicated per base, pipeline order preserved, identity first. A failing
/// mutation is dropped for this candidate only.
pub fn mutate_candidate(base: &str, registry: &MutationRegistry) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut variants = Vec::new();

    for mutation in registry.iter() {
        match mutation.apply(base) {
            Ok(variant) => {
                if !variant.is_empty() && seen.insert(variant.clone()) {
                    variants.push(variant);
                }
            }
            Err(inner) => {
                let err = GenerationError::Mutation {
                    id: mutation.id(),
                    message: inner.to_string(),
                };
                warn!(mutation = mutation.id(), error = %err, "mutation skipped");
            }
        }
    }

    variants
}

/// Outcome of the global merge, with per-mutation accounting.
#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    pub candidates: Vec<String>,
    pub capped: bool,
}

/// Fold every (base, variant) pair into one globally deduplicated list.
///
/// Order is first-discovery order over (base order, mutation order); the
/// optional cap bounds the list without reordering it.
pub fn aggregate(bases: &[String], registry: &MutationRegistry, cap: Option<usize>) -> Vec<String> {
    let mut report = GenerationReport::new(String::new());
    aggregate_traced(bases, registry, cap, &mut report).candidates
}

pub(crate) fn aggregate_traced(
    bases: &[String],
    registry: &MutationRegistry,
    cap: Option<usize>,
    report: &mut GenerationReport,
) -> AggregateOutcome {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    let mut capped = false;

    'bases: for base in bases {
        let mut base_seen = HashSet::new();
        for mutation in registry.iter() {
            let variant = match mutation.apply(base) {
                Ok(variant) => variant,
                Err(inner) => {
                    let err = GenerationError::Mutation {
                        id: mutation.id(),
                        message: inner.to_string(),
                    };
                    warn!(mutation = mutation.id(), error = %err, "mutation skipped");
                    report.record_warning(GenerationIssue {
                        level: "warning".to_string(),
                        code: "mutation_failed".to_string(),
                        message: inner.to_string(),
                        template: None,
                        mutation_id: Some(mutation.id().to_string()),
                    });
                    continue;
                }
            };
            if variant.is_empty() || !base_seen.insert(variant.clone()) {
                continue;
            }
            if seen.insert(variant.clone()) {
                if cap.is_some_and(|cap| candidates.len() >= cap) {
                    capped = true;
                    break 'bases;
                }
                report.record_mutation_usage(mutation.id());
                candidates.push(variant);
            }
        }
    }

    report.candidate_count = candidates.len() as u64;
    report.capped = capped;
    AggregateOutcome { candidates, capped }
}

/// Entry point for generating a candidate wordlist from a profile.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline and write `wordlist.txt` plus
    /// `generation_report.json` into the configured output directory.
    ///
    /// The profile is assumed already normalized and validated. No partial
    /// failure escapes the pipeline; a panic is converted into a failed
    /// report instead of unwinding into the caller.
    pub fn run(&self, profile: &Profile) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = self
            .options
            .run_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        std::fs::create_dir_all(&self.options.out_dir)?;

        let mut report = GenerationReport::new(run_id.clone());
        let cap = self.options.cap;

        info!(run_id = %run_id, templates = CATALOG.len(), cap = ?cap, "generation started");

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(
            || -> Result<Vec<String>, GenerationError> {
                let fields = derive(profile);
                let registry = MutationRegistry::new();
                let bases = build_base_traced(&fields, &mut report);
                let outcome = aggregate_traced(&bases, &registry, cap, &mut report);
                Ok(outcome.candidates)
            },
        ));

        let wordlist_path = self.options.out_dir.join("wordlist.txt");
        let report_path = self.options.out_dir.join("generation_report.json");

        match outcome {
            Ok(Ok(candidates)) => {
                report.bytes_written = write_wordlist(&wordlist_path, &candidates)?;
                report.duration_ms = start.elapsed().as_millis() as u64;
                std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
                info!(
                    run_id = %run_id,
                    base_count = report.base_count,
                    candidate_count = report.candidate_count,
                    duration_ms = report.duration_ms,
                    bytes_written = report.bytes_written,
                    "generation completed"
                );
                Ok(GenerationResult {
                    wordlist_path,
                    report,
                })
            }
            Ok(Err(err)) => {
                report.duration_ms = start.elapsed().as_millis() as u64;
                std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
                warn!(run_id = %run_id, error = %err, "generation failed");
                Err(err)
            }
            Err(panic) => {
                report.duration_ms = start.elapsed().as_millis() as u64;
                report.record_warning(GenerationIssue {
                    level: "error".to_string(),
                    code: "generation_panicked".to_string(),
                    message: panic_message(panic),
                    template: None,
                    mutation_id: None,
                });
                std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
                warn!(run_id = %run_id, "generation panicked");
                Err(GenerationError::Failed(Box::new(report)))
            }
        }
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during generation".to_string()
    }
}
