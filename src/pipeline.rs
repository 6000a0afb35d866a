//! Load, compile and press
//!
//! Compiling is pure and independent per subject, so batches run on a rayon
//! pool. Pressing goes through a single `&mut` sink and is strictly serial:
//! each plan is drawn and exported before the next one starts.

use std::path::Path;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::config::PressConfig;
use crate::error::{PressError, Result};
use crate::models::Subject;
use crate::parser::parse_subjects;
use crate::plan::{RenderPlan, RenderPlanAssembler, lower};
use crate::reader::read_table;
use crate::sink::{DocumentSink, apply};
use crate::utils::logging::{log_export, progress};

/// Query selecting every subject
pub const SELECT_ALL: &str = "*";

/// Read and parse every subject of a survey table
pub fn load_subjects(path: &Path) -> Result<Vec<Subject>> {
    let rows = read_table(path)?;
    let subjects = parse_subjects(rows)?;
    info!("Loaded {} subjects from {}", subjects.len(), path.display());
    Ok(subjects)
}

/// Pick subjects by case-insensitive name, or all of them for `*`
#[must_use]
pub fn select_subjects<'a>(subjects: &'a [Subject], query: &str) -> Vec<&'a Subject> {
    let query = query.trim();
    if query == SELECT_ALL {
        return subjects.iter().collect();
    }
    let query = query.to_lowercase();
    subjects
        .iter()
        .filter(|s| s.name().to_lowercase() == query)
        .collect()
}

/// Compile subjects into render plans, in input order
pub fn compile_subjects(subjects: &[&Subject], config: &PressConfig) -> Result<Vec<RenderPlan>> {
    let assembler = RenderPlanAssembler::new(config.layout.clone());
    let start = Instant::now();

    let plans = if config.use_parallel && subjects.len() > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build()
            .map_err(|e| PressError::Task(e.to_string()))?;
        info!(
            "Compiling {} subjects with {} threads",
            subjects.len(),
            pool.current_num_threads()
        );
        pool.install(|| {
            subjects
                .par_iter()
                .map(|subject| assembler.assemble(subject))
                .collect::<Result<Vec<_>>>()
        })?
    } else {
        subjects
            .iter()
            .map(|subject| assembler.assemble(subject))
            .collect::<Result<Vec<_>>>()?
    };

    info!("Compiled {} plans in {:?}", plans.len(), start.elapsed());
    Ok(plans)
}

/// Draw and export plans one after another on a single sink
pub fn press_plans<S: DocumentSink + ?Sized>(
    sink: &mut S,
    plans: &[RenderPlan],
    config: &PressConfig,
) -> Result<()> {
    let pb = progress::create_main_progress_bar(
        plans.len() as u64,
        Some("Pressing subjects"),
        config.show_progress,
    );

    for plan in plans {
        pb.set_message(plan.subject_name().to_string());
        let instructions = lower(plan, config);
        info!(
            "Pressing '{}' ({} instructions)",
            plan.subject_name(),
            instructions.len()
        );
        apply(sink, &instructions)?;
        for (variant, path) in plan.variants().iter().zip(config.export_paths(plan)) {
            log_export(plan.subject_name(), variant.name(), &path);
        }
        pb.inc(1);
    }

    progress::finish_progress_bar(&pb, Some("Pressing complete"));
    Ok(())
}
