//! Console output for the operator
//!
//! Everything here goes to stderr so stdout stays free for piping.

use itertools::Itertools;

use crate::models::Subject;
use crate::plan::RenderPlan;

/// Subject names as the operator types them: lowercased and sorted
#[must_use]
pub fn subject_names(subjects: &[Subject]) -> Vec<String> {
    subjects
        .iter()
        .map(|s| s.name().to_lowercase())
        .sorted()
        .collect()
}

/// Print the subjects a query may select
pub fn print_available_subjects(names: &[String]) {
    eprintln!(
        "\ndata available for:\n{}\n",
        names.iter().map(|n| format!("   {n}")).join("\n")
    );
}

/// One-line description of a compiled plan
#[must_use]
pub fn plan_summary(plan: &RenderPlan) -> String {
    let visible_makeup = plan
        .pairs()
        .iter()
        .flat_map(|p| [p.negative_makeup(), p.positive_makeup()])
        .map(|m| m.visible_count())
        .sum::<usize>();
    format!(
        "{}: {} pairs, {} visible makeup arrows, {} exports",
        plan.subject_name(),
        plan.pairs().len(),
        visible_makeup,
        plan.variants().len()
    )
}
