use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use afterlife_press::error::util::ensure_directory;
use afterlife_press::pipeline::SELECT_ALL;
use afterlife_press::utils::logging::console;
use afterlife_press::{
    PressConfig, ScriptSink, compile_subjects, load_subjects_async, press_plans, select_subjects,
};
use anyhow::{Context, bail};
use log::info;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// Read one trimmed line from stdin after printing a prompt to stderr
fn prompt(input: &mut impl BufRead, message: &str) -> anyhow::Result<String> {
    eprint!("{message}");
    io::stderr().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed while waiting for an answer");
    }
    Ok(line.trim().to_string())
}

/// Prompt for a value, keeping `default` when the answer is blank
fn prompt_or_default(
    input: &mut impl BufRead,
    label: &str,
    default: &str,
) -> anyhow::Result<String> {
    let answer = prompt(input, &format!("   {label:<14}(default: '{default}'): "))?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}

/// Prompt until the answer names an existing file
fn prompt_table_path(input: &mut impl BufRead, default: &Path) -> anyhow::Result<PathBuf> {
    let mut path = default.to_path_buf();
    while !path.is_file() {
        let answer = prompt(
            input,
            &format!("   path to table file (default: '{}'): ", default.display()),
        )?;
        path = if answer.is_empty() {
            default.to_path_buf()
        } else {
            PathBuf::from(answer)
        };
    }
    Ok(path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let defaults = PressConfig::default();

    eprintln!("afterlife: leave any of the following blank for their defaults");
    let table_path = prompt_table_path(&mut input, &defaults.table_path)?;
    let prefix = prompt_or_default(&mut input, "export prefix", &defaults.export.prefix)?;
    let suffix = prompt_or_default(&mut input, "export suffix", &defaults.export.suffix)?;
    let layer = prompt_or_default(&mut input, "target layer", &defaults.target_layer)?;

    let config = PressConfig::builder()
        .table_path(&table_path)
        .export_prefix(prefix)
        .export_suffix(suffix)
        .target_layer(layer)
        .build();
    info!("{config}");

    let subjects = load_subjects_async(config.table_path.clone())
        .await
        .with_context(|| format!("Failed to load subjects from {}", table_path.display()))?;
    eprintln!("afterlife: loaded {} entries", subjects.len());

    let names = console::subject_names(&subjects);
    console::print_available_subjects(&names);

    let selected = loop {
        let query = prompt(&mut input, "> ")?.to_lowercase();
        if query == SELECT_ALL || names.contains(&query) {
            break select_subjects(&subjects, &query);
        }
    };

    let plans = compile_subjects(&selected, &config).context("Failed to compile subjects")?;
    for plan in &plans {
        info!("{}", console::plan_summary(plan));
    }

    let script_path = config.export.script_path();
    ensure_directory(&config.export.output_dir)?;
    let file = File::create(&script_path)
        .with_context(|| format!("Failed to create script {}", script_path.display()))?;
    let mut sink = ScriptSink::with_header(BufWriter::new(file), &config.target_layer)?;

    let start = Instant::now();
    press_plans(&mut sink, &plans, &config).context("Failed to press subjects")?;
    let written = sink.written();
    sink.finish()?;

    info!(
        "Wrote {written} instructions to {} in {:?}",
        script_path.display(),
        start.elapsed()
    );
    eprintln!("afterlife: done");
    Ok(())
}
