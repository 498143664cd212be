use std::fmt::Display;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use seqmerge_diff::diff;
use seqmerge_merge::{MergeConfig, MergeEngine};
use seqmerge_sources::{StringSource, TextFileSource};
use seqmerge_types::{Operation, ScriptStats, Sequence};
use tracing::info;

use crate::cli::*;
use crate::render::{render_text, Inputs, MergeReport, CONFLICT_MARKER};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.policy.as_deref())?;

    match cli.command {
        Command::String(args) => {
            let source = StringSource::new(args.source);
            let first = StringSource::new(args.first);
            let second = StringSource::new(args.second);
            let inputs = Inputs { source: &source, first: &first, second: &second };
            cmd_merge(&inputs, config, cli.format, args.output.as_deref())
        }
        Command::File(args) => {
            let source = open(&args.source)?;
            let first = open(&args.first)?;
            let second = open(&args.second)?;
            let inputs = Inputs { source: &source, first: &first, second: &second };
            cmd_merge(&inputs, config, cli.format, args.output.as_deref())
        }
        Command::Policy => cmd_policy(&config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MergeConfig> {
    match path {
        Some(path) => MergeConfig::load(path)
            .with_context(|| format!("loading conflict policy from {}", path.display())),
        None => Ok(MergeConfig::default()),
    }
}

fn open(path: &str) -> anyhow::Result<TextFileSource> {
    TextFileSource::open(path).with_context(|| format!("loading {path}"))
}

/// Diff both targets against the source and merge the two scripts.
pub fn merge_inputs<'s, S: Sequence + ?Sized>(
    inputs: &Inputs<'s, S>,
    engine: &MergeEngine,
) -> anyhow::Result<Vec<Operation<'s, S>>> {
    let mut first = diff(inputs.source, inputs.first).context("diffing first version")?;
    let mut second = diff(inputs.source, inputs.second).context("diffing second version")?;
    Ok(engine.merge(&mut first, &mut second))
}

fn cmd_merge<S>(
    inputs: &Inputs<'_, S>,
    config: MergeConfig,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()>
where
    S: Sequence + Display + ?Sized,
    S::Item: Display,
{
    let engine = config.into_engine();
    let merged = merge_inputs(inputs, &engine)?;

    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&MergeReport::build(&merged, inputs))?
        }
        OutputFormat::Text if output.is_some() => render_text(&merged, CONFLICT_MARKER),
        OutputFormat::Text => {
            print_header(inputs, &merged);
            let marker = CONFLICT_MARKER.red().bold().to_string();
            render_text(&merged, &marker)
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing result to {}", path.display()))?;
            info!(path = %path.display(), "result written");
            if format == OutputFormat::Text {
                println!("{} Result written to {}", "✓".green().bold(), path.display().to_string().bold());
            }
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn print_header<S>(inputs: &Inputs<'_, S>, merged: &[Operation<'_, S>])
where
    S: Display + ?Sized,
{
    let stats = ScriptStats::of(merged);
    println!("Source: {}", inputs.source.to_string().cyan());
    println!("First:  {}", inputs.first.to_string().cyan());
    println!("Second: {}", inputs.second.to_string().cyan());
    println!(
        "{} equal, {} inserted, {} deleted, {} conflicts",
        stats.equal,
        stats.inserted.to_string().green(),
        stats.deleted.to_string().red(),
        stats.conflicts.to_string().yellow().bold()
    );
    println!("\n{}", "--- RESULT ---".bold());
}

fn cmd_policy(config: &MergeConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run(args: &[&str]) -> anyhow::Result<()> {
        run_command(Cli::try_parse_from(args)?)
    }

    #[test]
    fn merge_inputs_default_policy() {
        let source = StringSource::new("ABC");
        let first = StringSource::new("ABD");
        let second = StringSource::new("ABR");
        let inputs = Inputs { source: &source, first: &first, second: &second };

        let merged = merge_inputs(&inputs, &MergeConfig::default().into_engine()).unwrap();
        // Competing inserts are both kept and flagged.
        assert_eq!(render_text(&merged, "!"), "AB!D!R");
    }

    #[test]
    fn string_merge_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        run(&["seqmerge", "string", "ABCABBA", "CBABAC", "ABCABBAD", "-o", out.to_str().unwrap()]).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "CBABDC");
    }

    #[test]
    fn file_merge_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.txt");
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        let out = dir.path().join("out.txt");
        std::fs::write(&source, "a\nb\nc\n").unwrap();
        std::fs::write(&first, "a\nB\nb\nc\n").unwrap();
        std::fs::write(&second, "a\nb\nc\n").unwrap();

        run(&[
            "seqmerge",
            "file",
            source.to_str().unwrap(),
            first.to_str().unwrap(),
            second.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "a\nB\nb\nc\n");
    }

    #[test]
    fn json_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");
        run(&["seqmerge", "--format", "json", "string", "ABC", "ABD", "ABR", "-o", out.to_str().unwrap()]).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(report["conflicts"], 2);
        assert_eq!(report["result"], "AB[conflict]>D[conflict]>R");
    }

    #[test]
    fn policy_file_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let policy = dir.path().join("policy.toml");
        let out = dir.path().join("out.txt");
        std::fs::write(&policy, "[overrides.insert]\naction = \"accept-second\"\n").unwrap();

        run(&[
            "seqmerge", "--policy", policy.to_str().unwrap(),
            "string", "ABC", "ABD", "ABR", "-o", out.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "ABR");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = run(&[
            "seqmerge", "file",
            missing.to_str().unwrap(), missing.to_str().unwrap(), missing.to_str().unwrap(),
        ])
        .unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }

    #[test]
    fn bad_policy_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let policy = dir.path().join("policy.toml");
        std::fs::write(&policy, "[default]\naction = 3\n").unwrap();
        let err = run(&["seqmerge", "--policy", policy.to_str().unwrap(), "policy"]).unwrap_err();
        assert!(format!("{err:#}").contains("conflict policy"));
    }
}
