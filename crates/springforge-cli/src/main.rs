mod writer;

use anyhow::Result;
use clap::Parser;
use console::{pad_str, style, Alignment};
use springforge_codegen::{generate, ArtifactKind, Output};
use springforge_core::Document;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "springforge")]
#[command(about = "Generate layered Spring/JPA sources from a schema document")]
#[command(version)]
struct Cli {
    /// Path to the schema document
    #[arg(short, long, default_value = "data.json")]
    input: PathBuf,

    /// Print every generated entity class body after the run
    #[arg(long)]
    display: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    banner("Loading the schema document...");
    let doc = Document::load(&cli.input)?;

    banner("Schema loaded successfully. Starting class generation...");
    let output = generate(&doc);

    for failure in &output.failures {
        println!(
            "  {} {}",
            style("✗").red().bold(),
            style(&failure.error).red()
        );
    }

    print_counts(&doc, &output);

    let report = writer::persist(&output.artifacts, Path::new(&doc.config.output_dir));
    for (path, err) in &report.failures {
        println!(
            "  {} {}",
            style("✗").red().bold(),
            style(format!("could not write {}: {err}", path.display())).red()
        );
    }

    if cli.display || doc.config.display_generated_classes {
        banner("Displaying generated classes:");
        for class in &output.classes {
            println!("{}", class.body);
            println!("{}", "=".repeat(80));
            println!();
        }
    } else {
        banner("Generation completed!");
        println!(
            "  {}",
            style(format!(
                "{} files written. Go to the '{}' directory to see the generated sources.",
                report.written, doc.config.output_dir
            ))
            .green()
        );
    }

    Ok(())
}

fn banner(text: &str) {
    println!();
    println!("{}", "=".repeat(80));
    println!("{}", pad_str(text, 80, Alignment::Center, None));
    println!("{}", "=".repeat(80));
}

fn print_counts(doc: &Document, output: &Output) {
    println!();
    count_line(output.classes.len(), "model classes");

    if !doc.interface_classes.is_empty() {
        count_line(output.count(ArtifactKind::Interface), "interfaces");
    }
    if !doc.embeddable_classes.is_empty() {
        count_line(output.count(ArtifactKind::Embeddable), "embeddable classes");
    }
    if !doc.enum_classes.is_empty() {
        count_line(output.count(ArtifactKind::Enum), "enums");
    }

    count_line(output.count(ArtifactKind::Repository), "repositories");
    count_line(output.count(ArtifactKind::Service), "services");
    count_line(output.count(ArtifactKind::Controller), "controllers");
    count_line(output.count(ArtifactKind::Environment), "configuration files");
}

fn count_line(count: usize, label: &str) {
    println!(
        "  {} {}",
        style("✓").green().bold(),
        style(format!("{count} {label} generated")).dim()
    );
}
