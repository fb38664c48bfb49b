use clap::Parser;
use eyre::Result;
use std::io;
use std::path::Path;
use tracing::{info, warn};

mod analysis;
mod cli;
mod output;
mod parser;
mod walk;

use analysis::{TranslationLinker, XmlClassLinker};
use cli::{Cli, Command};
use output::{
    output, should_use_json, write_json, DocsIndex, DocsSummary, TranslationsOutput, TranslationsSummary,
    XmlLinksOutput, XmlLinksSummary,
};
use parser::CsParser;

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let use_json = should_use_json(cli.json);

    match &cli.command {
        Command::Docs { output } => run_docs(&cli.root, output, use_json),
        Command::XmlLinks { index, output } => run_xml_links(&cli.root, index, output, use_json),
        Command::Translations { data, output } => {
            run_translations(&cli.root, data.as_deref(), output, use_json)
        }
    }
}

/// Progress and warnings go to stderr; stdout carries the run summary.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("csdoc=info".parse().expect("valid tracing directive")),
        )
        .init();
}

/// Compute the documentation index (testable without I/O to stdout)
fn compute_docs(root: &Path) -> Result<DocsIndex> {
    let files = walk::collect_cs_files(&[root.to_path_buf()])?;
    info!("Found {} C# files", files.len());

    let parser = CsParser::new()?;
    let mut types = Vec::new();
    for file in &files {
        match parser.parse_file(file) {
            Ok(found) => types.extend(found),
            Err(err) => warn!("Could not read {}: {err}", file.display()),
        }
    }

    Ok(analysis::build_docs_index(types))
}

fn run_docs(root: &Path, output_path: &Path, use_json: bool) -> Result<()> {
    let index = compute_docs(root)?;
    write_json(output_path, &index)?;
    info!("Generated documentation: {}", output_path.display());

    let summary = DocsSummary {
        output: output_path.display().to_string(),
        total_types: index.total_types,
        total_members: index.total_members,
        type_counts: index.type_counts,
    };
    output(&summary, use_json)
}

/// Compute the XML-to-type links from an existing index (testable without
/// I/O to stdout)
fn compute_xml_links(root: &Path, index_path: &Path) -> Result<XmlLinksOutput> {
    let index = analysis::load_index(index_path)?;
    let linker = XmlClassLinker::from_index(&index)?;
    info!("Loaded {} known types from {}", linker.known_classes(), index_path.display());

    let xml_files = walk::collect_xml_files(&[root.to_path_buf()])?;
    info!("Found {} XML files", xml_files.len());

    Ok(linker.link(&xml_files))
}

fn run_xml_links(root: &Path, index_path: &Path, output_path: &Path, use_json: bool) -> Result<()> {
    let result = compute_xml_links(root, index_path)?;
    write_json(output_path, &result)?;

    let summary = XmlLinksSummary {
        output: output_path.display().to_string(),
        total_links: result.total_links,
        unique_classes: result.unique_classes,
        links_by_tag: result
            .tag_groups
            .iter()
            .map(|(tag, links)| (tag.clone(), links.len()))
            .collect(),
    };
    output(&summary, use_json)
}

/// Compute the localization cross-reference (testable without I/O to stdout)
fn compute_translations(root: &Path, data: Option<&Path>) -> Result<TranslationsOutput> {
    let cs_files = walk::collect_cs_files(&[root.to_path_buf()])?;
    info!("Found {} C# files", cs_files.len());

    let xml_root = data.unwrap_or(root);
    let xml_files = walk::collect_xml_files(&[xml_root.to_path_buf()])?;
    info!("Scanning {} XML files for translation keys", xml_files.len());

    let linker = TranslationLinker::new()?;
    let calls = linker.find_translate_calls(&cs_files);
    let xml_keys = linker.collect_xml_keys(&xml_files);
    Ok(linker.link(calls, xml_keys))
}

fn run_translations(root: &Path, data: Option<&Path>, output_path: &Path, use_json: bool) -> Result<()> {
    let result = compute_translations(root, data)?;
    write_json(output_path, &result)?;

    let summary = TranslationsSummary {
        output: output_path.display().to_string(),
        total_translate_calls: result.total_translate_calls,
        unique_translation_keys: result.unique_translation_keys,
        linked_translations: result.linked_translations,
    };
    output(&summary, use_json)
}
