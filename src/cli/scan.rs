use anyhow::{Context, Result};

use super::args::Args;
use super::theme::{print_info, print_warning};
use crate::emit::{render_text, JsonReport, SourceInfo, TextOptions};
use crate::error::ExtractError;
use crate::extract::{read_source, StructMemberExtractor};

pub fn run_scan(args: &Args) -> Result<()> {
    let config = args.scan_config().context("Failed to load scan settings")?;
    let header = args.header.display().to_string();

    if args.verbose {
        print_info(&format!(
            "Scanning struct {} in {}",
            config.struct_name, header
        ));
    }

    let source = read_source(&args.header)?;
    let extractor = StructMemberExtractor::new(&config)?;
    let scan = extractor.scan_source(&source)?;
    let table = &scan.table;

    if args.verbose {
        let rules: Vec<_> = extractor
            .rules()
            .kinds()
            .iter()
            .map(|k| k.as_str())
            .collect();
        print_info(&format!("Rules in order: {}", rules.join(", ")));
        print_info(&format!(
            "{} declarations, {} symbols",
            scan.declaration_count,
            table.len()
        ));
        for (kind, count) in table.rule_counts() {
            print_info(&format!("  {}: {} symbols", kind.as_str(), count));
        }
    }

    if scan.is_pattern_miss() {
        let err = ExtractError::NoSymbolsExtracted {
            name: config.struct_name.clone(),
        };
        if args.strict {
            return Err(err.into());
        }
        print_warning(&err.to_string());
    }

    let duplicates = table.duplicates();
    if !duplicates.is_empty() {
        print_warning(&format!(
            "Duplicate member names (first ordinal reported): {}",
            duplicates.join(", ")
        ));
    }

    let lookups = table.lookup(&config.targets);
    let missing: Vec<String> = lookups
        .iter()
        .filter(|l| !l.is_found())
        .map(|l| l.name.clone())
        .collect();

    if args.json {
        let report = JsonReport::new(
            SourceInfo::new(&header, &source),
            extractor.struct_name(),
            table,
            lookups,
        );
        println!("{}", report.to_json());
    } else {
        let options = TextOptions {
            context: args.context,
            head: args.head,
            range: args.range,
            all: args.all,
        };
        print!(
            "{}",
            render_text(extractor.struct_name(), table, &lookups, &options)
        );
    }

    if args.strict && !missing.is_empty() {
        return Err(ExtractError::MissingTargets { names: missing }.into());
    }

    Ok(())
}
