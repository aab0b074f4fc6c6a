use crate::lookup::SymbolTable;
use crate::types::{IndexRange, IndexedSymbol, TargetLookup};

/// Optional sections of the text report
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    /// Previous/next symbol around each found target
    pub context: bool,
    pub head: Option<usize>,
    pub range: Option<IndexRange>,
    pub all: bool,
}

pub fn render_text(
    struct_name: &str,
    table: &SymbolTable,
    lookups: &[TargetLookup],
    options: &TextOptions,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Found {} functions in struct {}\n",
        table.len(),
        struct_name
    ));

    if !lookups.is_empty() {
        output.push_str("\nIndices of requested functions:\n");
        for lookup in lookups {
            match lookup.index {
                Some(index) => output.push_str(&format!("{}: index {}\n", lookup.name, index)),
                None => {
                    output.push_str(&format!("{}: not found\n", lookup.name));
                    for sym in table.similar(&lookup.name) {
                        output.push_str(&format!("  similar: {} (index {})\n", sym.name, sym.index));
                    }
                }
            }
        }
    }

    if options.context {
        output.push_str("\nFunctions around each requested function:\n");
        for lookup in lookups {
            let Some(neighbors) = lookup.index.and_then(|i| table.neighbors(i)) else {
                continue;
            };
            output.push_str(&format!(
                "\n{} at index {}:\n",
                lookup.name, neighbors.current.index
            ));
            if let Some(prev) = neighbors.previous {
                output.push_str(&format!("  [{}] {}\n", prev.index, prev.name));
            }
            output.push_str(&format!(
                "  [{}] {} <---\n",
                neighbors.current.index, neighbors.current.name
            ));
            if let Some(next) = neighbors.next {
                output.push_str(&format!("  [{}] {}\n", next.index, next.name));
            }
        }
    }

    if let Some(count) = options.head {
        let symbols = table.head(count);
        output.push_str(&format!("\nFirst {} functions:\n", symbols.len()));
        push_listing(&mut output, symbols, lookups);
    }

    if let Some(range) = options.range {
        output.push_str(&format!(
            "\nFunctions from index {} to {}:\n",
            range.start, range.end
        ));
        let symbols = table.window(range.start, range.end);
        if symbols.is_empty() {
            output.push_str("(none)\n");
        }
        push_listing(&mut output, symbols, lookups);
    }

    if options.all {
        output.push_str("\nAll functions:\n");
        push_listing(&mut output, table.symbols(), lookups);
    }

    output
}

fn push_listing(output: &mut String, symbols: &[IndexedSymbol], lookups: &[TargetLookup]) {
    for sym in symbols {
        let requested = lookups.iter().any(|l| l.index == Some(sym.index));
        let marker = if requested { " <--- requested" } else { "" };
        output.push_str(&format!("{}: {}{}\n", sym.index, sym.name, marker));
    }
}
