use comfy_table::{ContentArrangement, Table, presets};

use crate::config::OutputFormat;
use crate::pager::{Link, Pager};

const NULL_DISPLAY: &str = "—";
const ELLIPSIS: &str = "…";
const DEFAULT_MAX_CELL_WIDTH: usize = 140;
const DEFAULT_MAX_OUTPUT_CHARS: usize = 25_000;

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub max_cell_width: usize,
    pub max_output_chars: usize,
    pub show_summary: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            max_output_chars: DEFAULT_MAX_OUTPUT_CHARS,
            show_summary: true,
        }
    }
}

fn new_table(format: OutputFormat) -> Table {
    let mut table = Table::new();
    match format {
        OutputFormat::Markdown => {
            table.load_preset(presets::ASCII_MARKDOWN);
        }
        _ => {
            table.load_preset(presets::UTF8_FULL);
        }
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn render_links_table(pager: &Pager, format: OutputFormat, options: &TableOptions) -> String {
    let mut table = new_table(format);
    table.set_header(vec!["#", "Label", "Target", "Kind"]);

    for (index, link) in pager.links_to_print().iter().enumerate() {
        table.add_row(link_row(index + 1, link, options.max_cell_width));
    }

    let mut output = table.to_string();
    if options.show_summary {
        output.push('\n');
        output.push_str(&summary_footer(pager));
    }

    truncate_output(output, options.max_output_chars)
}

pub fn render_key_value_table(
    title: &str,
    rows: &[(String, String)],
    format: OutputFormat,
    options: &TableOptions,
) -> String {
    let mut table = new_table(format);
    table.set_header(vec![title.to_string(), "Value".to_string()]);

    for (key, value) in rows {
        let key = truncate_string(key, options.max_cell_width);
        let value = truncate_string(value, options.max_cell_width);
        table.add_row(vec![key, value]);
    }

    truncate_output(table.to_string(), options.max_output_chars)
}

fn link_row(position: usize, link: &Link, max_cell_width: usize) -> Vec<String> {
    let target = link
        .target()
        .map(|page| page.to_string())
        .unwrap_or_else(|| NULL_DISPLAY.to_string());
    vec![
        position.to_string(),
        truncate_string(link.label(), max_cell_width),
        truncate_string(&target, max_cell_width),
        link.kind().as_str().to_string(),
    ]
}

pub fn summary_footer(pager: &Pager) -> String {
    let page = format!(
        "Page {} of {}",
        pager.page_number(),
        pager.number_of_pages()
    );
    match pager.item_range() {
        Some((first, last)) => format!(
            "{} (items {}-{} of {})",
            page,
            first,
            last,
            pager.number_of_items()
        ),
        None => page,
    }
}

fn truncate_string(input: &str, max_len: usize) -> String {
    let len = input.chars().count();
    if len <= max_len {
        return input.to_string();
    }
    if max_len <= 1 {
        return ELLIPSIS.to_string();
    }
    let truncated: String = input.chars().take(max_len - 1).collect();
    format!("{}{}", truncated, ELLIPSIS)
}

fn truncate_output(output: String, max_len: usize) -> String {
    if output.len() <= max_len {
        return output;
    }
    let mut truncated = output.chars().take(max_len).collect::<String>();
    truncated.push_str("\n[output truncated]");
    truncated
}
