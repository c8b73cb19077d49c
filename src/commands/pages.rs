use std::io::{self, Write};

use anyhow::Result;

use crate::cli::{CliArgs, PagerArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::{TableOptions, json, table};
use crate::pager::Pager;

pub fn run(args: &CliArgs, cmd: &PagerArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let pager = common::build_pager(cmd, &resolved)?;

    if args.quiet {
        return Ok(());
    }

    let body = match format {
        OutputFormat::Json => {
            let payload = json::pager_summary_json(&pager);
            json::emit_json_value(&payload, common::json_pretty(&resolved))?
        }
        OutputFormat::Plain => table::summary_footer(&pager),
        _ => table::render_key_value_table(
            "Pager",
            &summary_rows(&pager),
            format,
            &TableOptions::default(),
        ),
    };
    writeln!(io::stdout(), "{}", body)?;

    Ok(())
}

fn summary_rows(pager: &Pager) -> Vec<(String, String)> {
    let mut rows = vec![
        (
            "numberOfItems".to_string(),
            pager.number_of_items().to_string(),
        ),
        ("pageSize".to_string(), pager.page_size().to_string()),
        ("pageNumber".to_string(), pager.page_number().to_string()),
        (
            "numberOfPages".to_string(),
            pager.number_of_pages().to_string(),
        ),
        (
            "previousVisible".to_string(),
            pager.previous_visible().to_string(),
        ),
        ("nextVisible".to_string(), pager.next_visible().to_string()),
    ];
    if let Some((first, last)) = pager.item_range() {
        rows.push(("itemRange".to_string(), format!("{}-{}", first, last)));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_rows_include_range_for_valid_page() {
        let pager = Pager::new(20, 10, 1).expect("pager");
        let rows = summary_rows(&pager);
        assert!(rows.contains(&("numberOfPages".to_string(), "2".to_string())));
        assert!(rows.contains(&("previousVisible".to_string(), "false".to_string())));
        assert!(rows.contains(&("nextVisible".to_string(), "true".to_string())));
        assert!(rows.contains(&("itemRange".to_string(), "1-10".to_string())));
    }

    #[test]
    fn summary_rows_skip_range_for_out_of_range_page() {
        let pager = Pager::new(20, 10, 3).expect("pager");
        assert!(!summary_rows(&pager).iter().any(|(key, _)| key == "itemRange"));
    }
}
