use serde::Serialize;
use serde_json::json;

use crate::config::ResolvedConfig;
use crate::pager::Pager;

pub fn emit_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub fn emit_json_value(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    emit_json(value, pretty)
}

pub fn error_json(message: &str, kind: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "kind": kind,
        }
    })
}

pub fn pager_summary_json(pager: &Pager) -> serde_json::Value {
    let item_range = pager.item_range().map(|(first, last)| {
        json!({
            "first": first,
            "last": last,
        })
    });
    json!({
        "numberOfItems": pager.number_of_items(),
        "pageSize": pager.page_size(),
        "pageNumber": pager.page_number(),
        "numberOfPages": pager.number_of_pages(),
        "previousVisible": pager.previous_visible(),
        "nextVisible": pager.next_visible(),
        "itemRange": item_range,
    })
}

pub fn pager_to_json(pager: &Pager) -> serde_json::Value {
    let mut value = pager_summary_json(pager);
    value["links"] = json!(pager.links_to_print());
    value
}

pub fn config_to_json(resolved: &ResolvedConfig) -> serde_json::Value {
    json!({
        "configPath": resolved.config_path.as_ref().map(|p| p.display().to_string()),
        "profileName": resolved.profile_name,
        "pageSize": resolved.page_size,
        "settings": {
            "output": {
                "defaultFormat": resolved.settings.output.default_format.as_str(),
                "json": {
                    "pretty": resolved.settings.output.json_pretty,
                },
                "table": {
                    "showSummary": resolved.settings.output.show_summary,
                }
            }
        }
    })
}
