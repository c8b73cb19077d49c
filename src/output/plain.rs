use crate::pager::{Link, LinkKind};

/// Renders links on one line, bracketing the current page: `< 1 ... 4 [5] 6 ... 10 >`.
pub fn render_links_line(links: &[Link]) -> String {
    links
        .iter()
        .map(|link| match link.kind() {
            LinkKind::Current => format!("[{}]", link.label()),
            _ => link.label().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
