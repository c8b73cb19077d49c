use serde::Serialize;

pub const PREVIOUS_LABEL: &str = "<";
pub const NEXT_LABEL: &str = ">";
pub const ELLIPSIS_LABEL: &str = "...";

/// One renderable pagination control.
///
/// `target` is the page the control navigates to. It is `None` for ellipsis
/// markers and for the entry showing the current page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    label: String,
    target: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Previous,
    Next,
    Ellipsis,
    Current,
    Page,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Previous => "previous",
            LinkKind::Next => "next",
            LinkKind::Ellipsis => "ellipsis",
            LinkKind::Current => "current",
            LinkKind::Page => "page",
        }
    }
}

impl Link {
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
        }
    }

    pub fn to(label: impl Into<String>, target: i64) -> Self {
        Self {
            label: label.into(),
            target: Some(target),
        }
    }

    pub(crate) fn ellipsis() -> Self {
        Self::plain(ELLIPSIS_LABEL)
    }

    pub(crate) fn page(page: i64) -> Self {
        Self::to(page.to_string(), page)
    }

    pub(crate) fn current(page: i64) -> Self {
        Self::plain(page.to_string())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn is_clickable(&self) -> bool {
        self.target.is_some()
    }

    pub fn kind(&self) -> LinkKind {
        match (self.label.as_str(), self.target) {
            (PREVIOUS_LABEL, Some(_)) => LinkKind::Previous,
            (NEXT_LABEL, Some(_)) => LinkKind::Next,
            (ELLIPSIS_LABEL, None) => LinkKind::Ellipsis,
            (_, None) => LinkKind::Current,
            (_, Some(_)) => LinkKind::Page,
        }
    }
}
