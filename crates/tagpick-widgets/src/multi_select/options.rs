#![forbid(unsafe_code)]

//! Option derivation.
//!
//! The dropdown contents are a pure function of the catalog, the extra
//! (typed) options, the committed value and the search term. Deriving the
//! list never touches the cursor: [`derive_options`] only *designates* a row
//! when the list shape calls for one, and [`reconcile_active`] then decides
//! where the cursor lands given where it was before.

use tagpick_text::contains_ignore_case;

/// A catalog entry. The label is the identifying key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub label: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl From<&str> for SelectOption {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for SelectOption {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// An option as shown in the dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectableOption {
    pub label: String,
    /// The label is part of the committed value.
    pub selected: bool,
    /// The row holds the keyboard cursor.
    pub active: bool,
    /// Some row in the same list holds the cursor.
    pub has_active: bool,
}

impl SelectableOption {
    /// An unselected, inactive row.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    fn from_option(option: &SelectOption, selected: bool) -> Self {
        Self {
            label: option.label.clone(),
            selected,
            ..Self::default()
        }
    }
}

/// Result of [`derive_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedOptions {
    /// Rows in display order, with `active`/`has_active` still unset.
    pub items: Vec<SelectableOption>,
    /// Label the cursor must move to, if the list shape designates one.
    pub designated: Option<String>,
}

impl DerivedOptions {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Row index of `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|o| o.label == label)
    }
}

/// Build the dropdown rows.
///
/// Rows are `catalog` followed by `extra`, filtered by a case-insensitive
/// substring match on `search` and flagged `selected` when present in
/// `value`. Then:
///
/// - no match: a single row carrying the raw search term, designated;
/// - a non-empty term with no exact (case-sensitive) label match: the same
///   search row is prepended and designated;
/// - exactly one match: that row is designated.
pub fn derive_options(
    catalog: &[SelectOption],
    extra: &[SelectOption],
    value: &[String],
    search: &str,
) -> DerivedOptions {
    let mut items: Vec<SelectableOption> = catalog
        .iter()
        .chain(extra)
        .filter(|option| contains_ignore_case(&option.label, search))
        .map(|option| {
            let selected = value.iter().any(|v| *v == option.label);
            SelectableOption::from_option(option, selected)
        })
        .collect();

    if items.is_empty() {
        return DerivedOptions {
            items: vec![SelectableOption::new(search)],
            designated: Some(search.to_owned()),
        };
    }

    let exact = items.iter().any(|o| o.label == search);
    if !exact && !search.is_empty() {
        items.insert(0, SelectableOption::new(search));
        return DerivedOptions {
            items,
            designated: Some(search.to_owned()),
        };
    }

    let designated = match items.as_slice() {
        [only] => Some(only.label.clone()),
        _ => None,
    };
    DerivedOptions { items, designated }
}

/// Decide which label holds the cursor after a re-derivation.
///
/// A designated label always wins. Otherwise the previous cursor survives
/// when its label is still listed, and is dropped when it is not.
pub fn reconcile_active(
    items: &[SelectableOption],
    designated: Option<&str>,
    previous: Option<&str>,
) -> Option<String> {
    let listed = |label: &str| items.iter().any(|o| o.label == label);
    designated
        .filter(|label| listed(label))
        .or_else(|| previous.filter(|label| listed(label)))
        .map(str::to_owned)
}

/// Write the cursor flags onto the rows.
pub fn annotate_active(items: &mut [SelectableOption], active: Option<&str>) {
    let has_active = active.is_some_and(|label| items.iter().any(|o| o.label == label));
    for item in items {
        item.active = active == Some(item.label.as_str());
        item.has_active = has_active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(labels: &[&str]) -> Vec<SelectOption> {
        labels.iter().copied().map(SelectOption::from).collect()
    }

    fn labels(derived: &DerivedOptions) -> Vec<&str> {
        derived.items.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn empty_search_lists_everything() {
        let c = catalog(&["Red", "Blue"]);
        let d = derive_options(&c, &[], &[], "");
        assert_eq!(labels(&d), ["Red", "Blue"]);
        assert_eq!(d.designated, None);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let c = catalog(&["Apple", "Banana", "Grape"]);
        let d = derive_options(&c, &[], &[], "ap");
        assert_eq!(labels(&d), ["ap", "Apple", "Grape"]);
        assert!(d.items[1..].iter().all(|o| o.label.to_lowercase().contains("ap")));
    }

    #[test]
    fn no_match_yields_single_designated_search_row() {
        let c = catalog(&["Red", "Blue"]);
        let d = derive_options(&c, &[], &[], "Gre");
        assert_eq!(d.items, vec![SelectableOption::new("Gre")]);
        assert_eq!(d.designated.as_deref(), Some("Gre"));
    }

    #[test]
    fn empty_catalog_yields_blank_row() {
        let d = derive_options(&[], &[], &[], "");
        assert_eq!(labels(&d), [""]);
        assert_eq!(d.designated.as_deref(), Some(""));
    }

    #[test]
    fn exact_match_suppresses_search_row() {
        let c = catalog(&["Red", "Reddish"]);
        let d = derive_options(&c, &[], &[], "Red");
        assert_eq!(labels(&d), ["Red", "Reddish"]);
        assert_eq!(d.designated, None);
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let c = catalog(&["Red"]);
        let d = derive_options(&c, &[], &[], "red");
        assert_eq!(labels(&d), ["red", "Red"]);
        assert_eq!(d.designated.as_deref(), Some("red"));
    }

    #[test]
    fn single_exact_match_is_designated() {
        let c = catalog(&["Red", "Blue"]);
        let d = derive_options(&c, &[], &[], "Blue");
        assert_eq!(labels(&d), ["Blue"]);
        assert_eq!(d.designated.as_deref(), Some("Blue"));
    }

    #[test]
    fn extras_follow_catalog_and_are_marked_selected() {
        let c = catalog(&["Red"]);
        let extra = catalog(&["Teal"]);
        let value = vec!["Teal".to_string()];
        let d = derive_options(&c, &extra, &value, "");
        assert_eq!(labels(&d), ["Red", "Teal"]);
        assert!(!d.items[0].selected);
        assert!(d.items[1].selected);
    }

    #[test]
    fn designated_wins_over_previous() {
        let items = vec![SelectableOption::new("a"), SelectableOption::new("b")];
        assert_eq!(reconcile_active(&items, Some("a"), Some("b")).as_deref(), Some("a"));
    }

    #[test]
    fn previous_kept_when_still_listed() {
        let items = vec![SelectableOption::new("a"), SelectableOption::new("b")];
        assert_eq!(reconcile_active(&items, None, Some("b")).as_deref(), Some("b"));
        assert_eq!(reconcile_active(&items, None, Some("zzz")), None);
        assert_eq!(reconcile_active(&items, None, None), None);
    }

    #[test]
    fn annotate_sets_flags() {
        let mut items = vec![SelectableOption::new("a"), SelectableOption::new("b")];
        annotate_active(&mut items, Some("b"));
        assert!(!items[0].active && items[0].has_active);
        assert!(items[1].active && items[1].has_active);

        annotate_active(&mut items, None);
        assert!(items.iter().all(|o| !o.active && !o.has_active));
    }

    #[test]
    fn annotate_ignores_unlisted_label() {
        let mut items = vec![SelectableOption::new("a")];
        annotate_active(&mut items, Some("gone"));
        assert!(!items[0].active && !items[0].has_active);
    }
}
