#![forbid(unsafe_code)]

//! Property tests for option derivation and the picker state machine.

use proptest::prelude::*;
use tagpick_core::event::{Event, KeyCode, KeyEvent};
use tagpick_widgets::{
    MultiSelect, MultiSelectProps, SelectOption, derive_options, reconcile_active,
};

fn catalog_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Za-z]{1,6}", 0..8).prop_map(|set| set.into_iter().collect())
}

fn to_options(labels: &[String]) -> Vec<SelectOption> {
    labels.iter().map(|l| SelectOption::new(l.as_str())).collect()
}

fn press(picker: &mut MultiSelect, code: KeyCode) {
    picker.handle_event(&Event::Key(KeyEvent::new(code)));
}

proptest! {
    #[test]
    fn filtered_rows_contain_search(catalog in catalog_strategy(), search in "[a-zA-Z]{0,3}") {
        let options = to_options(&catalog);
        let derived = derive_options(&options, &[], &[], &search);
        let needle = search.to_lowercase();
        let real = derived.items.iter().filter(|o| catalog.contains(&o.label));
        for option in real {
            prop_assert!(option.label.to_lowercase().contains(&needle));
        }
    }

    #[test]
    fn derivation_never_empty(catalog in catalog_strategy(), search in "[a-z]{0,3}") {
        let options = to_options(&catalog);
        let derived = derive_options(&options, &[], &[], &search);
        prop_assert!(!derived.is_empty());
        if let Some(label) = derived.designated.as_deref() {
            prop_assert!(derived.position(label).is_some());
        }
    }

    #[test]
    fn no_match_gives_one_search_row(catalog in catalog_strategy()) {
        let options = to_options(&catalog);
        let derived = derive_options(&options, &[], &[], "0");
        prop_assert_eq!(derived.len(), 1);
        prop_assert_eq!(derived.items[0].label.as_str(), "0");
        prop_assert_eq!(derived.designated.as_deref(), Some("0"));
    }

    #[test]
    fn reconciled_cursor_is_listed(
        catalog in catalog_strategy(),
        search in "[a-z]{0,2}",
        previous in "[A-Za-z]{1,6}",
    ) {
        let options = to_options(&catalog);
        let derived = derive_options(&options, &[], &[], &search);
        let active = reconcile_active(&derived.items, derived.designated.as_deref(), Some(&previous));
        if let Some(label) = active {
            prop_assert!(derived.position(&label).is_some());
        }
    }

    #[test]
    fn arrows_stay_in_bounds(catalog in catalog_strategy(), moves in prop::collection::vec(any::<bool>(), 0..30)) {
        let mut picker = MultiSelect::new(MultiSelectProps::new("p", catalog.iter().map(String::as_str)));
        picker.focus();
        for down in moves {
            press(&mut picker, if down { KeyCode::Down } else { KeyCode::Up });
            let active = picker.active().expect("arrow keys always place the cursor");
            prop_assert!(picker.options().iter().any(|o| o.label == active));
        }
    }

    #[test]
    fn repeated_down_saturates(catalog in catalog_strategy()) {
        let mut picker = MultiSelect::new(MultiSelectProps::new("p", catalog.iter().map(String::as_str)));
        picker.focus();
        let len = picker.options().len();
        for _ in 0..len + 3 {
            press(&mut picker, KeyCode::Down);
        }
        let last = picker.options().last().map(|o| o.label.clone());
        prop_assert_eq!(picker.active().map(str::to_owned), last);
    }

    #[test]
    fn toggle_pair_is_identity(catalog in catalog_strategy(), label in "[A-Za-z]{1,6}") {
        let mut picker = MultiSelect::new(MultiSelectProps::new("p", catalog.iter().map(String::as_str)));
        let before_value = picker.value().to_vec();
        let before_extra = picker.extra_options().to_vec();
        picker.change_value(Some(&label));
        picker.change_value(Some(&label));
        prop_assert_eq!(picker.value(), before_value.as_slice());
        prop_assert_eq!(picker.extra_options(), before_extra.as_slice());
    }

    #[test]
    fn typed_label_tracked_exactly_once(catalog in catalog_strategy(), label in "[0-9]{1,4}") {
        let mut picker = MultiSelect::new(MultiSelectProps::new("p", catalog.iter().map(String::as_str)));
        picker.change_value(Some(&label));
        prop_assert_eq!(picker.value().iter().filter(|v| **v == label).count(), 1);
        prop_assert_eq!(picker.extra_options().iter().filter(|o| o.label == label).count(), 1);

        picker.change_value(Some(&label));
        prop_assert!(!picker.value().contains(&label));
        prop_assert!(picker.extra_options().iter().all(|o| o.label != label));
    }

    #[test]
    fn extras_never_shadow_catalog(catalog in catalog_strategy(), picks in prop::collection::vec("[A-Za-z]{1,6}", 0..10)) {
        let mut picker = MultiSelect::new(MultiSelectProps::new("p", catalog.iter().map(String::as_str)));
        for label in &picks {
            picker.change_value(Some(label));
        }
        for extra in picker.extra_options() {
            prop_assert!(!catalog.contains(&extra.label));
        }
    }
}
