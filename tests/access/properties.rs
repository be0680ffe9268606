//! Rule properties over generated permission sets.
//!
//! Names are drawn from a small pool so generated roles routinely carry the
//! same name twice with different menu flags.

use panelgate::permission::{Permission, PermissionSet, can_menu_show, can_perform, can_perform_any};
use proptest::prelude::*;

const NAMES: [&str; 6] = [
    "View Invoice Management",
    "Update Invoice Management",
    "Delete Invoice Management",
    "View Receipts Management",
    "Roles Management",
    "",
];

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(NAMES.to_vec()).prop_map(str::to_string),
        1 => "[A-Za-z ]{0,24}",
    ]
}

/// Raw entries as a stored role would list them, duplicates included.
fn entries_strategy() -> impl Strategy<Value = Vec<Permission>> {
    prop::collection::vec(
        (name_strategy(), "[a-z/]{0,12}", any::<bool>())
            .prop_map(|(name, action, flag)| Permission::new(name, action, flag)),
        0..12,
    )
}

proptest! {
    /// A name absent from the set fails both rules.
    #[test]
    fn absent_name_fails_both_rules(entries in entries_strategy(), name in name_strategy()) {
        prop_assume!(!name.is_empty());
        prop_assume!(entries.iter().all(|p| p.name != name));
        let set = PermissionSet::from_iter(entries);
        prop_assert!(!can_perform(Some(&set), &name));
        prop_assert!(!can_menu_show(Some(&set), Some(&name)));
    }

    /// For a held name, the first occurrence's flag decides the menu and
    /// action authorization always holds.
    #[test]
    fn first_flag_decides_menu(
        entries in entries_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!entries.is_empty());
        let name = entries[pick.index(entries.len())].name.clone();
        prop_assume!(!name.is_empty());
        let first_flag = entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.show_on_menu)
            .unwrap_or_default();

        let set = PermissionSet::from_iter(entries);
        prop_assert!(can_perform(Some(&set), &name));
        prop_assert_eq!(can_menu_show(Some(&set), Some(&name)), first_flag);
    }

    /// `can_perform_any` over two names is the OR of `can_perform`.
    #[test]
    fn perform_any_matches_or(
        entries in entries_strategy(),
        a in name_strategy(),
        b in name_strategy(),
    ) {
        let set = PermissionSet::from_iter(entries);
        prop_assert_eq!(
            can_perform_any(Some(&set), [a.as_str(), b.as_str()]),
            can_perform(Some(&set), &a) || can_perform(Some(&set), &b)
        );
    }

    /// Evaluating any rule twice gives the same answer.
    #[test]
    fn rules_are_repeatable(entries in entries_strategy(), name in name_strategy()) {
        let set = PermissionSet::from_iter(entries);
        prop_assert_eq!(can_perform(Some(&set), &name), can_perform(Some(&set), &name));
        prop_assert_eq!(
            can_menu_show(Some(&set), Some(&name)),
            can_menu_show(Some(&set), Some(&name))
        );
        prop_assert_eq!(
            can_perform_any(Some(&set), [name.as_str()]),
            can_perform_any(Some(&set), [name.as_str()])
        );
    }
}
