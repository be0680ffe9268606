//! Permission rule tests.
//!
//! Covers the menu visibility and action authorization rules, including the
//! invoice scenario the landlord panel relies on.

use panelgate::catalog::{self, Module, verb};
use panelgate::permission::{Permission, PermissionSet, can_menu_show, can_perform, can_perform_any};

fn invoice_scenario() -> PermissionSet {
    PermissionSet::from_iter([
        Permission::new("View Invoice Management", "view", true),
        Permission::new("Update Invoice Management", "update", false),
    ])
}

/// A name missing from the set fails both rules.
#[test]
fn missing_name_fails_both_rules() {
    let sets = [PermissionSet::new(), invoice_scenario(), catalog::full_set()];
    for set in &sets {
        for name in ["Delete Nothing Management", "view invoice management", " "] {
            assert!(!can_perform(Some(set), name), "{name} should not be held");
            assert!(!can_menu_show(Some(set), Some(name)), "{name} should not show");
        }
    }
}

/// Holding a permission with the flag cleared authorizes actions but keeps
/// the menu entry hidden.
#[test]
fn flag_splits_menu_from_action() {
    let set = invoice_scenario();
    assert!(can_menu_show(Some(&set), Some("View Invoice Management")));
    assert!(!can_menu_show(Some(&set), Some("Update Invoice Management")));
    assert!(can_perform(Some(&set), "Update Invoice Management"));
    assert!(!can_perform(Some(&set), "Delete Invoice Management"));
}

/// Entries without a requirement are shown to everyone, signed in or not.
#[test]
fn unrequired_entries_always_show() {
    let empty = PermissionSet::new();
    for set in [None, Some(&empty), Some(&invoice_scenario())] {
        assert!(can_menu_show(set, None));
    }
}

/// The empty set and the absent set deny every named check.
#[test]
fn empty_and_absent_sets_deny() {
    let empty = PermissionSet::new();
    for set in [None, Some(&empty)] {
        assert!(!can_perform(set, "View Invoice Management"));
        assert!(!can_menu_show(set, Some("View Invoice Management")));
    }
}

/// `can_perform_any` is the OR of `can_perform` over its names.
#[test]
fn perform_any_is_disjunction() {
    let set = invoice_scenario();
    let names = [
        "View Invoice Management",
        "Update Invoice Management",
        "Delete Invoice Management",
        "Create Invoice Management",
    ];
    for a in names {
        for b in names {
            assert_eq!(
                can_perform_any(Some(&set), [a, b]),
                can_perform(Some(&set), a) || can_perform(Some(&set), b),
                "mismatch for [{a}, {b}]"
            );
        }
    }
}

/// Repeated evaluation gives the same answer.
#[test]
fn predicates_are_repeatable() {
    let set = invoice_scenario();
    for name in ["View Invoice Management", "Update Invoice Management", "X"] {
        assert_eq!(can_perform(Some(&set), name), can_perform(Some(&set), name));
        assert_eq!(
            can_menu_show(Some(&set), Some(name)),
            can_menu_show(Some(&set), Some(name))
        );
    }
}

/// The first of two same-named permissions decides the menu flag.
#[test]
fn duplicate_names_first_wins() {
    let set = PermissionSet::from_iter([
        Permission::new("View Receipts Management", "view", true),
        Permission::new("View Receipts Management", "view", false),
    ]);
    assert!(can_menu_show(Some(&set), Some("View Receipts Management")));
}

/// Catalog names line up with the strings stored on roles.
#[test]
fn catalog_names_match_stored_roles() {
    let stored: PermissionSet = serde_json::from_str(
        r#"[
            {
                "name": "View Maintaince Request Management",
                "action": "/admin/maintaince-request-management/view",
                "show_on_menu": true
            },
            {
                "name": "Create Maintaince Request Management",
                "action": "/admin/maintaince-request-management/create",
                "show_on_menu": false
            }
        ]"#,
    )
    .unwrap();

    let view = Module::MaintenanceRequest.permission::<verb::View>();
    let create = Module::MaintenanceRequest.permission::<verb::Create>();
    assert!(can_menu_show(Some(&stored), Some(&view)));
    assert!(can_perform(Some(&stored), &create));
    assert!(!can_menu_show(Some(&stored), Some(&create)));
    assert_eq!(
        stored.get(&view),
        Some(&Module::MaintenanceRequest.seeded::<verb::View>())
    );
}

/// Predicates can be shared across threads without coordination.
#[test]
fn predicates_run_concurrently() {
    let set = std::sync::Arc::new(catalog::full_set());
    let handles: Vec<_> = Module::ALL
        .into_iter()
        .map(|module| {
            let set = std::sync::Arc::clone(&set);
            std::thread::spawn(move || {
                can_menu_show(Some(&set), Some(&module.permission::<verb::View>()))
                    && can_perform(Some(&set), &module.permission::<verb::Delete>())
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
