//! The seeded permission catalog.
//!
//! Every module the panels manage is seeded with a parent record named
//! `"<Module> Management"` and four verb permissions named
//! `"<Verb> <Module> Management"`. Only the `View` permission is flagged for
//! the menu; the parent has no action and is never shown. Verbs are marker
//! types so call sites spell permissions through the compiler instead of
//! string literals.
//!
//! # Example
//!
//! ```
//! use panelgate::catalog::{Module, verb};
//!
//! assert_eq!(Module::Invoice.permission::<verb::Update>(), "Update Invoice Management");
//! ```

use crate::permission::{Permission, PermissionSet};

/// Marker trait for catalog verbs.
///
/// Implementors define the word used in the permission name and whether the
/// seeded permission is shown on the menu.
pub trait Verb: Clone + Copy + PartialEq + Eq + std::fmt::Debug {
    /// Leading word of the permission name.
    const NAME: &'static str;
    /// Menu flag the seeder assigns.
    const SHOW_ON_MENU: bool;
}

/// Standard catalog verbs.
pub mod verb {
    use super::Verb;

    /// Listing access; the only verb that exposes a menu entry.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct View;

    impl Verb for View {
        const NAME: &'static str = "View";
        const SHOW_ON_MENU: bool = true;
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Create;

    impl Verb for Create {
        const NAME: &'static str = "Create";
        const SHOW_ON_MENU: bool = false;
    }

    /// Editing, and approving or rejecting line items.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Update;

    impl Verb for Update {
        const NAME: &'static str = "Update";
        const SHOW_ON_MENU: bool = false;
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Delete;

    impl Verb for Delete {
        const NAME: &'static str = "Delete";
        const SHOW_ON_MENU: bool = false;
    }
}

/// A managed module of the admin panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Module {
    Landlord,
    Manager,
    User,
    TenantContract,
    Property,
    Invoice,
    Receipts,
    FinancialReports,
    BankSettlement,
    MaintenanceRequest,
    PlanFlexibility,
    RentalCollection,
    TenantRental,
    Roles,
}

impl Module {
    /// Every module, in seeding order.
    pub const ALL: [Module; 14] = [
        Module::Landlord,
        Module::Manager,
        Module::User,
        Module::TenantContract,
        Module::Property,
        Module::Invoice,
        Module::Receipts,
        Module::FinancialReports,
        Module::BankSettlement,
        Module::MaintenanceRequest,
        Module::PlanFlexibility,
        Module::RentalCollection,
        Module::TenantRental,
        Module::Roles,
    ];

    /// Label as it appears in permission names.
    ///
    /// Two labels keep the seeded spelling ("Maintaince", "Flexibity"):
    /// stored roles match on these exact strings.
    pub fn label(self) -> &'static str {
        match self {
            Module::Landlord => "Landlord",
            Module::Manager => "Manager",
            Module::User => "User",
            Module::TenantContract => "Tenant Contract",
            Module::Property => "Property",
            Module::Invoice => "Invoice",
            Module::Receipts => "Receipts",
            Module::FinancialReports => "Financial Reports",
            Module::BankSettlement => "Bank Settlement",
            Module::MaintenanceRequest => "Maintaince Request",
            Module::PlanFlexibility => "Plan Flexibity",
            Module::RentalCollection => "Rental Collection",
            Module::TenantRental => "Tenant Rental",
            Module::Roles => "Roles",
        }
    }

    /// Name of the module's parent record.
    pub fn parent_name(self) -> String {
        format!("{} Management", self.label())
    }

    /// The parent record the verb permissions hang off.
    pub fn parent(self) -> Permission {
        Permission::new(self.parent_name(), "", false)
    }

    /// Permission name for `V` on this module.
    pub fn permission<V: Verb>(self) -> String {
        format!("{} {}", V::NAME, self.parent_name())
    }

    /// The seeded permission record for `V` on this module.
    pub fn seeded<V: Verb>(self) -> Permission {
        let slug = self.parent_name().to_lowercase().replace(' ', "-");
        Permission::new(
            self.permission::<V>(),
            format!("/admin/{slug}/{}", V::NAME.to_lowercase()),
            V::SHOW_ON_MENU,
        )
    }

    /// The four verb permissions, in seeding order. The parent record is
    /// separate: see [`Module::parent`].
    pub fn seeded_all(self) -> [Permission; 4] {
        [
            self.seeded::<verb::Create>(),
            self.seeded::<verb::View>(),
            self.seeded::<verb::Update>(),
            self.seeded::<verb::Delete>(),
        ]
    }
}

/// The full seeded catalog as one set, each parent record ahead of its
/// verbs.
pub fn full_set() -> PermissionSet {
    Module::ALL
        .iter()
        .flat_map(|m| std::iter::once(m.parent()).chain(m.seeded_all()))
        .collect()
}
