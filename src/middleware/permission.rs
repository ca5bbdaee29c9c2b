//! Static role-to-permission mapping.
//!
//! Roles are free-form strings in the database; lookups normalize through an
//! alias map first so legacy values like "administrator" keep working. The
//! tables are compile-time constants, so permission checks never touch the
//! database.

/// Grants every permission. Only the admin role carries it.
pub const WILDCARD: &str = "*";

const ADMIN_PERMISSIONS: &[&str] = &["*"];

const SUPPORT_PERMISSIONS: &[&str] = &[
    "users.view",
    "bookings.view",
    "bookings.manage",
    "conversations.view",
    "notifications.send",
];

const SELLER_PERMISSIONS: &[&str] = &[
    "cars.manage",
    "auctions.manage",
    "auctions.accept_sale",
    "wallet.recharge",
    "wallet.withdraw",
];

const BUYER_PERMISSIONS: &[&str] = &[
    "bids.place",
    "bookings.create",
    "wallet.recharge",
    "wallet.withdraw",
];

const NO_PERMISSIONS: &[&str] = &[];

/// Resolves a raw role value to its canonical name, if it maps to one.
fn canonical(role: &str) -> Option<&'static str> {
    match role.trim().to_ascii_lowercase().as_str() {
        "admin" | "administrator" | "superadmin" | "root" => Some("admin"),
        "support" | "agent" | "helpdesk" | "moderator" => Some("support"),
        "seller" | "dealer" | "showroom" => Some("seller"),
        "buyer" | "customer" | "user" | "member" => Some("buyer"),
        _ => None,
    }
}

/// Returns the permission strings granted to a role.
///
/// Unknown roles get no permissions rather than an error, so a bad value in
/// the database locks the account out of guarded endpoints instead of
/// breaking them.
pub fn permissions_for(role: &str) -> &'static [&'static str] {
    match canonical(role) {
        Some("admin") => ADMIN_PERMISSIONS,
        Some("support") => SUPPORT_PERMISSIONS,
        Some("seller") => SELLER_PERMISSIONS,
        Some("buyer") => BUYER_PERMISSIONS,
        _ => NO_PERMISSIONS,
    }
}

/// Checks whether a role grants the given permission, honoring the wildcard.
pub fn role_allows(role: &str, permission: &str) -> bool {
    permissions_for(role)
        .iter()
        .any(|granted| *granted == WILDCARD || *granted == permission)
}

/// Checks whether a role normalizes to the admin role.
pub fn is_admin(role: &str) -> bool {
    canonical(role) == Some("admin")
}
