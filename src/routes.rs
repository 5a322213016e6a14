pub const CUSTOMER_RECORDS: &str = "/customer-records";
pub const GOVERNMENT: &str = "/government";

/// Every path the application's client-side router maps to a view. Menu
/// entries must point at one of these.
pub const KNOWN_ROUTES: &[&str] = &[CUSTOMER_RECORDS, GOVERNMENT];

pub fn is_known(path: &str) -> bool {
    KNOWN_ROUTES.contains(&path)
}
