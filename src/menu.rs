use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::link::NavLink;
use crate::routes;

/// One navigable entry in the application's top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Unique id the host menu uses for selection state and list diffing.
    pub key: &'static str,
    /// Absolute route path the entry navigates to.
    pub path: &'static str,
    /// Text shown for the entry.
    pub label_text: &'static str,
}

impl MenuItem {
    /// Builds a fresh hyperlink label bound to this entry's route.
    pub fn label(&self) -> NavLink {
        NavLink {
            to: self.path,
            text: self.label_text,
        }
    }
}

const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        key: "customer-records",
        path: routes::CUSTOMER_RECORDS,
        label_text: "Customer Records",
    },
    MenuItem {
        key: "government",
        path: routes::GOVERNMENT,
        label_text: "Customer Records (Gov)",
    },
];

/// The menu entries in display order. Constant for the process lifetime.
pub fn menu_items() -> &'static [MenuItem] {
    MENU_ITEMS
}

pub fn find(key: &str) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.key == key)
}

/// Checks the invariants the host menu relies on: keys are unique, paths are
/// absolute, and every path is a route the router actually maps to a view.
pub fn validate(items: &[MenuItem]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for item in items {
        if !seen.insert(item.key) {
            bail!("duplicate menu key '{}'", item.key);
        }
        if !item.path.starts_with('/') {
            bail!("menu path '{}' is not absolute (key '{}')", item.path, item.key);
        }
        if !routes::is_known(item.path) {
            bail!(
                "menu path '{}' is not a configured route (key '{}')",
                item.path,
                item.key
            );
        }
    }
    Ok(())
}
