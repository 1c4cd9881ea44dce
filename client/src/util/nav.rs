//! Role-filtered navigation entries.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::session::Role;

/// Who sees a menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Everyone,
    /// Technicians, and signed-in users whose role was not recognized.
    TechnicianOrUnassigned,
    CoordinatorOnly,
}

impl Audience {
    pub fn admits(self, role: Option<Role>) -> bool {
        match self {
            Self::Everyone => true,
            Self::TechnicianOrUnassigned => role != Some(Role::Coordinator),
            Self::CoordinatorOnly => role == Some(Role::Coordinator),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    /// Submenu heading the entry sits under, if any.
    pub group: Option<&'static str>,
    pub audience: Audience,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Inicio", href: "/", group: None, audience: Audience::Everyone },
    NavItem {
        label: "Registro de Expedientes",
        href: "/expediente",
        group: None,
        audience: Audience::TechnicianOrUnassigned,
    },
    NavItem {
        label: "Registro de Indicios",
        href: "/indicio",
        group: None,
        audience: Audience::TechnicianOrUnassigned,
    },
    NavItem {
        label: "Revisar Expedientes",
        href: "/revisar",
        group: None,
        audience: Audience::CoordinatorOnly,
    },
    NavItem {
        label: "Listado de Usuarios",
        href: "/usuarios",
        group: Some("Usuarios"),
        audience: Audience::CoordinatorOnly,
    },
];

/// Entries `role` may see, in menu order.
pub fn visible_items(role: Option<Role>) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| item.audience.admits(role))
        .collect()
}

/// Badge text for the signed-in role.
pub fn role_badge(role: Option<Role>) -> &'static str {
    role.map_or("Usuario", Role::label)
}
