use super::*;

fn hrefs(role: Option<Role>) -> Vec<&'static str> {
    visible_items(role).into_iter().map(|item| item.href).collect()
}

#[test]
fn technician_sees_registration_entries() {
    assert_eq!(hrefs(Some(Role::Technician)), vec!["/", "/expediente", "/indicio"]);
}

#[test]
fn coordinator_sees_review_and_users() {
    assert_eq!(hrefs(Some(Role::Coordinator)), vec!["/", "/revisar", "/usuarios"]);
}

#[test]
fn unrecognized_role_gets_technician_menu() {
    assert_eq!(hrefs(None), hrefs(Some(Role::Technician)));
}

#[test]
fn users_entry_lives_in_submenu() {
    let users = visible_items(Some(Role::Coordinator))
        .into_iter()
        .find(|item| item.href == "/usuarios")
        .unwrap();
    assert_eq!(users.group, Some("Usuarios"));
}

#[test]
fn badges() {
    assert_eq!(role_badge(Some(Role::Coordinator)), "Coordinador");
    assert_eq!(role_badge(Some(Role::Technician)), "Técnico");
    assert_eq!(role_badge(None), "Usuario");
}
