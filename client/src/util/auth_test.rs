use super::*;

fn session(token: Option<&str>, role: Option<Role>) -> Session {
    Session {
        token: token.map(ToOwned::to_owned),
        role,
        user_id: token.map(|_| "7".to_owned()),
        display_name: None,
    }
}

// =============================================================
// Authentication guard
// =============================================================

#[test]
fn missing_or_empty_token_redirects_to_login_every_time() {
    for token in [None, Some("")] {
        let s = session(token, Some(Role::Coordinator));
        for _ in 0..3 {
            assert_eq!(require_auth(&s), GuardDecision::Redirect(LOGIN_PATH));
        }
        assert_eq!(auth_status(&s), AuthStatus::Unauthenticated);
    }
}

#[test]
fn token_without_role_is_authenticated() {
    let s = session(Some("t"), None);
    assert_eq!(auth_status(&s), AuthStatus::Authenticated);
    assert_eq!(require_auth(&s), GuardDecision::Render);
}

// =============================================================
// Role guard
// =============================================================

#[test]
fn role_guard_permits_only_members() {
    let tech = session(Some("t"), Some(Role::Technician));
    let coord = session(Some("t"), Some(Role::Coordinator));
    assert_eq!(require_role(&tech, TECHNICIAN_ONLY), GuardDecision::Render);
    assert_eq!(require_role(&coord, TECHNICIAN_ONLY), GuardDecision::Redirect(LANDING_PATH));
    assert_eq!(
        require_role(&coord, &[Role::Technician, Role::Coordinator]),
        GuardDecision::Render
    );
}

#[test]
fn absent_role_never_matches() {
    let s = session(Some("t"), None);
    assert!(!role_allowed(None, &[Role::Technician, Role::Coordinator]));
    assert_eq!(require_role(&s, COORDINATOR_ONLY), GuardDecision::Redirect(LANDING_PATH));
}

#[test]
fn empty_allowed_set_denies_everyone() {
    assert!(!role_allowed(Some(Role::Technician), &[]));
    assert!(!role_allowed(Some(Role::Coordinator), &[]));
}

#[test]
fn scenario_e_role_guard_follows_session_role() {
    let coord = session(Some("t"), Some(Role::Coordinator));
    assert_eq!(require_role(&coord, TECHNICIAN_ONLY), GuardDecision::Redirect("/"));
    let tech = session(Some("t"), Some(Role::Technician));
    assert_eq!(require_role(&tech, TECHNICIAN_ONLY), GuardDecision::Render);
}

// =============================================================
// Route table
// =============================================================

#[test]
fn login_page_always_renders() {
    assert_eq!(evaluate_route("/login", &Session::default()), GuardDecision::Render);
    let s = session(Some("t"), Some(Role::Technician));
    assert_eq!(evaluate_route("/login", &s), GuardDecision::Render);
}

#[test]
fn protected_routes_send_anonymous_users_to_login() {
    for rule in PROTECTED_ROUTES {
        assert_eq!(
            evaluate_route(rule.path, &Session::default()),
            GuardDecision::Redirect(LOGIN_PATH),
            "{}",
            rule.path
        );
    }
}

#[test]
fn technician_routes() {
    let tech = session(Some("t"), Some(Role::Technician));
    assert_eq!(evaluate_route("/", &tech), GuardDecision::Render);
    assert_eq!(evaluate_route("/expediente", &tech), GuardDecision::Render);
    assert_eq!(evaluate_route("/indicio/", &tech), GuardDecision::Render);
    assert_eq!(evaluate_route("/revisar", &tech), GuardDecision::Redirect(LANDING_PATH));
    assert_eq!(evaluate_route("/usuarios", &tech), GuardDecision::Redirect(LANDING_PATH));
}

#[test]
fn coordinator_routes() {
    let coord = session(Some("t"), Some(Role::Coordinator));
    assert_eq!(evaluate_route("/revisar", &coord), GuardDecision::Render);
    assert_eq!(evaluate_route("/usuarios", &coord), GuardDecision::Render);
    assert_eq!(evaluate_route("/expediente", &coord), GuardDecision::Redirect(LANDING_PATH));
}

#[test]
fn unknown_paths_fall_back_by_auth_state() {
    let tech = session(Some("t"), Some(Role::Technician));
    assert_eq!(evaluate_route("/nope", &tech), GuardDecision::Redirect(LANDING_PATH));
    assert_eq!(evaluate_route("/nope", &Session::default()), GuardDecision::Redirect(LOGIN_PATH));
}
