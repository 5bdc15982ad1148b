use crate::features::world::{list, AccessWorld};
use coursegate_core::{PermissionResolver, RightsSnapshot, UserType};
use cucumber::{given, then, when};

// ==================== PRINCIPAL ====================

#[given(expr = "a principal with global rights {string}")]
async fn given_global_rights(world: &mut AccessWorld, rights: String) {
    world.update_principal(|principal| {
        list(&rights).iter().fold(principal, |p, right| p.with_global_right(right))
    });
}

#[given(expr = "the principal has rights {string} in department {string}")]
async fn given_department_rights(world: &mut AccessWorld, rights: String, department: String) {
    world.update_principal(|principal| {
        let principal = principal.with_department(department.as_str());
        list(&rights)
            .iter()
            .fold(principal, |p, right| p.with_department_right(department.as_str(), right))
    });
}

#[given(expr = "the principal has user type {string}")]
async fn given_user_type(world: &mut AccessWorld, user_type: String) {
    let user_type: UserType = user_type.parse().expect("unknown user type");
    world.update_principal(|principal| principal.with_user_type(user_type));
}

#[given(expr = "the principal's active department is {string}")]
async fn given_active_department(world: &mut AccessWorld, department: String) {
    world.update_principal(|principal| principal.with_active_department(Some(department)));
}

#[given(expr = "the principal has an active admin session")]
async fn given_admin_session(world: &mut AccessWorld) {
    world.update_principal(|principal| principal.with_admin_session(true));
}

#[given(expr = "the principal has role {string} in department {string}")]
async fn given_department_role(world: &mut AccessWorld, role: String, department: String) {
    world.update_principal(|principal| {
        let roles = principal.roles().clone().with_department_role(department, role);
        principal.with_roles(roles)
    });
}

#[given(expr = "no principal is logged in")]
async fn given_no_principal(world: &mut AccessWorld) {
    world.principal = None;
}

#[given(expr = "a rights snapshot:")]
async fn given_rights_snapshot(world: &mut AccessWorld, step: &cucumber::gherkin::Step) {
    let json = step.docstring.as_deref().expect("snapshot step needs a docstring");
    match RightsSnapshot::from_json(json).and_then(|snapshot| snapshot.into_principal(false)) {
        Ok(principal) => world.principal = Some(principal),
        Err(err) => world.last_error = Some(err.to_string()),
    }
}

// ==================== CHECKS ====================

#[when(expr = "I check {string}")]
async fn when_check_global(world: &mut AccessWorld, capability: String) {
    world.last_check =
        Some(PermissionResolver::has_permission(world.principal.as_ref(), &capability, None));
}

#[when(expr = "I check {string} in department {string}")]
async fn when_check_in_department(world: &mut AccessWorld, capability: String, department: String) {
    world.last_check = Some(PermissionResolver::has_permission(
        world.principal.as_ref(),
        &capability,
        Some(&department),
    ));
}

#[when(expr = "I check any of {string}")]
async fn when_check_any(world: &mut AccessWorld, capabilities: String) {
    world.last_check = Some(PermissionResolver::has_any_permission(
        world.principal.as_ref(),
        list(&capabilities).as_slice(),
        None,
    ));
}

#[when(expr = "I check all of {string}")]
async fn when_check_all(world: &mut AccessWorld, capabilities: String) {
    world.last_check = Some(PermissionResolver::has_all_permissions(
        world.principal.as_ref(),
        list(&capabilities).as_slice(),
        None,
    ));
}

#[when(expr = "I check role {string}")]
async fn when_check_role(world: &mut AccessWorld, role: String) {
    world.last_check = Some(PermissionResolver::has_role(world.principal.as_ref(), &role, None));
}

#[when(expr = "I check role {string} in department {string}")]
async fn when_check_role_in_department(world: &mut AccessWorld, role: String, department: String) {
    world.last_check =
        Some(PermissionResolver::has_role(world.principal.as_ref(), &role, Some(&department)));
}

// ==================== OUTCOMES ====================

#[then(expr = "the check is granted")]
async fn then_granted(world: &mut AccessWorld) {
    assert!(world.check_result(), "expected the check to be granted");
}

#[then(expr = "the check is denied")]
async fn then_denied(world: &mut AccessWorld) {
    assert!(!world.check_result(), "expected the check to be denied");
}

#[then(expr = "the snapshot is rejected with {string}")]
async fn then_snapshot_rejected(world: &mut AccessWorld, message: String) {
    let error = world.last_error.as_deref().expect("the snapshot was accepted");
    assert!(error.contains(&message), "`{}` does not mention `{}`", error, message);
}
