use crate::features::world::AccessWorld;
use coursegate_core::Principal;
use cucumber::{given, then, when};

#[given(expr = "the principal has logged in")]
async fn given_logged_in(world: &mut AccessWorld) {
    let principal = world.principal.clone().unwrap_or_else(Principal::new);
    world.session.establish(principal);
}

#[when(expr = "the session switches to department {string}")]
async fn when_switch_department(world: &mut AccessWorld, department: String) {
    assert!(world.session.switch_department(Some(department)), "nobody is logged in");
}

#[when(expr = "the session enters an admin session")]
async fn when_enter_admin_session(world: &mut AccessWorld) {
    assert!(world.session.set_admin_session(true), "nobody is logged in");
}

#[when(expr = "the session logs out")]
async fn when_logout(world: &mut AccessWorld) {
    world.session.logout();
}

#[when(expr = "the session reads its flags")]
async fn when_session_flags(world: &mut AccessWorld) {
    world.flags = Some(world.session.flags());
}

#[then(expr = "the session can {string}")]
async fn then_session_can(world: &mut AccessWorld, capability: String) {
    assert!(world.session.can(&capability), "session should be granted {}", capability);
}

#[then(expr = "the session cannot {string}")]
async fn then_session_cannot(world: &mut AccessWorld, capability: String) {
    assert!(!world.session.can(&capability), "session should be denied {}", capability);
}

#[then(expr = "the session has role {string}")]
async fn then_session_has_role(world: &mut AccessWorld, role: String) {
    assert!(world.session.has_role(&role));
}

#[then(expr = "the session does not have role {string}")]
async fn then_session_lacks_role(world: &mut AccessWorld, role: String) {
    assert!(!world.session.has_role(&role));
}

#[then(expr = "the flag cache recorded {int} hit(s) and {int} miss(es)")]
async fn then_cache_counters(world: &mut AccessWorld, hits: u64, misses: u64) {
    let cache = world.session.cache();
    assert_eq!((cache.hits(), cache.misses()), (hits, misses));
}
