use crate::features::world::{boolean, AccessWorld};
use coursegate_core::flags::RULES;
use coursegate_core::{derive_feature_flags, FeatureFlags, Flag};
use cucumber::{then, when};

#[when(expr = "the feature flags are derived")]
async fn when_flags_derived(world: &mut AccessWorld) {
    let principal = world.principal.as_ref();
    let active_department = principal.and_then(|p| p.active_department());
    world.flags = Some(derive_feature_flags(principal, active_department));
}

#[when(expr = "the feature flags are derived in department {string}")]
async fn when_flags_derived_in(world: &mut AccessWorld, department: String) {
    world.flags = Some(derive_feature_flags(world.principal.as_ref(), Some(&department)));
}

#[then(expr = "flag {string} is {word}")]
async fn then_flag_is(world: &mut AccessWorld, name: String, value: String) {
    let flag: Flag = name.parse().expect("unknown flag");
    let expected = boolean(&value);
    assert_eq!(world.derived_flags().get(flag), expected, "{} should be {}", flag, expected);
}

#[then(expr = "flags {string} are all true")]
async fn then_flags_all_true(world: &mut AccessWorld, names: String) {
    let flags = world.derived_flags();
    for name in crate::features::world::list(&names) {
        let flag: Flag = name.parse().expect("unknown flag");
        assert!(flags.get(flag), "{} should be true", flag);
    }
}

#[then(expr = "every flag is false")]
async fn then_all_false(world: &mut AccessWorld) {
    let flags = world.derived_flags();
    assert_eq!(flags, FeatureFlags::none(), "granted: {:?}", flags.granted().collect::<Vec<_>>());
}

#[then(expr = "every implied flag follows its implying flag")]
async fn then_implications_hold(world: &mut AccessWorld) {
    let flags = world.derived_flags();
    for rule in RULES {
        for implying in rule.implied_by {
            if flags.get(*implying) {
                assert!(flags.get(rule.flag), "{} is set but {} is not", implying, rule.flag);
            }
        }
    }
}
