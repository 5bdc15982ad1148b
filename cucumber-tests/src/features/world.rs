use coursegate_core::{AccessSession, FeatureFlags, Principal};
use cucumber::World as CucumberWorld;

/// State shared by the steps of one scenario
#[derive(Debug, Default, CucumberWorld)]
pub struct AccessWorld {
    /// Principal under construction; `None` means logged out
    pub principal: Option<Principal>,
    pub session: AccessSession,
    pub last_check: Option<bool>,
    pub flags: Option<FeatureFlags>,
    pub last_error: Option<String>,
}

impl AccessWorld {
    /// Apply a builder step to the principal, creating it if needed
    pub fn update_principal(&mut self, change: impl FnOnce(Principal) -> Principal) {
        let principal = self.principal.take().unwrap_or_default();
        self.principal = Some(change(principal));
    }

    pub fn check_result(&self) -> bool {
        self.last_check.expect("no check was performed")
    }

    pub fn derived_flags(&self) -> FeatureFlags {
        self.flags.expect("flags were not derived")
    }
}

/// Split a comma-separated step argument, dropping blanks
pub fn list(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Parse a `true`/`false` step argument
pub fn boolean(value: &str) -> bool {
    match value {
        "true" | "granted" => true,
        "false" | "denied" => false,
        other => panic!("expected true or false, got `{}`", other),
    }
}
