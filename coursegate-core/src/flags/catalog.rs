//! Capability constants referenced by the feature-flag rules
//!
//! Keeping the strings in one place means a renamed right only has to change
//! here. Wildcards are listed next to the concrete rights they cover.

// =============================================================================
// System administration
// =============================================================================

pub const SYSTEM_ALL: &str = "system:*";
pub const SYSTEM_ADMIN: &str = "system:admin";
pub const SYSTEM_SUPPORT: &str = "system:support";
pub const SYSTEM_SETTINGS_MANAGE: &str = "system:settings:manage";
pub const SYSTEM_AUDIT_READ: &str = "system:audit:read";
pub const SYSTEM_IMPERSONATE: &str = "system:impersonate";
pub const SYSTEM_INTEGRATIONS_MANAGE: &str = "system:integrations:manage";

// =============================================================================
// Content (courses, programs, modules, templates)
// =============================================================================

pub const CONTENT_ALL: &str = "content:*";
pub const COURSES_MANAGE: &str = "content:courses:manage";
pub const COURSES_READ: &str = "content:courses:read";
pub const COURSES_PUBLISH: &str = "content:courses:publish";
pub const PROGRAMS_MANAGE: &str = "content:programs:manage";
pub const PROGRAMS_READ: &str = "content:programs:read";
pub const MODULES_MANAGE: &str = "content:modules:manage";
pub const MODULES_READ: &str = "content:modules:read";
pub const TEMPLATES_MANAGE: &str = "content:templates:manage";
pub const TEMPLATES_READ: &str = "content:templates:read";

// =============================================================================
// Learners
// =============================================================================

pub const LEARNER_ALL: &str = "learner:*";
pub const LEARNER_PROFILES_MANAGE: &str = "learner:profiles:manage";
pub const LEARNER_PROFILES_READ: &str = "learner:profiles:read";
pub const LEARNER_ENROLLMENTS_MANAGE: &str = "learner:enrollments:manage";
pub const LEARNER_ENROLLMENTS_READ: &str = "learner:enrollments:read";
pub const LEARNER_PII_READ: &str = "learner:pii:read";
pub const LEARNER_TRANSCRIPTS_READ: &str = "learner:transcripts:read";

// =============================================================================
// FERPA-protected records
// =============================================================================

pub const FERPA_ALL: &str = "ferpa:*";
pub const FERPA_RECORDS_RELEASE: &str = "ferpa:records:release";

// =============================================================================
// Departments
// =============================================================================

pub const DEPARTMENT_ALL: &str = "department:*";
pub const DEPARTMENT_SETTINGS_MANAGE: &str = "department:settings:manage";
pub const DEPARTMENT_SETTINGS_READ: &str = "department:settings:read";
pub const DEPARTMENT_USERS_MANAGE: &str = "department:users:manage";

// =============================================================================
// Billing
// =============================================================================

pub const BILLING_ALL: &str = "billing:*";
pub const BILLING_INVOICES_WRITE: &str = "billing:invoices:write";
pub const BILLING_INVOICES_READ: &str = "billing:invoices:read";
pub const BILLING_SUBSCRIPTIONS_MANAGE: &str = "billing:subscriptions:manage";

// =============================================================================
// Reporting
// =============================================================================

pub const REPORTS_ALL: &str = "reports:*";
pub const REPORTS_VIEW: &str = "reports:view";
pub const REPORTS_EXPORT: &str = "reports:export";
pub const REPORTS_ANALYTICS_READ: &str = "reports:analytics:read";

// =============================================================================
// Classes
// =============================================================================

pub const CLASS_ALL: &str = "class:*";
pub const CLASS_SESSIONS_MANAGE: &str = "class:sessions:manage";
pub const CLASS_SESSIONS_READ: &str = "class:sessions:read";
pub const CLASS_ATTENDANCE_MANAGE: &str = "class:attendance:manage";

// =============================================================================
// Grading
// =============================================================================

pub const GRADING_ALL: &str = "grading:*";
pub const GRADES_OVERRIDE: &str = "grading:grades:override";
pub const SUBMISSIONS_GRADE: &str = "grading:submissions:grade";
pub const GRADING_QUEUE_READ: &str = "grading:queue:read";

// =============================================================================
// Organization settings
// =============================================================================

pub const SETTINGS_ALL: &str = "settings:*";
pub const SETTINGS_MANAGE: &str = "settings:organization:manage";
pub const SETTINGS_READ: &str = "settings:organization:read";

/// Every capability named above
pub const ALL_CAPABILITIES: &[&str] = &[
    SYSTEM_ALL,
    SYSTEM_ADMIN,
    SYSTEM_SUPPORT,
    SYSTEM_SETTINGS_MANAGE,
    SYSTEM_AUDIT_READ,
    SYSTEM_IMPERSONATE,
    SYSTEM_INTEGRATIONS_MANAGE,
    CONTENT_ALL,
    COURSES_MANAGE,
    COURSES_READ,
    COURSES_PUBLISH,
    PROGRAMS_MANAGE,
    PROGRAMS_READ,
    MODULES_MANAGE,
    MODULES_READ,
    TEMPLATES_MANAGE,
    TEMPLATES_READ,
    LEARNER_ALL,
    LEARNER_PROFILES_MANAGE,
    LEARNER_PROFILES_READ,
    LEARNER_ENROLLMENTS_MANAGE,
    LEARNER_ENROLLMENTS_READ,
    LEARNER_PII_READ,
    LEARNER_TRANSCRIPTS_READ,
    FERPA_ALL,
    FERPA_RECORDS_RELEASE,
    DEPARTMENT_ALL,
    DEPARTMENT_SETTINGS_MANAGE,
    DEPARTMENT_SETTINGS_READ,
    DEPARTMENT_USERS_MANAGE,
    BILLING_ALL,
    BILLING_INVOICES_WRITE,
    BILLING_INVOICES_READ,
    BILLING_SUBSCRIPTIONS_MANAGE,
    REPORTS_ALL,
    REPORTS_VIEW,
    REPORTS_EXPORT,
    REPORTS_ANALYTICS_READ,
    CLASS_ALL,
    CLASS_SESSIONS_MANAGE,
    CLASS_SESSIONS_READ,
    CLASS_ATTENDANCE_MANAGE,
    GRADING_ALL,
    GRADES_OVERRIDE,
    SUBMISSIONS_GRADE,
    GRADING_QUEUE_READ,
    SETTINGS_ALL,
    SETTINGS_MANAGE,
    SETTINGS_READ,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbac::Capability;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_well_formed() {
        for capability in ALL_CAPABILITIES {
            assert!(Capability::parse(capability).is_ok(), "`{}` is malformed", capability);
        }
    }

    #[test]
    fn test_catalog_has_no_duplicates() {
        let unique: HashSet<&str> = ALL_CAPABILITIES.iter().copied().collect();
        assert_eq!(unique.len(), ALL_CAPABILITIES.len());
    }
}
