//! The static flag rule table
//!
//! Each row defines one flag as
//!
//! ```text
//! (any grant ∨ any implying flag ∨ any listed user type) ∧ (admin session, if required)
//! ```
//!
//! Rows are evaluated top to bottom and `implied_by` may only reference rows
//! above, so a view flag that lists its manage flag sees the final manage
//! value. That is how manage ⇒ view holds without a separate check.

use super::catalog::*;
use super::Flag;
use crate::rbac::UserType;
use std::fmt;

/// Definition of one feature flag
#[derive(Debug, Clone, Copy)]
pub struct FlagRule {
    pub flag: Flag,
    /// Capabilities checked with any-of semantics against the active department
    pub grants: &'static [&'static str],
    /// Flags whose truth implies this flag
    pub implied_by: &'static [Flag],
    /// User types that grant the flag directly
    pub user_types: &'static [UserType],
    /// Flag is only granted during an escalated admin session
    pub requires_admin_session: bool,
}

impl FlagRule {
    const fn new(flag: Flag, grants: &'static [&'static str]) -> Self {
        Self { flag, grants, implied_by: &[], user_types: &[], requires_admin_session: false }
    }

    const fn implied_by(mut self, flags: &'static [Flag]) -> Self {
        self.implied_by = flags;
        self
    }

    const fn user_types(mut self, user_types: &'static [UserType]) -> Self {
        self.user_types = user_types;
        self
    }

    const fn admin_session(mut self) -> Self {
        self.requires_admin_session = true;
        self
    }
}

impl fmt::Display for FlagRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clauses: Vec<String> = Vec::new();
        if !self.grants.is_empty() {
            clauses.push(format!("any({})", self.grants.join(", ")));
        }
        clauses.extend(self.implied_by.iter().map(|flag| flag.name().to_string()));
        clauses.extend(self.user_types.iter().map(|user_type| format!("userTypes has {}", user_type)));

        write!(f, "{} = {}", self.flag, clauses.join(" OR "))?;
        if self.requires_admin_session {
            write!(f, " AND isAdminActive")?;
        }
        Ok(())
    }
}

use Flag::*;

/// Every flag, in evaluation order
pub const RULES: &[FlagRule] = &[
    // System administration
    FlagRule::new(IsGlobalAdmin, &[]).user_types(&[UserType::GlobalAdmin]),
    FlagRule::new(CanAccessAdminPanel, &[SYSTEM_ADMIN, SYSTEM_SUPPORT, SYSTEM_ALL])
        .user_types(&[UserType::GlobalAdmin]),
    FlagRule::new(CanManageSystemSettings, &[SYSTEM_SETTINGS_MANAGE, SYSTEM_ADMIN, SYSTEM_ALL])
        .admin_session(),
    FlagRule::new(CanViewAuditLogs, &[SYSTEM_AUDIT_READ, SYSTEM_ADMIN, SYSTEM_ALL]),
    FlagRule::new(CanImpersonateUsers, &[SYSTEM_IMPERSONATE, SYSTEM_ALL]).admin_session(),
    FlagRule::new(CanManageIntegrations, &[SYSTEM_INTEGRATIONS_MANAGE, SYSTEM_ALL]),
    // Content
    FlagRule::new(CanManageCourses, &[COURSES_MANAGE, CONTENT_ALL]),
    FlagRule::new(CanViewCourses, &[COURSES_READ]).implied_by(&[CanManageCourses]),
    FlagRule::new(CanManagePrograms, &[PROGRAMS_MANAGE, CONTENT_ALL]),
    FlagRule::new(CanViewPrograms, &[PROGRAMS_READ]).implied_by(&[CanManagePrograms]),
    FlagRule::new(CanManageModules, &[MODULES_MANAGE, CONTENT_ALL]),
    FlagRule::new(CanViewModules, &[MODULES_READ]).implied_by(&[CanManageModules]),
    FlagRule::new(CanManageTemplates, &[TEMPLATES_MANAGE, CONTENT_ALL]),
    FlagRule::new(CanViewTemplates, &[TEMPLATES_READ]).implied_by(&[CanManageTemplates]),
    FlagRule::new(CanPublishContent, &[COURSES_PUBLISH, CONTENT_ALL]),
    // Learners
    FlagRule::new(CanManageLearners, &[LEARNER_PROFILES_MANAGE, LEARNER_ALL]),
    FlagRule::new(CanViewLearners, &[LEARNER_PROFILES_READ]).implied_by(&[CanManageLearners]),
    FlagRule::new(CanManageEnrollments, &[LEARNER_ENROLLMENTS_MANAGE, LEARNER_ALL]),
    FlagRule::new(CanViewEnrollments, &[LEARNER_ENROLLMENTS_READ])
        .implied_by(&[CanManageEnrollments]),
    // FERPA-protected data
    FlagRule::new(CanViewPii, &[LEARNER_PII_READ, LEARNER_ALL, FERPA_ALL]),
    FlagRule::new(CanViewTranscripts, &[LEARNER_TRANSCRIPTS_READ, LEARNER_ALL, FERPA_ALL]),
    FlagRule::new(CanReleaseRecords, &[FERPA_RECORDS_RELEASE, FERPA_ALL]),
    // Departments
    FlagRule::new(CanManageDepartments, &[DEPARTMENT_SETTINGS_MANAGE, DEPARTMENT_ALL]),
    FlagRule::new(CanViewDepartments, &[DEPARTMENT_SETTINGS_READ])
        .implied_by(&[CanManageDepartments]),
    FlagRule::new(CanManageDepartmentUsers, &[DEPARTMENT_USERS_MANAGE, DEPARTMENT_ALL]),
    // Billing
    FlagRule::new(CanManageBilling, &[BILLING_INVOICES_WRITE, BILLING_ALL]),
    FlagRule::new(CanViewBilling, &[BILLING_INVOICES_READ]).implied_by(&[CanManageBilling]),
    FlagRule::new(CanManageSubscriptions, &[BILLING_SUBSCRIPTIONS_MANAGE, BILLING_ALL]),
    // Reporting
    FlagRule::new(CanExportData, &[REPORTS_EXPORT, REPORTS_ALL, SYSTEM_ADMIN, SYSTEM_ALL]),
    FlagRule::new(CanViewReports, &[REPORTS_VIEW, REPORTS_ALL]).implied_by(&[CanExportData]),
    FlagRule::new(CanViewAnalytics, &[REPORTS_ANALYTICS_READ, REPORTS_ALL]),
    // Classes
    FlagRule::new(CanManageClasses, &[CLASS_SESSIONS_MANAGE, CLASS_ALL]),
    FlagRule::new(CanViewClasses, &[CLASS_SESSIONS_READ]).implied_by(&[CanManageClasses]),
    FlagRule::new(CanManageAttendance, &[CLASS_ATTENDANCE_MANAGE, CLASS_ALL]),
    // Grading
    FlagRule::new(CanOverrideGrades, &[GRADES_OVERRIDE, GRADING_ALL]),
    FlagRule::new(CanGradeSubmissions, &[SUBMISSIONS_GRADE, GRADING_ALL])
        .implied_by(&[CanOverrideGrades]),
    FlagRule::new(CanViewGradingQueue, &[GRADING_QUEUE_READ]).implied_by(&[CanGradeSubmissions]),
    // Organization settings
    FlagRule::new(CanManageSettings, &[SETTINGS_MANAGE, SETTINGS_ALL]),
    FlagRule::new(CanViewSettings, &[SETTINGS_READ]).implied_by(&[CanManageSettings]),
];

/// Look up the rule defining `flag`
pub fn rule_for(flag: Flag) -> Option<&'static FlagRule> {
    RULES.iter().find(|rule| rule.flag == flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbac::Capability;

    #[test]
    fn test_every_flag_has_exactly_one_rule() {
        for flag in Flag::ALL {
            let count = RULES.iter().filter(|rule| rule.flag == *flag).count();
            assert_eq!(count, 1, "{} has {} rules", flag, count);
        }
        assert_eq!(RULES.len(), Flag::count());
    }

    #[test]
    fn test_implications_point_backwards() {
        for (index, rule) in RULES.iter().enumerate() {
            for implied in rule.implied_by {
                let position = RULES.iter().position(|r| r.flag == *implied);
                assert!(
                    matches!(position, Some(p) if p < index),
                    "{} is implied by {} which is not evaluated earlier",
                    rule.flag,
                    implied
                );
            }
        }
    }

    #[test]
    fn test_grants_are_well_formed() {
        for rule in RULES {
            for grant in rule.grants {
                assert!(Capability::parse(grant).is_ok(), "{}: `{}`", rule.flag, grant);
            }
        }
    }

    #[test]
    fn test_display_formula() {
        let rule = rule_for(Flag::CanAccessAdminPanel).unwrap();
        assert_eq!(
            rule.to_string(),
            "canAccessAdminPanel = any(system:admin, system:support, system:*) OR userTypes has global-admin"
        );

        let rule = rule_for(Flag::CanViewCourses).unwrap();
        assert_eq!(rule.to_string(), "canViewCourses = any(content:courses:read) OR canManageCourses");

        let rule = rule_for(Flag::CanImpersonateUsers).unwrap();
        assert!(rule.to_string().ends_with(" AND isAdminActive"));
    }
}
