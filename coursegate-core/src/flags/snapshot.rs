//! Flag identifiers and the derived snapshot type

use crate::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares the `Flag` enum and the `FeatureFlags` struct from one list so
/// the two can never drift apart.
macro_rules! feature_flags {
    ($( $(#[$doc:meta])* $field:ident => $variant:ident = $name:literal, )*) => {
        /// Identifier of a named feature flag
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Flag {
            $( $(#[$doc])* $variant, )*
        }

        impl Flag {
            /// All flags in declaration order
            pub const ALL: &'static [Flag] = &[$(Flag::$variant),*];

            /// camelCase name used by the presentation layer
            pub fn name(self) -> &'static str {
                match self {
                    $(Flag::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Flag> {
                match name {
                    $($name => Some(Flag::$variant),)*
                    _ => None,
                }
            }
        }

        /// Read-only snapshot of every feature flag
        ///
        /// The default value is the canonical all-false snapshot handed out for
        /// an absent principal.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct FeatureFlags {
            $( $(#[$doc])* #[serde(rename = $name, default)] pub $field: bool, )*
        }

        impl FeatureFlags {
            pub fn get(&self, flag: Flag) -> bool {
                match flag {
                    $(Flag::$variant => self.$field,)*
                }
            }

            pub(crate) fn set(&mut self, flag: Flag, value: bool) {
                match flag {
                    $(Flag::$variant => self.$field = value,)*
                }
            }
        }
    };
}

feature_flags! {
    /// User type includes global-admin
    is_global_admin => IsGlobalAdmin = "isGlobalAdmin",
    can_access_admin_panel => CanAccessAdminPanel = "canAccessAdminPanel",
    /// Requires an escalated admin session
    can_manage_system_settings => CanManageSystemSettings = "canManageSystemSettings",
    can_view_audit_logs => CanViewAuditLogs = "canViewAuditLogs",
    /// Requires an escalated admin session
    can_impersonate_users => CanImpersonateUsers = "canImpersonateUsers",
    can_manage_integrations => CanManageIntegrations = "canManageIntegrations",

    can_manage_courses => CanManageCourses = "canManageCourses",
    can_view_courses => CanViewCourses = "canViewCourses",
    can_manage_programs => CanManagePrograms = "canManagePrograms",
    can_view_programs => CanViewPrograms = "canViewPrograms",
    can_manage_modules => CanManageModules = "canManageModules",
    can_view_modules => CanViewModules = "canViewModules",
    can_manage_templates => CanManageTemplates = "canManageTemplates",
    can_view_templates => CanViewTemplates = "canViewTemplates",
    can_publish_content => CanPublishContent = "canPublishContent",

    can_manage_learners => CanManageLearners = "canManageLearners",
    can_view_learners => CanViewLearners = "canViewLearners",
    can_manage_enrollments => CanManageEnrollments = "canManageEnrollments",
    can_view_enrollments => CanViewEnrollments = "canViewEnrollments",

    /// FERPA-protected personal data
    can_view_pii => CanViewPii = "canViewPII",
    can_view_transcripts => CanViewTranscripts = "canViewTranscripts",
    can_release_records => CanReleaseRecords = "canReleaseRecords",

    can_manage_departments => CanManageDepartments = "canManageDepartments",
    can_view_departments => CanViewDepartments = "canViewDepartments",
    can_manage_department_users => CanManageDepartmentUsers = "canManageDepartmentUsers",

    can_manage_billing => CanManageBilling = "canManageBilling",
    can_view_billing => CanViewBilling = "canViewBilling",
    can_manage_subscriptions => CanManageSubscriptions = "canManageSubscriptions",

    can_export_data => CanExportData = "canExportData",
    can_view_reports => CanViewReports = "canViewReports",
    can_view_analytics => CanViewAnalytics = "canViewAnalytics",

    can_manage_classes => CanManageClasses = "canManageClasses",
    can_view_classes => CanViewClasses = "canViewClasses",
    can_manage_attendance => CanManageAttendance = "canManageAttendance",

    can_override_grades => CanOverrideGrades = "canOverrideGrades",
    can_grade_submissions => CanGradeSubmissions = "canGradeSubmissions",
    can_view_grading_queue => CanViewGradingQueue = "canViewGradingQueue",

    can_manage_settings => CanManageSettings = "canManageSettings",
    can_view_settings => CanViewSettings = "canViewSettings",
}

impl Flag {
    pub fn count() -> usize {
        Self::ALL.len()
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flag {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        Flag::from_name(s).ok_or_else(|| AccessError::UnknownFlag(s.to_string()))
    }
}

impl FeatureFlags {
    /// The canonical all-false snapshot
    pub fn none() -> Self {
        Self::default()
    }

    /// `(flag, value)` pairs in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (Flag, bool)> + '_ {
        Flag::ALL.iter().map(move |flag| (*flag, self.get(*flag)))
    }

    /// Flags that are set
    pub fn granted(&self) -> impl Iterator<Item = Flag> + '_ {
        self.entries().filter_map(|(flag, value)| value.then_some(flag))
    }

    pub fn is_none(&self) -> bool {
        self.granted().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for flag in Flag::ALL {
            assert_eq!(Flag::from_name(flag.name()), Some(*flag));
            assert_eq!(flag.name().parse::<Flag>().unwrap(), *flag);
        }
        assert!(matches!("canFly".parse::<Flag>(), Err(AccessError::UnknownFlag(_))));
    }

    #[test]
    fn test_set_and_get() {
        let mut flags = FeatureFlags::none();
        assert!(flags.is_none());

        flags.set(Flag::CanViewPii, true);
        assert!(flags.can_view_pii);
        assert!(flags.get(Flag::CanViewPii));
        assert_eq!(flags.granted().collect::<Vec<_>>(), vec![Flag::CanViewPii]);
        assert!(!flags.is_none());
    }

    #[test]
    fn test_serializes_with_presentation_names() {
        let mut flags = FeatureFlags::none();
        flags.set(Flag::CanViewPii, true);

        let json = serde_json::to_value(flags).unwrap();
        assert_eq!(json["canViewPII"], true);
        assert_eq!(json["canManageCourses"], false);
        assert_eq!(json.as_object().map(|o| o.len()), Some(Flag::count()));

        let decoded: FeatureFlags = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, flags);
    }
}
