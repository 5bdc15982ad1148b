use super::{Context, EXIT_OK};
use anyhow::Result;
use coursegate_core::AccessSession;
use std::io::Write;
use std::path::Path;

/// Print the flags derived for the principal in `rights`.
pub fn run(
    ctx: &Context,
    rights: &Path,
    department: Option<&str>,
    only_granted: bool,
    json: bool,
    out: &mut impl Write,
) -> Result<u8> {
    let principal = ctx.load_principal(rights)?;
    let department = ctx.department(&principal, department).map(str::to_string);

    let mut session = AccessSession::from_config(&ctx.config.access);
    session.establish(principal);
    session.switch_department(department);
    let flags = session.flags();
    log::debug!(
        "Derived {} flags in department {}",
        flags.granted().count(),
        session.active_department().unwrap_or("none")
    );

    match (json, only_granted) {
        (true, false) => writeln!(out, "{}", serde_json::to_string_pretty(&flags)?)?,
        (true, true) => {
            let names: Vec<&str> = flags.granted().map(|flag| flag.name()).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
        }
        (false, _) => {
            for (flag, value) in flags.entries() {
                if value || !only_granted {
                    writeln!(out, "{:<26} {}", flag.name(), value)?;
                }
            }
        }
    }

    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use coursegate_core::config::CoursegateConfig;
    use coursegate_core::Flag;

    fn flags(department: Option<&str>, only_granted: bool, json: bool) -> String {
        let file = write_snapshot(STAFF_SNAPSHOT);
        let ctx = Context::new(CoursegateConfig::default());
        let (code, output) = render(|out| run(&ctx, file.path(), department, only_granted, json, out));
        assert_eq!(code, EXIT_OK);
        output
    }

    #[test]
    fn table_lists_every_flag() {
        let output = flags(None, false, false);
        assert_eq!(output.lines().count(), Flag::count());
        assert!(output.lines().any(|line| line.starts_with("canManageCourses") && line.ends_with("true")));
        assert!(output.lines().any(|line| line.starts_with("canViewBilling") && line.ends_with("false")));
    }

    #[test]
    fn only_granted_json() {
        let output = flags(None, true, true);
        let names: Vec<String> = serde_json::from_str(&output).unwrap();

        assert!(names.contains(&"canManageCourses".to_string()));
        assert!(names.contains(&"canViewPII".to_string()));
        assert!(names.contains(&"canExportData".to_string()));
        assert!(names.contains(&"canViewReports".to_string()));
        assert!(!names.contains(&"canViewBilling".to_string()));
    }

    #[test]
    fn department_override() {
        let output = flags(Some("dept-2"), false, true);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["canViewBilling"], true);
        assert_eq!(json["canManageCourses"], false);
        assert_eq!(json["canViewCourses"], true);
        assert_eq!(json["canViewPII"], false);
    }
}
