use super::{Context, EXIT_DENIED, EXIT_OK};
use anyhow::Result;
use clap::ValueEnum;
use coursegate_core::PermissionResolver;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckMode {
    /// At least one capability must be granted
    Any,
    /// Every capability must be granted
    All,
}

/// Evaluate `capabilities` for the principal in `rights`.
///
/// Prints one line per capability followed by the overall verdict.
pub fn run(
    ctx: &Context,
    rights: &Path,
    department: Option<&str>,
    mode: CheckMode,
    capabilities: &[String],
    out: &mut impl Write,
) -> Result<u8> {
    let principal = ctx.load_principal(rights)?;
    let department = ctx.department(&principal, department);

    for capability in capabilities {
        let granted = PermissionResolver::has_permission(Some(&principal), capability, department);
        writeln!(out, "{:<8} {}", verdict(granted), capability)?;
    }

    let granted = match mode {
        CheckMode::Any => PermissionResolver::has_any_permission(Some(&principal), capabilities, department),
        CheckMode::All => PermissionResolver::has_all_permissions(Some(&principal), capabilities, department),
    };
    writeln!(out, "{}", verdict(granted))?;

    Ok(if granted { EXIT_OK } else { EXIT_DENIED })
}

fn verdict(granted: bool) -> &'static str {
    if granted {
        "granted"
    } else {
        "denied"
    }
}
