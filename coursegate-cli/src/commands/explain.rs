use super::EXIT_OK;
use anyhow::{Context as _, Result};
use coursegate_core::flags::{rule_for, Flag};
use std::io::Write;

/// Print the rule row defining `flag`.
pub fn run(flag: &str, out: &mut impl Write) -> Result<u8> {
    let flag: Flag = flag.parse()?;
    let rule = rule_for(flag).with_context(|| format!("No rule defines {}", flag))?;
    writeln!(out, "{}", rule)?;
    Ok(EXIT_OK)
}
