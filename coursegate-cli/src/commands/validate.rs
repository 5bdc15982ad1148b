use super::{EXIT_INVALID, EXIT_OK};
use anyhow::Result;
use coursegate_core::Capability;
use std::io::Write;

/// Report the kind of each capability, or why it is malformed.
pub fn run(capabilities: &[String], out: &mut impl Write) -> Result<u8> {
    let mut malformed = 0usize;

    for capability in capabilities {
        match Capability::parse(capability) {
            Ok(parsed) if parsed.is_super_admin() => {
                writeln!(out, "{}: {} (grants everything)", capability, parsed.kind())?
            }
            Ok(parsed) => writeln!(out, "{}: {}", capability, parsed.kind())?,
            Err(err) => {
                malformed += 1;
                writeln!(out, "{}", err)?;
            }
        }
    }

    if malformed > 0 {
        log::debug!("{} of {} capabilities are malformed", malformed, capabilities.len());
        return Ok(EXIT_INVALID);
    }
    Ok(EXIT_OK)
}
