//! Console output helpers.

use std::io::{self, Write};

/// Light separator between menu rounds.
pub const RULE: &str = "----------------------------------------";
/// Heavy separator framing the application banner.
pub const RULE_HEAVY: &str = "========================================";

/// Print the light separator.
pub fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{RULE}")
}
