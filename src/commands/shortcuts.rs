use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::core::shortcuts;

/// List every shortcut and the command it expands to
pub fn execute(_argv: &[String], out: &mut dyn Write) -> Result<()> {
    let entries = shortcuts::list();
    let width = entries.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

    writeln!(out, "{}", "Valid shortcuts are:".white().bold())?;
    writeln!(out)?;
    for (shortcut, target) in entries {
        writeln!(
            out,
            "{} {} {}",
            format!("{:<width$}", shortcut, width = width).cyan(),
            "->".dimmed(),
            target
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Use 'talka help [command]' to learn more.")?;
    Ok(())
}
