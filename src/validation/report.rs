use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use super::ValidationOutcome;

const WARNINGS_HEADER: &str = "The following validation warnings occurred";
const ERRORS_HEADER: &str = "The following validation errors occurred";

impl ValidationOutcome {
    /// Writes warnings, then errors, one per line.
    ///
    /// # Errors
    ///
    /// Returns an error when writing to `out` fails.
    pub fn write_report<W: Write>(&self, out: &mut W, color: bool) -> std::io::Result<()> {
        write_section(out, WARNINGS_HEADER, &self.warnings, Color::Yellow, color)?;
        write_section(out, ERRORS_HEADER, &self.errors, Color::Red, color)?;
        out.flush()
    }
}

fn write_section<W: Write>(
    out: &mut W,
    header: &str,
    messages: &[String],
    color: Color,
    use_color: bool,
) -> std::io::Result<()> {
    if messages.is_empty() {
        return Ok(());
    }

    queue!(out, Print("\n"))?;
    write_colored_line(out, header, color, use_color)?;
    for message in messages {
        write_colored_line(out, &format!("   - {}", message), color, use_color)?;
    }
    Ok(())
}

fn write_colored_line<W: Write>(
    out: &mut W,
    text: &str,
    color: Color,
    use_color: bool,
) -> std::io::Result<()> {
    if use_color {
        queue!(out, SetForegroundColor(color), Print(text), ResetColor)?;
    } else {
        queue!(out, Print(text))?;
    }
    queue!(out, Print("\n"))
}
