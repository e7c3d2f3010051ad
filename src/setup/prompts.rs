//! Interactive prompt helpers over injected reader/writer handles.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};

use crate::project::ProjectKind;

/// Attempt limit for the project-type prompt. Inherited behavior was an
/// unbounded loop; bounding it gives automated callers a failure path
/// instead of a hang.
pub const MAX_KIND_ATTEMPTS: u32 = 5;

/// Print `prompt` and read one trimmed reply line. End of input counts as
/// cancellation and is an error, not an empty reply.
pub fn read_reply(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut reply = String::new();
    if input.read_line(&mut reply)? == 0 {
        bail!("input closed while waiting for a reply");
    }
    Ok(reply.trim().to_string())
}

/// Ask for the project binary type. Invalid replies re-prompt, up to
/// [`MAX_KIND_ATTEMPTS`] times.
pub fn read_project_kind(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<ProjectKind> {
    for _ in 0..MAX_KIND_ATTEMPTS {
        let reply = read_reply(
            "Please choose binary type of project, executable or library? [E/L]: ",
            input,
            output,
        )?;
        if let Some(kind) = ProjectKind::from_reply(&reply) {
            return Ok(kind);
        }
    }
    bail!("no valid project type after {MAX_KIND_ATTEMPTS} attempts, expected E or L");
}
