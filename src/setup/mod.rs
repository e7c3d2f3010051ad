//! Setup orchestration: one-time template specialization, premake
//! availability check, and hand-off to the build-file generator.

pub mod dependency_checker;
pub mod prompts;

pub use dependency_checker::PremakeStatus;

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::generator;
use crate::project::ProjectConfig;
use prompts::{read_project_kind, read_reply};

/// Run the whole setup sequence against the repository root, reading replies
/// from `input` and writing prompts and status to `output`.
pub fn run(root: &Path, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let premake = PremakeStatus::check();
    configure_and_generate(root, &premake, input, output)
}

/// Setup sequence with the premake probe already resolved. Split out so the
/// flow can be driven in tests without touching the host toolchain.
fn configure_and_generate(
    root: &Path,
    premake: &PremakeStatus,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let config = ProjectConfig::new(root);

    if config.is_unconfigured() {
        let namespace = read_reply("Enter the top level name for the repo...\n", input, output)?;
        config.apply_namespace(&namespace)?;

        let project_name = read_reply(
            "Enter the name for the template project...\n",
            input,
            output,
        )?;
        let kind = read_project_kind(input, output)?;

        // Type tokens live in the template's build file, so substitute them
        // before the rename; the name substitution needs the renamed path.
        config.apply_kind(kind)?;
        config.finalize_rename(&project_name)?;
        config.apply_name(&project_name)?;

        writeln!(
            output,
            "{} Project '{}' configured",
            "✓".green(),
            project_name.green()
        )?;
    }

    if premake.found {
        match (&premake.version, &premake.path) {
            (Some(version), Some(path)) => {
                writeln!(output, "\nRunning premake {version} ({})...", path.display())?
            }
            (Some(version), None) => writeln!(output, "\nRunning premake {version}...")?,
            _ => writeln!(output, "\nRunning premake...")?,
        }
        generator::generate(root)?;
        writeln!(output, "\nSetup completed!")?;
    } else {
        writeln!(
            output,
            "{}",
            "premake5 is required to generate project files, but was not found.".red()
        )?;
        writeln!(output, "Install it and re-run this tool.")?;
    }

    Ok(())
}
