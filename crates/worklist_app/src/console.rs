//! Console prompts and the OS file-association opener.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use batch_logging::batch_warn;

/// Print `prompt` and block until the user presses Enter.
pub fn wait_for_enter(prompt: &str) -> io::Result<()> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

/// Yes/no prompt: `y` (any case) confirms, anything else declines.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

/// Hand the file to the OS default application.
///
/// Launch failure is not fatal; the operator can open the file by hand.
pub fn open_in_viewer(path: &Path) {
    if let Err(err) = opener_command(path).spawn() {
        batch_warn!("Could not open {:?} automatically: {}", path, err);
        println!("Open {} manually to continue.", path.display());
    }
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
