use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;

/// Read one line from stdin with the trailing newline removed. The prompt is
/// written to stderr only when stdin is a terminal.
pub fn read_line(prompt: &str) -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        let mut stderr = std::io::stderr();
        write!(stderr, "{prompt}").context("failed to write prompt")?;
        stderr.flush().context("failed to flush prompt")?;
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(trim_newline(&line).to_string())
}

/// Prompt for a secret on the terminal without echoing it. Returns `None`
/// when stdin is not a terminal.
pub fn read_password(prompt: &str) -> anyhow::Result<Option<String>> {
    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let password = rpassword::prompt_password(prompt).context("failed to read password")?;
    Ok(Some(password))
}

fn trim_newline(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}
