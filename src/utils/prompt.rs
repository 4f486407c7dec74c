use std::io::{BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use eyre::Result;

/// Asks for the resume path. `None` means the user wants to quit.
pub fn ask_resume_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<PathBuf>> {
    loop {
        write!(
            output,
            "{}",
            "Resume file (.pdf, .docx, .txt) or 'q' to quit: ".cyan()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim() {
            "" => writeln!(output, "{}", "Please enter a file path.".red())?,
            "q" | "quit" => return Ok(None),
            path => return Ok(Some(PathBuf::from(path))),
        }
    }
}

/// Reads a multi-line job description terminated by an empty line.
/// `None` means input ended before anything was typed.
pub fn ask_job_description<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    writeln!(
        output,
        "{}",
        "Paste the job description, then press Enter on an empty line:".cyan()
    )?;
    output.flush()?;

    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            if lines.is_empty() {
                return Ok(None);
            }
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            break;
        }
        lines.push(line.to_string());
    }

    Ok(Some(lines.join("\n")))
}

pub fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    loop {
        write!(output, "\n{} ", format!("{} (y/n):", question).cyan())?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }

        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "{}", "Please enter 'y' or 'n'.".red())?,
        }
    }
}
