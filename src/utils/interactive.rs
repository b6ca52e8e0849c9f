use anyhow::{Result, anyhow};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, style,
    terminal::{self, ClearType},
};
use std::io::{self, Write};

use crate::utils::output::OutputStyle;

/// Minimum typed characters before a completion is offered
const MIN_COMPLETION_PREFIX: usize = 2;

pub fn prompt_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(anyhow!("Input closed"));
    }

    Ok(input.trim().to_string())
}

pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_input(&format!("{} [y/N]: ", prompt))?;
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}

/// Ask for an integer within `min..=max`, re-prompting until one is given
pub fn prompt_number_in_range(label: &str, min: u32, max: u32, default: u32) -> Result<u32> {
    loop {
        let input = prompt_input(&format!(
            "{} ({}-{}) [{}]: ",
            OutputStyle::label(label),
            min,
            max,
            default
        ))?;

        match parse_bounded(&input, min, max, default) {
            Ok(value) => return Ok(value),
            Err(message) => println!("⚠️  {}", OutputStyle::warning(&message)),
        }
    }
}

/// Parse a bounded integer; an empty entry selects the default
pub fn parse_bounded(input: &str, min: u32, max: u32, default: u32) -> std::result::Result<u32, String> {
    if input.is_empty() {
        return Ok(default);
    }

    match input.parse::<u32>() {
        Ok(value) if (min..=max).contains(&value) => Ok(value),
        Ok(_) => Err(format!("Please enter a value between {} and {}", min, max)),
        Err(_) => Err(format!("'{}' is not a whole number", input)),
    }
}

/// Numbered choice prompt; accepts the number or the exact option text
pub fn prompt_choice(label: &str, options: &[&str]) -> Result<String> {
    println!("{}:", OutputStyle::label(label));
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }

    loop {
        let input = prompt_input(&format!("Select 1-{} [1]: ", options.len()))?;
        match resolve_choice(&input, options) {
            Some(choice) => return Ok(choice.to_string()),
            None => println!("⚠️  {}", OutputStyle::warning("Please pick one of the listed options")),
        }
    }
}

/// Resolve a numbered-choice entry; empty selects the first option
pub fn resolve_choice<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    if input.is_empty() {
        return options.first().copied();
    }

    if let Ok(index) = input.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| options.get(i)).copied();
    }

    options.iter().find(|o| **o == input).copied()
}

/// First suggestion extending `input`, returned as the missing suffix
pub fn completion_suffix<'a>(input: &str, suggestions: &'a [String]) -> Option<&'a str> {
    if input.chars().count() < MIN_COMPLETION_PREFIX {
        return None;
    }

    suggestions
        .iter()
        .find(|s| s.starts_with(input) && s.as_str() != input)
        .map(|s| &s[input.len()..])
}

fn redraw_line(prompt: &str, input: &str, suffix: &str) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        style::Print(prompt),
        style::Print(input),
        style::Print(OutputStyle::muted(suffix))
    )?;

    let pending = suffix.chars().count() as u16;
    if pending > 0 {
        execute!(stdout, cursor::MoveLeft(pending))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Line input with inline completion: Tab accepts, Esc cancels
pub fn prompt_input_with_autocomplete(prompt: &str, suggestions: &[String]) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    terminal::enable_raw_mode()?;

    let result = (|| -> Result<String> {
        let mut input = String::new();

        loop {
            let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }

            match code {
                KeyCode::Char(c) => input.push(c),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Tab => {
                    if let Some(suffix) = completion_suffix(&input, suggestions) {
                        input.push_str(suffix);
                    }
                }
                KeyCode::Enter => break,
                KeyCode::Esc => return Err(anyhow!("Input cancelled by user")),
                _ => continue,
            }

            let suffix = completion_suffix(&input, suggestions).unwrap_or("");
            redraw_line(prompt, &input, suffix)?;
        }

        Ok(input.trim().to_string())
    })();

    terminal::disable_raw_mode()?;
    println!();
    result
}
