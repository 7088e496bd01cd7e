use color_eyre::Result;
use dialoguer::{Confirm, Input, Password};

pub fn prompt_string(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Masked input for passwords.
pub fn prompt_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read password: {}", e))
}

pub fn prompt_confirm(prompt: &str, default: bool) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}

/// Prompt for a small number, re-asking until the input parses.
pub fn prompt_number(prompt: &str) -> Result<u8> {
    loop {
        let input = prompt_string(prompt)?;
        match input.trim().parse::<u8>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                eprintln!("Invalid input. Please enter a valid number.");
                continue;
            }
        }
    }
}
