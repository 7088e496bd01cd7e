use cinemix_config::Config;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};

use crate::context::AppContext;
use crate::i18n;
use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;

pub fn run_config(ctx: &AppContext, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(ctx, output),
        ConfigCommands::SetUrl { url } => set_url(ctx, url, output),
        ConfigCommands::SetLanguage { language } => set_language(ctx, language, output),
    }
}

fn show_config(ctx: &AppContext, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();

    match output.format() {
        OutputFormat::Human => {
            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
                Cell::new(config_file.display().to_string()),
            ]);
            table.add_row(vec![Cell::new("api_url"), Cell::new(&ctx.config.api_url)]);
            table.add_row(vec![Cell::new("language"), Cell::new(&ctx.config.language)]);
            table.add_row(vec![
                Cell::new("session"),
                Cell::new(if ctx.session.is_authenticated() {
                    ctx.session
                        .user()
                        .map(|user| user.username.clone())
                        .unwrap_or_default()
                } else {
                    "-".to_string()
                }),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            output.println(table.to_string());
        }
        _ => output.value(&serde_json::json!({
            "config_file": config_file.display().to_string(),
            "api_url": ctx.config.api_url,
            "language": ctx.config.language,
            "authenticated": ctx.session.is_authenticated(),
        })),
    }
    Ok(())
}

// Settings writes always go through the stored file, never the effective
// (flag/env overridden) values.
fn set_url(ctx: &AppContext, url: String, output: &Output) -> Result<()> {
    let path = ctx.paths.config_file();
    let mut stored = Config::load_or_default(&path)
        .map_err(|err| eyre!("Failed to load config from {}: {}", path.display(), err))?;
    stored.api_url = url.trim_end_matches('/').to_string();
    stored
        .save_to_file(&path)
        .map_err(|err| eyre!("Failed to save config to {}: {}", path.display(), err))?;
    output.success(format!("api_url = {}", stored.api_url));
    Ok(())
}

fn set_language(ctx: &AppContext, language: String, output: &Output) -> Result<()> {
    if !i18n::SUPPORTED_LOCALES.contains(&language.as_str()) {
        output.error(format!(
            "Unsupported language '{}'. Supported: {}",
            language,
            i18n::SUPPORTED_LOCALES.join(", ")
        ));
        std::process::exit(1);
    }

    let path = ctx.paths.config_file();
    let mut stored = Config::load_or_default(&path)
        .map_err(|err| eyre!("Failed to load config from {}: {}", path.display(), err))?;
    stored.language = language;
    stored
        .save_to_file(&path)
        .map_err(|err| eyre!("Failed to save config to {}: {}", path.display(), err))?;
    output.success(format!("language = {}", stored.language));
    Ok(())
}
