use cinemix_api::{ApiError, RegisterPayload};
use cinemix_core::{validate_registration, PasswordCheck, RegistrationForm};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use tracing::error;

use super::prompts;
use crate::context::AppContext;
use crate::i18n::Catalog;
use crate::output::{Output, OutputFormat};

pub async fn run_login(
    ctx: &mut AppContext,
    username: Option<String>,
    output: &Output,
) -> Result<()> {
    let t = &ctx.catalog;
    let username = match username {
        Some(username) => username,
        None => prompts::prompt_string(&t.text("loginPage.username"))?,
    };
    let password = prompts::prompt_password(&t.text("loginPage.password"))?;

    let mut gateway = ctx.gateway();
    // Token exchange first, then the profile fetch with the fresh token.
    // Either failing means the login failed as a whole.
    let result = async {
        gateway.login(&username, &password, &mut ctx.credentials).await?;
        gateway.me().await
    }
    .await;

    match result {
        Ok(user) => {
            ctx.session
                .set_user(Some(user.clone()))
                .map_err(|err| eyre!("Failed to persist session: {}", err))?;
            output.success(t.text_with("loginPage.welcome", &[("name", &user.username)]));
            Ok(())
        }
        Err(err) => {
            error!(error = %err, %username, "Login failed");
            output.error(t.text("loginPage.failed"));
            std::process::exit(1);
        }
    }
}

pub async fn run_register(ctx: &AppContext, output: &Output) -> Result<()> {
    let t = &ctx.catalog;
    let username = prompts::prompt_string(&t.text("registerPage.username"))?;
    let email = prompts::prompt_string(&t.text("registerPage.email"))?;

    // Re-prompt until all four requirements hold, rendering the checklist
    // after each attempt like the web form does on every keystroke.
    let password = loop {
        let candidate = prompts::prompt_password(&t.text("registerPage.password"))?;
        let check = PasswordCheck::evaluate(&candidate);
        print_requirements(t, &check, output);
        if check.is_valid() {
            break candidate;
        }
    };

    let password_confirm = loop {
        let confirm = prompts::prompt_password(&t.text("registerPage.confirmPassword"))?;
        if confirm == password {
            break confirm;
        }
        output.error(t.text("registerPage.passwordMismatch"));
    };

    // Local gate: nothing is submitted unless the form validates.
    let form = RegistrationForm {
        username: username.clone(),
        email: email.clone(),
        password: password.clone(),
        password_confirm: password_confirm.clone(),
    };
    if validate_registration(&form).is_err() {
        output.error(t.text("registerPage.formErrors"));
        std::process::exit(1);
    }

    let payload = RegisterPayload {
        username,
        email,
        password,
        password2: password_confirm,
    };
    match ctx.gateway().register(&payload).await {
        Ok(_user) => {
            output.success(t.text("registerPage.success"));
            Ok(())
        }
        Err(ApiError::Validation(fields)) => {
            for (field, messages) in fields.iter() {
                output.error(format!("{}: {}", field, messages.join(", ")));
            }
            output.error(t.text("registerPage.formErrors"));
            std::process::exit(1);
        }
        Err(err) => {
            error!(error = %err, "Registration failed");
            output.error(t.text("errors.unexpected"));
            std::process::exit(1);
        }
    }
}

pub fn run_logout(ctx: &mut AppContext, output: &Output) -> Result<()> {
    ctx.session
        .logout(&mut ctx.credentials)
        .map_err(|err| eyre!("Failed to clear session: {}", err))?;
    output.success(ctx.catalog.text("session.loggedOut"));
    Ok(())
}

pub fn run_whoami(ctx: &AppContext, output: &Output) -> Result<()> {
    let t = &ctx.catalog;
    match ctx.session.user() {
        Some(user) => {
            if output.format() == OutputFormat::Human {
                output.println(t.text_with("header.greeting", &[("name", &user.username)]));
                if !user.email.is_empty() {
                    output.println(user.email.clone());
                }
            }
            output.value(&json!({"user": user, "authenticated": true}));
        }
        None => {
            if output.format() == OutputFormat::Human {
                output.println(t.text("session.anonymous"));
            }
            output.value(&json!({"user": null, "authenticated": false}));
        }
    }
    Ok(())
}

fn print_requirements(t: &Catalog, check: &PasswordCheck, output: &Output) {
    let rows = [
        (check.min_length, "password.minLength"),
        (check.has_uppercase, "password.uppercase"),
        (check.has_digit, "password.digit"),
        (check.has_special, "password.special"),
    ];
    for (met, key) in rows {
        if met {
            output.println(format!("  {} {}", "✓".green(), t.text(key)));
        } else {
            output.println(format!("  {} {}", "✗".red(), t.text(key)));
        }
    }
}
