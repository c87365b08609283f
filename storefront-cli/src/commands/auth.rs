//! Account commands - signup, login, logout, whoami

use std::env;

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};

use super::{ensure_interactive, get_context};
use crate::output;

/// Email from the flag or an interactive prompt
fn email_or_prompt(email: Option<String>) -> Result<String> {
    match email {
        Some(e) => Ok(e),
        None => {
            ensure_interactive("email")?;
            Ok(Input::<String>::new().with_prompt("Email").interact_text()?)
        }
    }
}

/// Password from --password, STOREFRONT_PASSWORD, or a hidden prompt
fn password_or_prompt(password: Option<String>, confirm: bool) -> Result<String> {
    if let Some(p) = password {
        return Ok(p);
    }
    if let Ok(p) = env::var("STOREFRONT_PASSWORD") {
        return Ok(p);
    }

    ensure_interactive("password")?;
    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

pub fn signup(email: Option<String>, password: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let email = email_or_prompt(email)?;
    let password = password_or_prompt(password, true)?;

    let email = ctx.auth_service.signup(&email, &password)?;
    ctx.session_service.set_session(&email)?;

    if json {
        println!("{}", serde_json::json!({ "email": email, "signedIn": true }));
    } else {
        output::success(&format!("Account created. Signed in as {}", email));
    }
    Ok(())
}

pub fn login(email: Option<String>, password: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let email = email_or_prompt(email)?;
    let password = password_or_prompt(password, false)?;

    let email = ctx.auth_service.login(&email, &password)?;
    let session = ctx.session_service.set_session(&email)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    output::success(&format!("Signed in as {}", email));
    let count = ctx.cart_service.total_count(&email);
    if count > 0 {
        output::info(&format!("{} item(s) waiting in your cart.", count));
    }
    Ok(())
}

pub fn logout(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let was = ctx.session_service.current_email();
    ctx.session_service.clear_session()?;

    if json {
        println!("{}", serde_json::json!({ "signedOut": was.is_some() }));
    } else if was.is_some() {
        output::success("Signed out.");
    } else {
        output::warning("Nobody was signed in.");
    }
    Ok(())
}

pub fn whoami(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = ctx.session_service.current();

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    match session {
        Some(s) => {
            println!("{} {}", "Signed in as".bold(), s.email);
            println!(
                "  Since: {}",
                s.login_timestamp.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
            );
            println!("  Cart: {} item(s)", ctx.cart_service.total_count(&s.email));
            println!("  Orders: {}", ctx.order_service.list_orders(&s.email).len());
        }
        None => output::warning("Not signed in. Use 'ws login' or 'ws signup'."),
    }
    Ok(())
}
