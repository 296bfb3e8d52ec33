//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the profile command.
pub async fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => switch_profile(config, name, formatter),
        ProfileAction::Set {
            name,
            api_url,
            api_key,
            genai_key,
            model,
        } => set_profile(config, name, api_url, api_key, genai_key, model, formatter),
        ProfileAction::Delete { name } => delete_profile(config, name, formatter),
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    println!("Available profiles:");
    for (name, profile) in &config.profiles {
        let marker = if name == &config.active_profile {
            "* "
        } else {
            "  "
        };
        println!(
            "{}{}",
            marker,
            if name == &config.active_profile {
                formatter.success(name)
            } else {
                name.clone()
            }
        );
        println!("    API: {}", profile.api_url);
        println!("    Model: {}", profile.model);
        println!("    API key: {}", key_status(&profile.api_key));
        println!("    Gemini key: {}", key_status(&profile.genai_key));
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!(
        "Active profile: {}",
        formatter.success(&config.active_profile)
    );
    println!("  API: {}", profile.api_url);
    println!("  Model: {}", profile.model);
    println!("  API key: {}", key_status(&profile.api_key));
    println!("  Gemini key: {}", key_status(&profile.genai_key));

    Ok(())
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    config.save()?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
///
/// Omitted fields keep their current value, so a key can be rotated
/// without retyping the URL.
fn set_profile(
    config: &mut Config,
    name: String,
    api_url: Option<String>,
    api_key: Option<String>,
    genai_key: Option<String>,
    model: Option<String>,
    formatter: &Formatter,
) -> Result<()> {
    let mut profile = config.profiles.get(&name).cloned().unwrap_or_default();
    if let Some(api_url) = api_url {
        profile.api_url = api_url;
    }
    if let Some(api_key) = api_key {
        profile.api_key = Some(api_key);
    }
    if let Some(genai_key) = genai_key {
        profile.genai_key = Some(genai_key);
    }
    if let Some(model) = model {
        profile.model = model;
    }

    let action = if config.profiles.contains_key(&name) {
        "Updated"
    } else {
        "Created"
    };

    config.set_profile(name.clone(), profile);
    config.save()?;

    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, name))
    );

    Ok(())
}

/// Delete a profile.
fn delete_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    if name == config.active_profile {
        return Err(crate::error::CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(&name).is_some() {
        config.save()?;
        println!(
            "{}",
            formatter.success(&format!("Deleted profile '{}'", name))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
    }

    Ok(())
}

fn key_status(key: &Option<String>) -> &'static str {
    if key.is_some() {
        "configured"
    } else {
        "not set"
    }
}
