use std::io::{self, Write};

use reqwest::Url;

use crate::config::{SavedConfig, load_config, save_config};

pub struct InteractiveConfig {
    pub url: String,
    pub cookie: String,
    pub path: String,
}

/// Helper struct for managing user input operations
struct InputHandler;

impl InputHandler {
    /// Gets user input with automatic trimming
    fn get_input() -> Result<String, io::Error> {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Prompts user with a question and handles yes/no responses
    fn confirm_prompt(message: &str, default_yes: bool) -> Result<bool, io::Error> {
        let default_text = if default_yes { "[Y/n]" } else { "[y/N]" };

        loop {
            print!("{} {}: ", message, default_text);
            io::stdout().flush()?;

            let input = Self::get_input()?.to_lowercase();

            match input.as_str() {
                "" => return Ok(default_yes),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    println!("❌ Please enter Y for yes or N for no.");
                    println!();
                }
            }
        }
    }

    /// Prompts user for a free-form value, falling back to a default on empty
    /// input when one is given
    fn text_prompt(message: &str, default: Option<&str>) -> Result<String, io::Error> {
        loop {
            match default {
                Some(value) => print!("{} [{}]: ", message, value),
                None => print!("{}: ", message),
            }
            io::stdout().flush()?;

            let input = Self::get_input()?;
            if input.is_empty() {
                if let Some(value) = default {
                    return Ok(value.to_string());
                }
                println!("❌ A value is required.");
                println!();
                continue;
            }
            return Ok(input);
        }
    }
}

/// Helper struct for display formatting
struct DisplayHelper;

impl DisplayHelper {
    fn print_header(title: &str, width: usize) {
        println!("{}", title);
        println!("{}", "=".repeat(width));
        println!();
    }

    fn print_config_summary(url: &str, cookie: &str, path: &str) {
        println!("📋 Configuration Summary:");
        println!("   🌐 Application: {}", url);
        println!(
            "   🍪 Session cookie: {}",
            if cookie.is_empty() {
                "none (status checks disabled)".to_string()
            } else {
                redact_cookie(cookie)
            }
        );
        println!("   🧭 Starting page path: {}", path);
        println!();
    }
}

/// Show the cookie name but not its value in terminal output.
fn redact_cookie(cookie: &str) -> String {
    match cookie.split_once('=') {
        Some((name, _)) => format!("{}=***", name),
        None => "***".to_string(),
    }
}

pub fn run_interactive_mode() -> Result<Option<InteractiveConfig>, io::Error> {
    // Check if we have a saved configuration
    if let Some(saved) = load_config() {
        return handle_existing_config(saved);
    }

    // No saved config, run full interactive setup
    run_full_interactive_setup()
}

fn handle_existing_config(saved: SavedConfig) -> Result<Option<InteractiveConfig>, io::Error> {
    // Auto-use saved configuration for faster startup
    println!("🎯 Using Saved Configuration");
    println!("   🌐 Application: {}", saved.url);
    println!("   🍪 Session cookie: {}", redact_cookie(&saved.cookie));
    println!("🚀 Starting session monitoring...");
    println!();

    Ok(Some(InteractiveConfig {
        url: saved.url,
        cookie: saved.cookie,
        path: saved.path.unwrap_or_else(|| "/".to_string()),
    }))
}

fn run_full_interactive_setup() -> Result<Option<InteractiveConfig>, io::Error> {
    DisplayHelper::print_header("🚀 Welcome to Sessionwatch - Interactive Setup", 50);

    // Step 1: Application base URL
    let url = choose_url()?;

    // Step 2: Session cookie
    let cookie = choose_cookie()?;

    // Step 3: Starting page path for the navigation preview
    let path = InputHandler::text_prompt("🧭 Starting page path", Some("/"))?;

    // Step 4: Show summary and confirm
    println!();
    DisplayHelper::print_config_summary(&url, &cookie, &path);

    // Step 5: Ask if user wants to save these settings
    let save_settings = ask_save_settings()?;

    // Step 6: Final confirmation
    if !InputHandler::confirm_prompt("🔥 Start monitoring with these settings?", true)? {
        println!("❌ Monitoring cancelled.");
        return Ok(None);
    }

    if save_settings {
        save_user_config(&url, &cookie, &path)?;
    }

    Ok(Some(InteractiveConfig { url, cookie, path }))
}

fn save_user_config(url: &str, cookie: &str, path: &str) -> Result<(), io::Error> {
    let config = SavedConfig {
        url: url.to_string(),
        cookie: cookie.to_string(),
        path: Some(path.to_string()),
    };

    match save_config(&config) {
        Ok(_) => {
            println!("💾 Configuration saved! Next time you can start quickly.");
            println!();
        }
        Err(e) => {
            eprintln!("⚠️  Warning: Could not save configuration: {}", e);
            eprintln!("    (This won't affect monitoring, continuing...)");
            println!();
        }
    }

    Ok(())
}

fn ask_save_settings() -> Result<bool, io::Error> {
    println!("💾 Save these settings for future use?");
    println!("   (The session cookie is stored in plain text in your config directory)");
    println!();

    InputHandler::confirm_prompt("💾 Save settings?", true)
}

fn choose_url() -> Result<String, io::Error> {
    loop {
        println!("🌐 Base URL of the application to watch");
        println!("   (e.g. http://localhost:8080 or https://shop.example.com)");
        println!();

        let input = InputHandler::text_prompt("🌐 Application URL", None)?;
        match Url::parse(&input) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                println!();
                return Ok(input);
            }
            Ok(_) => {
                println!("❌ Only http and https URLs are supported.");
                println!();
            }
            Err(e) => {
                println!("❌ That doesn't look like a URL: {}", e);
                println!();
            }
        }
    }
}

fn choose_cookie() -> Result<String, io::Error> {
    println!("🍪 Session cookie, as NAME=VALUE (e.g. JSESSIONID=8C1A...)");
    println!("   Copy it from your browser's developer tools after logging in.");
    println!("   Leave empty to browse the dashboard without status checks.");
    println!();

    print!("🍪 Session cookie: ");
    io::stdout().flush()?;
    let cookie = InputHandler::get_input()?;
    println!();

    if !cookie.is_empty() && !cookie.contains('=') {
        println!("⚠️  Warning: cookie has no '=' separator; sending it as-is.");
        println!();
    }

    Ok(cookie)
}
