mod config;
mod content;
mod controller;
mod logging;
mod markup;
mod view;

use clap::Parser;
use config::{RcConfig, RcLoader};
use content::{ContentLibrary, Tip, Website, load_content};
use controller::AppController;
use std::path::PathBuf;

/// Study tips and helpful websites in the terminal
#[derive(Parser, Debug)]
#[command(name = "study-buddy", version, about)]
struct Cli {
    /// TOML file with tips and websites, replacing the built-in set
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Settings file to use instead of .studybuddyrc
    #[arg(long, value_name = "FILE")]
    rc: Option<PathBuf>,

    /// Disable mouse support
    #[arg(long)]
    no_mouse: bool,

    /// Print a tip as plain text and exit
    #[arg(long, value_name = "TIP_ID")]
    print: Option<String>,

    /// Open a website in the browser and exit
    #[arg(long, value_name = "WEBSITE_ID")]
    open: Option<String>,

    /// List tips and websites and exit
    #[arg(long)]
    list: bool,

    /// Print a sample settings file and exit
    #[arg(long)]
    sample_rc: bool,
}

fn load_library(cli: &Cli, config: &RcConfig) -> Result<ContentLibrary, content::ContentError> {
    match cli.content.as_ref().or(config.content.as_ref()) {
        Some(path) => load_content(path),
        None => Ok(ContentLibrary::builtin()),
    }
}

fn find_tip<'a>(library: &'a ContentLibrary, id: &str) -> Result<&'a Tip, String> {
    library
        .tip(id)
        .ok_or_else(|| format!("no tip with id '{id}' (see --list)"))
}

fn find_website<'a>(library: &'a ContentLibrary, id: &str) -> Result<&'a Website, String> {
    library
        .website(id)
        .ok_or_else(|| format!("no website with id '{id}' (see --list)"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.sample_rc {
        print!("{}", RcLoader::generate_sample_rc());
        return Ok(());
    }

    let logging_guard = logging::init();

    let mut config = match &cli.rc {
        Some(path) => RcLoader::load_config_from(path),
        None => RcLoader::load_config(),
    };
    if cli.no_mouse {
        config.mouse = false;
    }

    let library = load_library(&cli, &config).inspect_err(|e| {
        tracing::error!("failed to load content: {}", e);
    })?;

    if cli.list {
        print!("{}", view::plain::format_listing(&library));
        if let Some(guard) = &logging_guard {
            println!("\nLogs: {}", guard.log_dir().display());
        }
        return Ok(());
    }

    if let Some(id) = &cli.print {
        print!("{}", view::plain::format_tip(find_tip(&library, id)?));
        return Ok(());
    }

    if let Some(id) = &cli.open {
        let site = find_website(&library, id)?;
        controller::browser::open_url(&site.url, config.browser.as_deref())?;
        println!("Opened {} ({})", site.title, site.url);
        return Ok(());
    }

    let mut controller = AppController::new(library);
    controller.apply_config(&config);

    controller.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["study-buddy", "--no-mouse", "--print", "pomodoro"]);
        assert!(cli.no_mouse);
        assert_eq!(cli.print.as_deref(), Some("pomodoro"));
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_content_overrides_rc() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[tips]]\nid = \"only\"\ntitle = \"Only\"\ncontent = \"x\"").unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["study-buddy", "--content", path]);
        let config = RcConfig {
            content: Some(PathBuf::from("/nonexistent/content.toml")),
            ..RcConfig::default()
        };

        let library = load_library(&cli, &config).unwrap();
        assert_eq!(library.tips().len(), 1);
        assert_eq!(library.first_tip().id, "only");
    }

    #[test]
    fn test_find_tip_and_website_by_id() {
        let library = ContentLibrary::builtin();
        assert_eq!(find_tip(&library, "3").unwrap().title, "Spaced Repetition");
        assert_eq!(find_website(&library, "12").unwrap().title, "Khan Academy");

        let err = find_website(&library, "999").unwrap_err();
        assert!(err.contains("999"));
        assert!(find_tip(&library, "").is_err());
    }

    #[test]
    fn test_cli_open_flag() {
        let cli = Cli::parse_from(["study-buddy", "--open", "12"]);
        assert_eq!(cli.open.as_deref(), Some("12"));
        assert_eq!(cli.print, None);
    }

    #[test]
    fn test_builtin_content_without_paths() {
        let cli = Cli::parse_from(["study-buddy"]);
        let library = load_library(&cli, &RcConfig::default()).unwrap();
        assert_eq!(library.tips().len(), 5);
    }

    #[test]
    fn test_rc_content_missing_file_errors() {
        let cli = Cli::parse_from(["study-buddy"]);
        let config = RcConfig {
            content: Some(PathBuf::from("/nonexistent/content.toml")),
            ..RcConfig::default()
        };
        assert!(load_library(&cli, &config).is_err());
    }
}
