use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const RC_FILE_NAME: &str = ".studybuddyrc";

pub const MIN_SIDEBAR_WIDTH: usize = 12;
pub const MAX_SIDEBAR_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RcConfig {
    /// TOML file replacing the built-in tips and websites
    pub content: Option<PathBuf>,
    pub mouse: bool,
    /// Print each link's URL after its label in tip content
    pub link_urls: bool,
    pub color: bool,
    pub sidebar_width: usize,
    /// Program (plus arguments) used instead of the platform opener
    pub browser: Option<String>,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            content: None,
            mouse: true,
            link_urls: false,
            color: true,
            sidebar_width: 28,
            browser: None,
        }
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .studybuddyrc in:
    /// 1. Current directory
    /// 2. Home directory (~/.studybuddyrc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(RC_FILE_NAME);
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(RC_FILE_NAME);
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load the RC file from the standard locations, defaults when there is none
    pub fn load_config() -> RcConfig {
        match Self::get_rc_path() {
            Some(rc_path) => Self::load_config_from(&rc_path),
            None => RcConfig::default(),
        }
    }

    /// Load a specific RC file; an unreadable file leaves the defaults
    pub fn load_config_from(rc_path: &Path) -> RcConfig {
        let mut config = RcConfig::default();

        match fs::read_to_string(rc_path) {
            Ok(content) => {
                Self::parse_config_content(&content, &mut config);
                tracing::info!("loaded settings from {}", rc_path.display());
            }
            Err(e) => {
                tracing::warn!("could not read {}: {}", rc_path.display(), e);
            }
        }

        config
    }

    pub fn parse_config_content(content: &str, config: &mut RcConfig) {
        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    fn parse_config_line(line: &str, config: &mut RcConfig) {
        // Inline comments need whitespace before the '#', paths and URLs may contain one
        let line = match line.find(" #").or_else(|| line.find("\t#")) {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        if let Some(stripped) = line.strip_prefix("set ") {
            let setting = stripped.trim();

            match setting {
                "mouse" => config.mouse = true,
                "nomouse" => config.mouse = false,
                "linkurls" => config.link_urls = true,
                "nolinkurls" => config.link_urls = false,
                "color" => config.color = true,
                "nocolor" => config.color = false,
                _ => {
                    if let Some((key, value)) = setting.split_once('=') {
                        Self::apply_value(key.trim(), value.trim(), config);
                    }
                }
            }
        } else if let Some((key, value)) = line.split_once('=') {
            Self::apply_value(key.trim(), value.trim(), config);
        } else {
            tracing::debug!("ignoring rc line: {}", line);
        }
    }

    fn apply_value(key: &str, value: &str, config: &mut RcConfig) {
        match key {
            "content" => {
                config.content = (!value.is_empty()).then(|| PathBuf::from(expand_home(value)));
            }
            "mouse" => {
                if let Some(flag) = parse_flag(value) {
                    config.mouse = flag;
                }
            }
            "linkurls" | "link_urls" => {
                if let Some(flag) = parse_flag(value) {
                    config.link_urls = flag;
                }
            }
            "color" | "colour" => {
                if let Some(flag) = parse_flag(value) {
                    config.color = flag;
                }
            }
            "sidebar" | "sidebar_width" => {
                if let Ok(width) = value.parse::<usize>() {
                    if (MIN_SIDEBAR_WIDTH..=MAX_SIDEBAR_WIDTH).contains(&width) {
                        config.sidebar_width = width;
                    }
                }
            }
            "browser" => {
                config.browser = (!value.is_empty()).then(|| value.to_string());
            }
            _ => tracing::debug!("unknown rc setting '{}'", key),
        }
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        r#"# study-buddy configuration file (.studybuddyrc)
# Lines starting with # or " are comments

# Content: tips and websites from a TOML file instead of the built-in set
# set content=~/notes/study.toml

# Display settings
set mouse              # Click and hover support (or set nomouse)
set nolinkurls         # Show link addresses after their labels (set linkurls)
set color              # Accent colors (or set nocolor)
set sidebar=28         # Width of the tip list, 12 to 60 columns

# Program used to open links instead of the system default
# set browser=firefox --new-window

# Alternative key=value syntax:
# mouse=true
# link_urls=false
# sidebar_width=28
"#
        .to_string()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn expand_home(value: &str) -> String {
    match (value.strip_prefix("~/"), env::var("HOME")) {
        (Some(rest), Ok(home)) => format!("{}/{}", home.trim_end_matches('/'), rest),
        _ => value.to_string(),
    }
}
