//! Subcommand implementations.
//!
//! Each command returns the text it would print so it can be tested
//! without capturing stdout.

use std::fs;

use anyhow::{anyhow, bail, Context, Result};
use console::style;
use signalwind::content::{scan_files, ContentSources};
use signalwind::mount::{App, Component, Document, SignalShell};
use signalwind::{build_registry, StylesheetGenerator, Theme, ThemeConfig, TokenCategory};

use crate::cli::{BuildArgs, Command, MountArgs, ProjectArgs, TokenFormat, TokensArgs};

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => {
            let css = build(&args)?;
            match &args.out {
                Some(path) => {
                    fs::write(path, &css)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), bytes = css.len(), "wrote stylesheet");
                }
                None => print!("{}", css),
            }
        }
        Command::Check(args) => println!("{}", check(&args)?),
        Command::Tokens(args) => print!("{}", tokens(&args)?),
        Command::Mount(args) => println!("{}", mount(&args)?),
    }
    Ok(())
}

fn load_config(project: &ProjectArgs) -> Result<ThemeConfig> {
    match &project.config {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => ThemeConfig::discover_or_builtin(&project.root)
            .with_context(|| format!("failed to load config from {}", project.root.display())),
    }
}

pub fn build(args: &BuildArgs) -> Result<String> {
    let config = load_config(&args.project)?;
    let extra = if args.no_shell {
        Default::default()
    } else {
        SignalShell.render().class_names()
    };
    let sheet = signalwind::stylesheet::build(&config, &args.project.root, extra)
        .context("stylesheet build failed")?;
    Ok(sheet.to_css()?)
}

pub fn check(args: &ProjectArgs) -> Result<String> {
    let config = load_config(args)?;
    let theme = Theme::resolve(&config).context("theme is invalid")?;
    let registry = build_registry(&config, &theme).context("component classes are invalid")?;
    let sources = ContentSources::new(config.content.as_slice())?;
    let files = sources.files(&args.root)?;
    let candidates = scan_files(&files)?;
    let sheet = StylesheetGenerator::new(&theme, &registry).generate(&candidates)?;

    let ok = style("✓").green().bold();
    let lines = [
        format!(
            "{} {:<11} {} tokens, {} keyframes",
            ok,
            style("theme").bold(),
            theme.tokens().token_count(),
            theme.tokens().keyframes().len()
        ),
        format!(
            "{} {:<11} {}",
            ok,
            style("components").bold(),
            registry.names().collect::<Vec<_>>().join(", ")
        ),
        format!(
            "{} {:<11} {} files, {} candidates, {} utilities",
            ok,
            style("content").bold(),
            files.len(),
            candidates.len(),
            sheet.utilities.len()
        ),
    ];
    Ok(lines.join("\n"))
}

pub fn tokens(args: &TokensArgs) -> Result<String> {
    let config = load_config(&args.project)?;
    let theme = Theme::resolve(&config).context("theme is invalid")?;

    let category = match args.category.as_deref() {
        None => None,
        Some("keyframes") => {
            let keyframes = theme.tokens().keyframes();
            return match args.format {
                TokenFormat::Yaml => Ok(serde_yaml::to_string(keyframes)?),
                TokenFormat::Json => Ok(serde_json::to_string_pretty(keyframes)? + "\n"),
                TokenFormat::Csv => bail!("keyframes cannot be written as CSV"),
            };
        }
        Some(key) => Some(
            TokenCategory::from_key(key).ok_or_else(|| anyhow!("unknown token category `{}`", key))?,
        ),
    };

    match args.format {
        TokenFormat::Yaml => Ok(match category {
            Some(category) => serde_yaml::to_string(&theme.table(category))?,
            None => serde_yaml::to_string(theme.tokens())?,
        }),
        TokenFormat::Json => {
            let json = match category {
                Some(category) => serde_json::to_string_pretty(&theme.table(category))?,
                None => serde_json::to_string_pretty(theme.tokens())?,
            };
            Ok(json + "\n")
        }
        TokenFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["category", "name", "value"])?;
            for (table_category, table) in theme.tokens().tables() {
                if category.is_some_and(|c| c != table_category) {
                    continue;
                }
                for (name, value) in table {
                    let css = value.to_css();
                    writer.write_record([table_category.as_str(), name.as_str(), css.as_str()])?;
                }
            }
            let bytes = writer
                .into_inner()
                .map_err(|err| anyhow!("failed to flush CSV: {}", err))?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}

pub fn mount(args: &MountArgs) -> Result<String> {
    let html = fs::read_to_string(&args.html)
        .with_context(|| format!("failed to read {}", args.html.display()))?;
    let mut document = Document::parse(&html)
        .with_context(|| format!("failed to parse {}", args.html.display()))?;
    App::new(SignalShell)
        .mount(&mut document, &args.target)
        .context("mount failed")?;
    Ok(document.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn project(root: &Path) -> ProjectArgs {
        ProjectArgs {
            config: None,
            root: root.to_path_buf(),
        }
    }

    #[test]
    fn test_build_with_builtin_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), r#"<div class="p-18"></div>"#).unwrap();
        let css = build(&BuildArgs {
            project: project(dir.path()),
            out: None,
            no_shell: false,
        })
        .unwrap();
        assert!(css.contains(".signal-card {"));
        assert!(css.contains(".p-18 {\n  padding: 4.5rem;\n}"));
        // Shell classes are included.
        assert!(css.contains(".text-2xl {"));

        let css = build(&BuildArgs {
            project: project(dir.path()),
            out: None,
            no_shell: true,
        })
        .unwrap();
        assert!(!css.contains(".text-2xl {"));
    }

    #[test]
    fn test_build_reports_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("signalwind.config.yaml"), "plugins: [forms]\n").unwrap();
        let err = build(&BuildArgs {
            project: project(dir.path()),
            out: None,
            no_shell: true,
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("unknown plugin `forms`"));
    }

    #[test]
    fn test_check_summary() {
        let dir = tempfile::tempdir().unwrap();
        console::set_colors_enabled(false);
        let summary = check(&project(dir.path())).unwrap();
        assert!(summary.contains("signal-card, signal-button"));
        assert!(summary.contains("0 files"));
    }

    #[test]
    fn test_check_counts_scanned_files() {
        let dir = tempfile::tempdir().unwrap();
        console::set_colors_enabled(false);
        fs::write(dir.path().join("index.html"), r#"<div class="p-4 flex"></div>"#).unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/App.vue"), r#"<p class="text-xl"></p>"#).unwrap();
        let summary = check(&project(dir.path())).unwrap();
        assert!(summary.contains("2 files"), "{}", summary);
        assert!(summary.contains("3 utilities"), "{}", summary);
    }

    #[test]
    fn test_tokens_csv_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let csv = tokens(&TokensArgs {
            project: project(dir.path()),
            category: Some("screens".to_string()),
            format: TokenFormat::Csv,
        })
        .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "category,name,value");
        assert_eq!(lines[1], "screens,sm,640px");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_tokens_json_and_unknown_category() {
        let dir = tempfile::tempdir().unwrap();
        let json = tokens(&TokensArgs {
            project: project(dir.path()),
            category: Some("boxShadow".to_string()),
            format: TokenFormat::Json,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["glow"], "0 0 20px rgba(168, 85, 247, 0.3)");

        assert!(tokens(&TokensArgs {
            project: project(dir.path()),
            category: Some("zIndex".to_string()),
            format: TokenFormat::Yaml,
        })
        .is_err());
    }

    #[test]
    fn test_mount_command() {
        let dir = tempfile::tempdir().unwrap();
        let html: PathBuf = dir.path().join("index.html");
        fs::write(&html, r#"<html><body><div id="app"></div></body></html>"#).unwrap();
        let out = mount(&MountArgs {
            html: html.clone(),
            target: "#app".to_string(),
        })
        .unwrap();
        assert!(out.contains("market-bg"));

        let err = mount(&MountArgs {
            html,
            target: "#root".to_string(),
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("mount target `#root` not found"));
    }
}
