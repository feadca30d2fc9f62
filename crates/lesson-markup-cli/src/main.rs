use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lesson_markup_config::{Config, RenderConfig};
use lesson_markup_engine::{
    DialectKind, ParseContext, ParseOptions, RenderNode, Section, io, parse_block,
};
use std::{fs, path::PathBuf};

mod tree;

#[derive(Parser)]
#[command(name = "lesson-markup")]
#[command(about = "Parse annotated lesson text into a render tree")]
struct Cli {
    /// Config file (defaults to ~/.config/lesson-markup/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a text file with one dialect
    Parse {
        /// Input text file
        input: PathBuf,

        /// top-level, callout or deep-dive
        #[arg(short, long, default_value_t = DialectKind::TopLevel)]
        dialect: DialectKind,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Render the sections of a lesson file
    Render {
        /// Lesson TOML file, absolute or relative to the configured lessons path
        lesson: PathBuf,

        /// Render only this section
        #[arg(short, long)]
        section: Option<Section>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List lesson files under the configured lessons path
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Tree,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let options = parse_options(config.as_ref().map(|c| &c.render));

    match cli.command {
        Command::Parse {
            input,
            dialect,
            format,
        } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            log::debug!("parsing {} as {dialect}", input.display());

            let nodes = parse_block(&text, &dialect.dialect(), &ParseContext::new(&options));
            print_nodes(&nodes, format, &options)?;
        }
        Command::Render {
            lesson,
            section,
            format,
        } => {
            let path = match &config {
                Some(config) => config.resolve_lesson(&lesson),
                None => lesson,
            };
            let lesson = io::load_lesson(&path)?;
            log::info!("rendering {:?} from {}", lesson.title, path.display());

            match section {
                Some(section) => {
                    let nodes = lesson
                        .render_section(section, &options)
                        .with_context(|| format!("lesson has no {section} section"))?;
                    print_nodes(&nodes, format, &options)?;
                }
                None => {
                    let rendered = lesson.render(&options);
                    match format {
                        OutputFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(&rendered)?)
                        }
                        OutputFormat::Tree => {
                            println!("# {}", rendered.title);
                            for section in &rendered.sections {
                                println!("\n[{}]", section.section);
                                print!("{}", tree::Dump::new(&section.nodes, &options));
                            }
                        }
                    }
                }
            }
        }
        Command::List => {
            let config = config.context(format!(
                "no config file found at {}; set lessons_path there first",
                Config::config_path().display()
            ))?;
            for path in io::scan_lesson_files(&config.lessons_path)? {
                let display = path.strip_prefix(&config.lessons_path).unwrap_or(&path);
                match io::load_lesson(&path) {
                    Ok(lesson) => println!("{}\t{}", display.display(), lesson.title),
                    Err(e) => {
                        log::warn!("skipping {}: {e}", path.display());
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Option<Config>> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match &config {
        Some(config) => log::debug!("lessons path: {}", config.lessons_path.display()),
        None => log::debug!("no config file, using defaults"),
    }
    Ok(config)
}

fn parse_options(render: Option<&RenderConfig>) -> ParseOptions {
    match render {
        Some(render) => ParseOptions {
            modal_threshold: render.modal_threshold,
            default_language: render.default_language.clone().into(),
        },
        None => ParseOptions::default(),
    }
}

fn print_nodes(nodes: &[RenderNode], format: OutputFormat, options: &ParseOptions) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(nodes)?),
        OutputFormat::Tree => print!("{}", tree::Dump::new(nodes, options)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn render_config_maps_to_parse_options() {
        let render = RenderConfig {
            modal_threshold: 42,
            default_language: "rust".to_string(),
        };
        let options = parse_options(Some(&render));
        assert_eq!(options.modal_threshold, 42);
        assert_eq!(options.default_language, "rust");
    }

    #[test]
    fn missing_config_uses_default_options() {
        assert_eq!(parse_options(None), ParseOptions::default());
    }

    #[test]
    fn parse_dialect_argument() {
        let cli = Cli::try_parse_from(["lesson-markup", "parse", "in.txt", "-d", "deep-dive"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Parse {
                dialect: DialectKind::DeepDive,
                ..
            }
        ));
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        let err = Cli::try_parse_from(["lesson-markup", "parse", "in.txt", "-d", "inline"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("unknown dialect `inline`"));
    }

    #[test]
    fn parse_section_argument() {
        let cli = Cli::try_parse_from(["lesson-markup", "render", "bfs.toml", "-s", "algorithm"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Render {
                section: Some(Section::Algorithm),
                ..
            }
        ));
    }
}
