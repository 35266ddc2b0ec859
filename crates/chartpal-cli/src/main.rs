//! `chartpal` - read chart colors out of a stylesheet from the command line.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chartpal::{
    extract_named_colors, generate_palette_with, import_text, parse_colors, to_stylesheet,
    Import, PaletteOptions,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "chartpal")]
#[command(version)]
#[command(about = "Chart colors from design-system stylesheets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the chart colors for light and dark mode
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Print a stylesheet instead of JSON
        #[arg(long)]
        css: bool,
    },
    /// Print every named color the stylesheet declares
    Named {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Suggest an accessible palette from the stylesheet's named colors
    Suggest {
        #[command(flatten)]
        input: InputArgs,

        /// Number of colors to suggest
        #[arg(short, long, default_value_t = chartpal::DEFAULT_SLOTS)]
        count: usize,

        /// YAML file with palette tuning options
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Print JSON instead of one color per line
        #[arg(long)]
        json: bool,
    },
    /// Import pasted hex values or a stylesheet fragment
    Import {
        /// Text to import; tokens are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Stylesheet to read; `-` or nothing reads stdin
    file: Option<PathBuf>,
}

impl InputArgs {
    fn read(&self) -> Result<String> {
        match self.file.as_deref() {
            Some(path) if path != Path::new("-") => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            _ => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                Ok(text)
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Parse { input, css } => {
            let config = parse_colors(&input.read()?);
            if config.is_empty() {
                eprintln!("Warning: no chart colors found");
            }
            if css {
                println!("{}", to_stylesheet(&config));
            } else {
                print_json(&config)?;
            }
        }
        Command::Named { input } => {
            print_json(&extract_named_colors(&input.read()?))?;
        }
        Command::Suggest {
            input,
            count,
            options,
            json,
        } => {
            let options = match options {
                Some(path) => load_options(&path)?,
                None => PaletteOptions::default(),
            };
            let pool = extract_named_colors(&input.read()?);
            if pool.is_empty() {
                eprintln!("Warning: no named colors to suggest from");
                return Ok(ExitCode::FAILURE);
            }
            let palette = generate_palette_with(&pool, count, &options);
            if json {
                print_json(&palette)?;
            } else {
                for color in palette {
                    println!("{}", color);
                }
            }
        }
        Command::Import { text } => {
            let imported = match import_text(&text.join(" ")) {
                Ok(imported) => imported,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    return Ok(ExitCode::FAILURE);
                }
            };
            if let Import::Tokens(manual) = &imported {
                if manual.is_partial() {
                    eprintln!(
                        "Warning: skipped {} invalid token(s): {}",
                        manual.skipped.len(),
                        manual.skipped.join(", ")
                    );
                }
            }
            print_json(&imported)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load_options(path: &Path) -> Result<PaletteOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    PaletteOptions::from_yaml(&text)
        .with_context(|| format!("invalid options in {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_suggest_defaults() {
        let cli = Cli::try_parse_from(["chartpal", "suggest", "theme.css"]).unwrap();
        match cli.command {
            Command::Suggest {
                input,
                count,
                options,
                json,
            } => {
                assert_eq!(input.file, Some(PathBuf::from("theme.css")));
                assert_eq!(count, chartpal::DEFAULT_SLOTS);
                assert!(options.is_none());
                assert!(!json);
            }
            _ => panic!("expected suggest"),
        }
    }

    #[test]
    fn test_import_requires_text() {
        assert!(Cli::try_parse_from(["chartpal", "import"]).is_err());
    }

    #[test]
    fn test_read_file_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ":root {{ --chart-1: #112233; }}").unwrap();

        let input = InputArgs {
            file: Some(file.path().to_path_buf()),
        };
        let config = parse_colors(&input.read().unwrap());
        assert_eq!(config.light[0].to_string(), "#112233");
    }

    #[test]
    fn test_missing_file_names_path() {
        let input = InputArgs {
            file: Some(PathBuf::from("/definitely/not/here.css")),
        };
        let err = input.read().unwrap_err();
        assert!(err.to_string().contains("not/here.css"));
    }

    #[test]
    fn test_load_options_partial_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hue_step: 45\nmax_lightness: 60").unwrap();

        let options = load_options(file.path()).unwrap();
        assert_eq!(options.hue_step, 45);
        assert_eq!(options.max_lightness, 60);
        assert_eq!(options.min_lightness, PaletteOptions::default().min_lightness);
    }

    #[test]
    fn test_load_options_rejects_inverted_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_lightness: 80\nmax_lightness: 20").unwrap();

        let err = load_options(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("80..=20"));
    }
}
