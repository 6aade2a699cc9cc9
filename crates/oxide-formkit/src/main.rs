//! oxide-formkit CLI
//!
//! Renders JSON form definitions to HTML.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_formkit::{BuiltinTheme, CustomTheme, FieldType, FormDefinition, LogOutput};

/// Declarative HTML forms.
#[derive(Parser)]
#[command(name = "oxide-formkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a form definition file.
    Render {
        /// Path to the JSON form definition.
        definition: PathBuf,

        /// Built-in theme, overriding the one in the definition.
        #[arg(short, long, env = "OXIDE_FORMKIT_THEME")]
        theme: Option<String>,

        /// Use templates from <TEMPLATES_DIR>/<CUSTOM_THEME>/ instead.
        #[arg(long)]
        custom_theme: Option<String>,

        /// Root directory of custom themes.
        #[arg(long, env = "OXIDE_FORMKIT_TEMPLATES_DIR", default_value = "templates")]
        templates_dir: PathBuf,

        /// Built-in theme used for kinds the custom theme has no file for.
        #[arg(long, requires = "custom_theme")]
        fallback: Option<String>,

        /// Render the fields only, without the form wrapper.
        #[arg(long)]
        elements_only: bool,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List built-in themes and field types.
    Themes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            definition,
            theme,
            custom_theme,
            templates_dir,
            fallback,
            elements_only,
            output,
        } => {
            let mut form = FormDefinition::from_path(&definition)?.into_form()?;

            if let Some(name) = custom_theme {
                let mut custom = CustomTheme::new(name, templates_dir);
                if let Some(fallback) = fallback {
                    custom = custom.with_fallback(fallback.parse::<BuiltinTheme>()?);
                }
                form.set_theme(custom);
            } else if let Some(theme) = theme {
                form.set_theme_name(&theme)?;
            }

            let html = if elements_only {
                form.render_elements()
            } else {
                form.render()
            }
            .with_context(|| format!("failed to render {}", definition.display()))?;

            // Registration problems are reported, not fatal.
            form.errors().output(LogOutput::Emit);

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!("Wrote {}", path.display());
                }
                None => println!("{html}"),
            }
        }

        Commands::Themes => {
            println!("Themes:");
            for theme in BuiltinTheme::ALL {
                println!("  {theme}");
            }
            println!("\nField types:");
            for field_type in FieldType::ALL {
                println!("  {field_type}");
            }
        }
    }

    Ok(())
}
