//! Stencil CLI - populate named YAML templates

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use stencil::{Embed, FixSuggestion, Result, StencilConfig, StencilError, Templates};

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Stencil - populate named YAML templates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a templates file and list placeholders
    Check {
        /// Path to the templates file
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// Print the placeholders of one template
    Vars {
        /// Template name
        name: String,

        /// Path to the templates file
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// Populate a template from an embed file
    Render {
        /// Path to the embed file (template + args)
        embed: PathBuf,

        /// Path to the templates file
        #[arg(short, long)]
        templates: Option<PathBuf>,

        /// Re-parse the output as YAML
        #[arg(long)]
        verify: bool,
    },

    /// Print a template with placeholders in `{name}` form
    Fmt {
        /// Template name
        name: String,

        /// Path to the templates file
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },
}

fn main() {
    // Logs go to stderr so rendered output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { templates } => check(templates.as_deref()),
        Commands::Vars { name, templates } => vars(&name, templates.as_deref()),
        Commands::Render {
            embed,
            templates,
            verify,
        } => render(&embed, templates.as_deref(), verify),
        Commands::Fmt { name, templates } => fmt(&name, templates.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

/// Load and validate the templates file, resolving the path through config
fn load_templates(explicit: Option<&Path>) -> Result<Templates> {
    let config = StencilConfig::load()?.with_env();
    let path = config.templates_path(explicit)?;
    debug!(path = %path.display(), "using templates file");

    let templates = Templates::load(&path)?;
    templates.validate()?;
    Ok(templates)
}

fn find<'a>(templates: &'a Templates, name: &str) -> Result<&'a stencil::Template> {
    templates.get(name).ok_or_else(|| StencilError::TemplateNotFound {
        name: name.to_string(),
    })
}

fn check(explicit: Option<&Path>) -> Result<()> {
    let templates = load_templates(explicit)?;

    println!("{} {} templates are valid", "✓".green(), templates.len());
    for template in &templates {
        let vars: Vec<String> = template.variable_names().into_iter().collect();
        if vars.is_empty() {
            println!("  {}", template.name().cyan());
        } else {
            println!("  {} ({})", template.name().cyan(), vars.join(", "));
        }
    }
    Ok(())
}

fn vars(name: &str, explicit: Option<&Path>) -> Result<()> {
    let templates = load_templates(explicit)?;
    for var in find(&templates, name)?.variable_names() {
        println!("{}", var);
    }
    Ok(())
}

fn render(embed_path: &Path, explicit: Option<&Path>, verify: bool) -> Result<()> {
    let templates = load_templates(explicit)?;
    let embed = Embed::from_yaml(&fs::read_to_string(embed_path)?)?;

    let output = templates.populate(&embed)?;
    if verify {
        serde_yaml::from_str::<serde_yaml::Value>(&output)?;
    }

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn fmt(name: &str, explicit: Option<&Path>) -> Result<()> {
    let templates = load_templates(explicit)?;
    let normalized = find(&templates, name)?.normalized();
    print!("{}", normalized);
    if !normalized.ends_with('\n') {
        println!();
    }
    Ok(())
}
