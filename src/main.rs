//! # Docket CLI
//!
//! ## Usage
//!
//! ```bash
//! # List the built-in forms
//! docket list
//!
//! # Show the inputs a form takes
//! docket fields bail
//!
//! # Print a values file to start from
//! docket example bail > bail.json
//!
//! # Fill and save
//! docket generate bail --values bail.json --set ccNumber=123 -o out.pdf
//!
//! # Use a template defined in JSON
//! docket generate --template-file notice.json --set name="Ravi Kumar"
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use docket::{template, DocketError, FormSession, Template};

/// Docket - court form generator
#[derive(Parser, Debug)]
#[command(name = "docket")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in templates
    List,

    /// Show the fields of a template
    Fields {
        /// Template id
        id: String,
    },

    /// Print the default values of a template as JSON
    Example {
        /// Template id
        id: String,
    },

    /// Fill a template and write the PDF
    Generate {
        /// Built-in template id
        #[arg(required_unless_present = "template_file")]
        id: Option<String>,

        /// Load the template from a JSON file instead
        #[arg(long, value_name = "FILE", conflicts_with = "id")]
        template_file: Option<PathBuf>,

        /// JSON object of field values
        #[arg(long, value_name = "FILE")]
        values: Option<PathBuf>,

        /// Set one field, applied after --values
        #[arg(long = "set", value_name = "KEY=VALUE")]
        assignments: Vec<String>,

        /// Output path (defaults to the template's file name)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the preview data URI instead of writing a file
        #[arg(long)]
        preview: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docket=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DocketError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for t in template::builtin()? {
                println!("{:<14} {:<24} {}", t.id, t.title, t.description);
            }
        }

        Commands::Fields { id } => {
            let t = template::by_id(&id)?;
            for field in &t.fields {
                let kind = serde_json::to_value(field.kind)?;
                let kind = kind.as_str().unwrap_or_default();
                match &field.default {
                    Some(default) => {
                        println!("{:<24} {:<7} {} [{}]", field.key, kind, field.label, default)
                    }
                    None => println!("{:<24} {:<7} {}", field.key, kind, field.label),
                }
            }
        }

        Commands::Example { id } => {
            let t = template::by_id(&id)?;
            println!("{}", serde_json::to_string_pretty(&t.default_values())?);
        }

        Commands::Generate {
            id,
            template_file,
            values,
            assignments,
            output,
            preview,
        } => {
            let template = load_template(id.as_deref(), template_file)?;
            let mut session = FormSession::new(template);

            if let Some(path) = values {
                let json = fs::read_to_string(&path)?;
                let parsed = docket::FormValues::from_json(&json)?;
                for (key, value) in parsed.iter() {
                    session.set(key, value)?;
                }
            }
            for assignment in &assignments {
                let (key, value) = assignment
                    .split_once('=')
                    .ok_or_else(|| DocketError::InvalidAssignment(assignment.clone()))?;
                session.set(key.trim(), value)?;
            }

            let document = session.generate()?;
            if preview {
                println!("{}", document.preview_handle());
                return Ok(());
            }

            let path = output.unwrap_or_else(|| PathBuf::from(document.filename()));
            document.save_as(&path)?;
            eprintln!(
                "Written {} bytes ({} page(s)) to {}",
                document.bytes().len(),
                document.page_count(),
                path.display()
            );
        }
    }

    Ok(())
}

fn load_template(id: Option<&str>, file: Option<PathBuf>) -> Result<Template, DocketError> {
    match (id, file) {
        (_, Some(path)) => Template::from_json(&fs::read_to_string(path)?),
        (Some(id), None) => template::by_id(id),
        (None, None) => Err(DocketError::UnknownTemplate(String::new())),
    }
}
