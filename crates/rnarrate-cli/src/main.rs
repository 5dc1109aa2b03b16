use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use rnarrate_gen::{expand, extract_fields, parse_document, parse_document_file, resolve_title, synthesize};
use rnarrate_render::{Renderer, StoreConfig, TemplateStore};
use serde::Serialize;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "rnarrate")]
#[command(about = "Generate Liquid narrative templates from detection rules")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a narrative template from a rule document
    Generate {
        /// Path to a JSON or YAML rule document (reads stdin if omitted)
        path: Option<PathBuf>,

        /// Company name substituted into the narrative prose
        #[arg(short, long)]
        label: String,

        /// Expand every record field into final text instead of emitting
        /// a placeholder template
        #[arg(long)]
        expand: bool,

        /// Pretty-print the JSON payload
        #[arg(short, long, default_value_t = true)]
        pretty: bool,
    },

    /// Render a template against a sample data document
    Preview {
        /// Path to a Liquid template file
        #[arg(short, long)]
        template: PathBuf,

        /// Path to a JSON data document
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Save a template under a name (overwrites an existing one)
    Save {
        /// Template content file (reads stdin if omitted)
        path: Option<PathBuf>,

        /// Name to store the template under
        #[arg(short, long)]
        name: String,

        /// Template store directory
        #[arg(short, long, default_value = "templates")]
        dir: PathBuf,
    },

    /// Load a named template and print its content
    Load {
        /// Name of the stored template
        #[arg(short, long)]
        name: String,

        /// Template store directory
        #[arg(short, long, default_value = "templates")]
        dir: PathBuf,
    },

    /// List stored templates as JSON
    List {
        /// Template store directory
        #[arg(short, long, default_value = "templates")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            path,
            label,
            expand,
            pretty,
        } => cmd_generate(path, label, expand, pretty),
        Commands::Preview { template, data } => cmd_preview(template, data),
        Commands::Save { path, name, dir } => cmd_save(path, name, dir),
        Commands::Load { name, dir } => cmd_load(name, dir),
        Commands::List { dir } => cmd_list(dir),
    }
}

// ---------------------------------------------------------------------------
// Subcommand implementations
// ---------------------------------------------------------------------------

/// Response payload for `generate`, matching the original upload response.
#[derive(Serialize)]
struct GeneratePayload {
    template: String,
    title: String,
    label: String,
}

fn cmd_generate(path: Option<PathBuf>, label: String, expand_mode: bool, pretty: bool) {
    let doc = load_document(path.as_deref());

    let title = resolve_title(&doc);
    let template = if expand_mode {
        expand(&doc, &label)
    } else {
        let fields = extract_fields(&doc);
        synthesize(&fields, &title, &label)
    };

    print_json(
        &GeneratePayload {
            template,
            title,
            label,
        },
        pretty,
    );
}

fn cmd_preview(template_path: PathBuf, data_path: PathBuf) {
    let template = read_file(&template_path);
    let data_text = read_file(&data_path);
    let data: Value = match serde_json::from_str(&data_text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON data document {}: {e}", data_path.display());
            process::exit(1);
        }
    };

    match Renderer::new().render(&template, &data) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Render error: {e}");
            process::exit(1);
        }
    }
}

#[derive(Serialize)]
struct SavePayload {
    name: String,
    path: PathBuf,
}

fn cmd_save(path: Option<PathBuf>, name: String, dir: PathBuf) {
    let content = match path {
        Some(p) => read_file(&p),
        None => read_stdin(),
    };

    let store = open_store(dir);
    match store.save(&name, &content) {
        Ok(path) => print_json(&SavePayload { name, path }, true),
        Err(e) => {
            eprintln!("Error saving template: {e}");
            process::exit(1);
        }
    }
}

fn cmd_load(name: String, dir: PathBuf) {
    let store = open_store(dir);
    match store.load(&name) {
        Ok(content) => print!("{content}"),
        Err(e) => {
            eprintln!("Error loading template: {e}");
            process::exit(1);
        }
    }
}

fn cmd_list(dir: PathBuf) {
    let store = open_store(dir);
    match store.list() {
        Ok(entries) => print_json(&entries, true),
        Err(e) => {
            eprintln!("Error listing templates: {e}");
            process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_document(path: Option<&Path>) -> Value {
    let result = match path {
        Some(p) => parse_document_file(p),
        None => parse_document(&read_stdin()),
    };
    match result {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error reading rule document: {e}");
            process::exit(1);
        }
    }
}

fn read_file(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn read_stdin() -> String {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error reading stdin: {e}");
        process::exit(1);
    }
    input
}

fn open_store(dir: PathBuf) -> TemplateStore {
    match TemplateStore::open(StoreConfig { dir }) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error opening template store: {e}");
            process::exit(1);
        }
    }
}

fn print_json(value: &impl Serialize, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match json {
        Ok(j) => println!("{j}"),
        Err(e) => {
            eprintln!("JSON serialization error: {e}");
            process::exit(1);
        }
    }
}
