use std::fs;
use std::io::{self, Read, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};

use larder_ui::config::DEFAULT_PAGE_SIZE;
use larder_ui::{
    FormContext, FormSnapshot, FormView, MarkupOptions, PageState, PaginationView, SavedRecipe,
    View, validate,
};

#[derive(Debug, Parser)]
#[command(
    name = "larder-ui",
    version,
    about = "Preview recipe editor and pagination markup from the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the recipe editor form document
    Form {
        /// Saved recipe to pre-fill: file path, inline JSON, or "-" for stdin.
        /// Omit for a blank create form.
        #[arg(short = 'r', long = "recipe", value_name = "SPEC")]
        recipe: Option<String>,

        /// Icon sprite sheet URL embedded in generated controls
        #[arg(long = "icon-sheet", value_name = "URL")]
        icon_sheet: Option<String>,

        /// Write markup to a file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "PATH")]
        output: Option<PathBuf>,

        /// Overwrite the output file if it already exists
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Render pagination controls for a result window
    Pages {
        /// Total number of search results
        #[arg(long = "results", value_name = "N")]
        results: usize,

        /// Page currently in view (1-based)
        #[arg(long = "page", value_name = "N", default_value_t = 1)]
        page: usize,

        /// Results per page
        #[arg(long = "page-size", value_name = "N", default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Icon sprite sheet URL embedded in generated controls
        #[arg(long = "icon-sheet", value_name = "URL")]
        icon_sheet: Option<String>,

        /// Write markup to a file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "PATH")]
        output: Option<PathBuf>,

        /// Overwrite the output file if it already exists
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Validate a submitted form snapshot and print the canonical draft
    Submit {
        /// Snapshot entries as JSON pairs, e.g. [["title","Beans"],...]:
        /// file path, inline JSON, or "-" for stdin
        #[arg(value_name = "SPEC")]
        snapshot: String,
    },
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Form { recipe, icon_sheet, output, force } => {
            let saved = recipe.as_deref().map(load_saved_recipe).transpose()?;
            let context = FormContext {
                editing: saved.is_some(),
                source: saved.map(|saved| saved.recipe),
            };
            let view = FormView::with_options(markup_options(icon_sheet));
            emit(view.render(&context).as_str(), output.as_deref(), force)
        }
        Command::Pages { results, page, page_size, icon_sheet, output, force } => {
            let page_size = NonZeroUsize::new(page_size)
                .ok_or_else(|| eyre!("--page-size must be at least 1"))?;
            let state = PageState::new(results, page).with_page_size(page_size);
            let view = PaginationView::with_options(markup_options(icon_sheet));
            emit(view.render(&state).as_str(), output.as_deref(), force)
        }
        Command::Submit { snapshot } => {
            let entries = load_entries(&snapshot)?;
            let snapshot = FormSnapshot::from_entries(
                entries.iter().map(|(name, value)| (name.as_str(), value.as_str())),
            );
            let draft = validate(&snapshot)
                .map_err(|err| eyre!("submission rejected: {}", err.user_message()))?;
            let payload = serde_json::to_string_pretty(&draft.to_payload())
                .wrap_err("failed to serialize draft")?;
            println!("{payload}");
            Ok(())
        }
    }
}

fn markup_options(icon_sheet: Option<String>) -> MarkupOptions {
    match icon_sheet {
        Some(sheet) => MarkupOptions::new().with_icon_sheet(sheet),
        None => MarkupOptions::new(),
    }
}

fn emit(markup: &str, output: Option<&Path>, force: bool) -> Result<()> {
    match output {
        Some(path) => {
            if path.exists() && !force {
                return Err(eyre!(
                    "file {} already exists (pass --force to overwrite)",
                    path.display()
                ));
            }
            fs::write(path, markup)
                .wrap_err_with(|| format!("failed to write {}", path.display()))
        }
        None => io::stdout()
            .write_all(markup.as_bytes())
            .wrap_err("failed to write to stdout"),
    }
}

fn load_saved_recipe(spec: &str) -> Result<SavedRecipe> {
    let contents = load_document(spec, "recipe")?;
    serde_json::from_str(&contents).wrap_err("failed to parse recipe JSON")
}

fn load_entries(spec: &str) -> Result<Vec<(String, String)>> {
    let contents = load_document(spec, "snapshot")?;
    serde_json::from_str(&contents)
        .wrap_err("failed to parse snapshot entries (expected JSON pairs of name and value)")
}

/// Resolve a spec as "-" for stdin, an existing file path, or inline JSON.
fn load_document(spec: &str, label: &str) -> Result<String> {
    if spec == "-" {
        return read_from_source(&InputSource::Stdin);
    }

    let path = PathBuf::from(spec);
    match read_from_source(&InputSource::File(path.clone())) {
        Ok(contents) => Ok(contents),
        Err(err) => {
            if is_not_found(&err) && looks_like_json(spec) {
                return Ok(spec.to_string());
            }
            Err(err.wrap_err(format!("failed to load {label} from {}", path.display())))
        }
    }
}

fn read_from_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read from stdin")?;
            Ok(buffer)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read file {}", path.display())),
    }
}

fn is_not_found(err: &Report) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

fn looks_like_json(spec: &str) -> bool {
    spec.trim_start().starts_with(['{', '['])
}
