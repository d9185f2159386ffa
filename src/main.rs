use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use svgmin::commands::{
    FormattingOptions, copy_data_uri, format_document, minify_in_place, minify_to_file,
};
use svgmin::host::{
    Clipboard, Confirmation, DocumentEditor, DocumentView, FileStateStore, SVG_LANGUAGE,
    WarningGate,
};
use svgmin::{Settings, XmlOptimizer};

#[derive(Parser)]
#[command(name = "svgmin")]
#[command(about = "SVG minify and format commands", long_about = None)]
struct Cli {
    /// Settings file (JSON) with plugin toggles under "svg.minify"
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Minify a file into a .min sibling, or in place
    Minify {
        input: PathBuf,

        /// Rewrite the input file instead of writing a sibling
        #[arg(long)]
        in_place: bool,

        /// Skip the destructive-minify confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Pretty-print a document
    Format {
        /// Input file (use - for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Output file (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Indent width in spaces
        #[arg(long, default_value = "4")]
        indent: u8,
    },
    /// Print the minified document as a base64 data URI
    Datauri {
        /// Input file (use - for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}

/// Document backed by a file, or by stdin when the path is `-`.
struct FsDocument {
    path: Option<PathBuf>,
    text: String,
    language: String,
}

impl FsDocument {
    fn load(input: &Path) -> io::Result<Self> {
        if input.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            // stdin carries no name; assume the caller pipes SVG
            return Ok(Self {
                path: None,
                text,
                language: SVG_LANGUAGE.to_string(),
            });
        }
        let text = fs::read_to_string(input)?;
        let language = match input.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => SVG_LANGUAGE.to_string(),
            Some(ext) => ext.to_ascii_lowercase(),
            None => "plaintext".to_string(),
        };
        Ok(Self {
            path: Some(input.to_path_buf()),
            text,
            language,
        })
    }
}

impl DocumentView for FsDocument {
    fn language_id(&self) -> &str {
        &self.language
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// In-place edits write straight back to the file.
struct FileEditor {
    path: PathBuf,
}

impl DocumentEditor for FileEditor {
    fn replace_all(&mut self, new_text: &str) {
        if let Err(e) = fs::write(&self.path, new_text) {
            warn!(path = %self.path.display(), error = %e, "could not write document");
        }
    }
}

/// A terminal has no clipboard; the URI goes to stdout.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) {
        println!("{text}");
    }
}

struct TerminalGate {
    assume_yes: bool,
}

impl WarningGate for TerminalGate {
    fn confirm(&mut self, message: &str, detail: &str) -> Confirmation {
        if self.assume_yes {
            return Confirmation::Proceed;
        }
        eprintln!("{message}");
        eprintln!("{detail}");
        eprint!("[y]es / [a]lways / [n]o: ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return Confirmation::Cancel;
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Confirmation::Proceed,
            "a" | "always" => Confirmation::ProceedAndRemember,
            _ => Confirmation::Cancel,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    let toggles = settings.minify_toggles();
    let optimizer = XmlOptimizer;
    let mut store = FileStateStore::open(
        FileStateStore::default_path().unwrap_or_else(|| PathBuf::from(".svgmin-state.json")),
    );

    match cli.command {
        Command::Minify {
            input,
            in_place,
            yes,
        } => {
            let mut gate = TerminalGate { assume_yes: yes };
            if in_place {
                if input.as_os_str() == "-" {
                    return Err("--in-place needs a file path".into());
                }
                let doc = FsDocument::load(&input)?;
                let mut editor = FileEditor {
                    path: input.clone(),
                };
                if minify_in_place(
                    &mut store,
                    &mut gate,
                    &optimizer,
                    &toggles,
                    &doc,
                    &mut editor,
                )? {
                    eprintln!("minified {}", input.display());
                }
            } else if let Some(sibling) =
                minify_to_file(&mut store, &mut gate, &optimizer, &toggles, &input)?
            {
                eprintln!("wrote {}", sibling.display());
            }
        }
        Command::Format {
            input,
            output,
            indent,
        } => {
            let doc = FsDocument::load(&input)?;
            if let Some(formatted) =
                format_document(&optimizer, &doc.text(), FormattingOptions { tab_size: indent })?
            {
                write_output(&output, &formatted)?;
            }
        }
        Command::Datauri { input } => {
            let doc = FsDocument::load(&input)?;
            let mut clipboard = StdoutClipboard;
            copy_data_uri(&optimizer, &toggles, &doc, &mut clipboard)?;
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(Settings::parse(&text)?)
        }
        None => Ok(Settings::new()),
    }
}

fn write_output(output: &Path, text: &str) -> io::Result<()> {
    if output.as_os_str() == "-" {
        io::stdout().write_all(text.as_bytes())?;
        io::stdout().write_all(b"\n")?;
        Ok(())
    } else {
        fs::write(output, text)
    }
}
