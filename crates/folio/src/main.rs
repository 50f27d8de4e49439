//! Folio CLI - static homepage renderer.
//!
//! Provides commands for:
//! - `build`: Render every page to static HTML files
//! - `render`: Print one rendered page to stdout
//! - `copy`: Copy a glossary code example to the clipboard

mod commands;
mod error;
mod output;
mod site;
mod template;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CopyArgs, RenderArgs};
use output::Output;

/// Folio - static homepage renderer.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page to static HTML files.
    Build(BuildArgs),
    /// Print one rendered page to stdout.
    Render(RenderArgs),
    /// Copy a code example to the clipboard.
    Copy(CopyArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Build(args) => args.site.verbose,
            Self::Render(args) => args.site.verbose,
            Self::Copy(args) => args.site.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Copy(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const HOME: &str = r#"{
        "id": "home",
        "name": "Home",
        "title": "Welcome",
        "type": "list",
        "data": [{"type": "list", "title": "Docs", "content": [
            {"url": "https://doc.rust-lang.org", "text": "Rust docs"}
        ]}]
    }"#;

    const GLOSSARY: &str = r#"{
        "id": "glossary",
        "name": "Glossary",
        "title": "Terms",
        "type": "terms",
        "data": [{"term": "Closure", "definition": "Captures <em>state</em>",
            "examples": [{"text": "Add one", "code": "|x| x + 1"}]}]
    }"#;

    fn write_project(dir: &Path) {
        std::fs::create_dir_all(dir.join("data")).unwrap();
        std::fs::write(dir.join("data/home.json"), HOME).unwrap();
        std::fs::write(dir.join("data/glossary.json"), GLOSSARY).unwrap();
        std::fs::write(
            dir.join("folio.toml"),
            "[site]\nfiles = [\"home.json\", \"glossary.json\", \"missing.json\"]\n",
        )
        .unwrap();
    }

    #[test]
    fn test_build_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path());
        let config = dir.path().join("folio.toml");
        let out = dir.path().join("out");

        let cli = Cli::try_parse_from([
            "folio",
            "build",
            "--config",
            config.to_str().unwrap(),
            "--output-dir",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build command");
        };
        args.execute().unwrap();

        let index = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("Rust docs"));
        assert!(index.contains("class=\"nav-link active\" data-page=\"home\""));

        let glossary = std::fs::read_to_string(out.join("glossary.html")).unwrap();
        assert!(glossary.contains("<h1 id=\"page-title\">Terms</h1>"));
        assert!(glossary.contains("Captures <em>state</em>"));
        assert!(glossary.contains("|x| x + 1"));
        assert!(out.join("home.html").exists());
    }

    fn descriptor(id: &str, title: &str) -> String {
        format!(r#"{{"id": "{id}", "name": "{title}", "title": "{title}", "type": "list", "data": []}}"#)
    }

    fn build(config: &Path, out: &Path) {
        let cli = Cli::try_parse_from([
            "folio",
            "build",
            "--config",
            config.to_str().unwrap(),
            "--output-dir",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build command");
        };
        args.execute().unwrap();
    }

    #[test]
    fn test_build_gives_each_page_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("home.json"), descriptor("home", "Welcome")).unwrap();
        std::fs::write(data.join("index.json"), descriptor("index", "A-Z Index")).unwrap();
        std::fs::write(data.join("spaced.json"), descriptor("a b", "Spaced")).unwrap();
        std::fs::write(data.join("dashed.json"), descriptor("a-b", "Dashed")).unwrap();
        let config = dir.path().join("folio.toml");
        std::fs::write(
            &config,
            "[site]\nfiles = [\"home.json\", \"index.json\", \"spaced.json\", \"dashed.json\"]\n",
        )
        .unwrap();
        let out = dir.path().join("out");

        build(&config, &out);

        let read = |file: &str| std::fs::read_to_string(out.join(file)).unwrap();
        assert!(read("index.html").contains("<h1 id=\"page-title\">Welcome</h1>"));
        assert!(read("home.html").contains("<h1 id=\"page-title\">Welcome</h1>"));
        assert!(read("index-2.html").contains("<h1 id=\"page-title\">A-Z Index</h1>"));
        assert!(read("a-b.html").contains("<h1 id=\"page-title\">Spaced</h1>"));
        assert!(read("a-b-2.html").contains("<h1 id=\"page-title\">Dashed</h1>"));

        let nav = read("index.html");
        assert!(nav.contains("<a href=\"index-2.html\" class=\"nav-link\" data-page=\"index\">"));
        assert!(nav.contains("<a href=\"a-b-2.html\" class=\"nav-link\" data-page=\"a-b\">"));
    }

    #[test]
    fn test_build_fails_without_content() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("folio.toml");
        std::fs::write(&config, "[site]\nfiles = [\"home.json\"]\n").unwrap();

        let cli = Cli::try_parse_from(["folio", "build", "--config", config.to_str().unwrap()])
            .unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build command");
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("No page descriptors could be loaded"));
    }

    #[test]
    fn test_verbose_flag_per_command() {
        let cli = Cli::try_parse_from(["folio", "render", "--fragment", "-v", "glossary"]).unwrap();
        assert!(cli.command.verbose());

        let cli = Cli::try_parse_from(["folio", "copy", "glossary", "closure-example-0"]).unwrap();
        assert!(!cli.command.verbose());
    }
}
