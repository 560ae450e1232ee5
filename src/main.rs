//! mdblock CLI - render Markdown blocks to HTML

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use mdblock::{HtmlRenderer, Options};

#[derive(Parser, Debug)]
#[command(name = "mdblock")]
#[command(version)]
#[command(about = "Render the block structure of a Markdown document as HTML")]
#[command(after_help = "\
EXAMPLES:

    # Render a file to stdout
    mdblock README.md

    # Render from stdin
    cat README.md | mdblock -")]
struct Cli {
    /// Accept `#Heading` without a space and strip any trailing `#` run
    #[arg(long)]
    permissive_atx: bool,

    /// Treat indented lines as ordinary text
    #[arg(long)]
    no_indented_code: bool,

    /// Input file; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            permissive_atx_headers: self.permissive_atx,
            no_indented_code: self.no_indented_code,
        }
    }

    fn read_input(&self) -> io::Result<Vec<u8>> {
        match self.file.as_deref() {
            Some(path) if path != Path::new("-") => std::fs::read(path),
            _ => {
                let mut buf = Vec::new();
                io::stdin().read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let input = cli.read_input()?;

    let mut html = HtmlRenderer::with_capacity_for(input.len());
    if let Err(err) = mdblock::parse(&input, &mut html, &cli.options()) {
        log::error!("{err}");
        std::process::exit(1);
    }
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_options() {
        let args = ["mdblock", "--permissive-atx", "--no-indented-code", "doc.md"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(
            cli.options().bits(),
            mdblock::FLAG_PERMISSIVE_ATX_HEADERS | mdblock::FLAG_NO_INDENTED_CODE
        );
        assert_eq!(cli.file.as_deref(), Some(Path::new("doc.md")));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mdblock"]).unwrap();
        assert_eq!(cli.options(), Options::default());
        assert!(cli.file.is_none());

        let cli = Cli::try_parse_from(["mdblock", "-"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some(Path::new("-")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["mdblock", "--frobnicate"]).is_err());
    }
}
