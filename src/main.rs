use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use charset_filter::analysis::analyze;
use charset_filter::filtering::{filter_text, CharsetSet};

/// Analyzes which of the 40 charsets the characters of a UTF-8 text file fall
/// into, and optionally writes a filtered copy of the file.
#[derive(Parser)]
#[command(name = "charset-filter", version)]
struct Cli {
    /// UTF-8 text file to analyze
    #[arg(long, short, value_name = "FILE")]
    file: PathBuf,

    /// Report per-character frequencies too, saving the report as
    /// <FILE stem>_report.txt instead of printing it
    #[arg(long)]
    detail: bool,

    /// Filter the text and save the result
    #[arg(long)]
    filter: bool,

    /// Charset ids to remove when filtering (default: 0 3)
    #[arg(
        long = "remove_charset",
        value_name = "ID",
        num_args = 1..,
        value_parser = clap::value_parser!(u8).range(0..40)
    )]
    remove_charset: Vec<u8>,

    /// Charset ids to keep when filtering; listing an id here protects it
    /// even when it also appears in --remove_charset
    #[arg(
        long = "remain_charset",
        value_name = "ID",
        num_args = 1..,
        value_parser = clap::value_parser!(u8).range(0..40)
    )]
    remain_charset: Vec<u8>,

    /// Output path for the filtered text (default: <FILE stem>_out.txt)
    #[arg(long, value_name = "FILE")]
    outfile: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("cannot read {}", cli.file.display()))?;

    eprintln!("Analyzing {}...", cli.file.display());
    let report = analyze(&text);

    let file_name = cli
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut out = format!("{:-^60}\n", format!("[{file_name}] charset analysis"));
    out.push_str(&report.render(cli.detail));

    if cli.detail {
        let report_path = sibling_path(&cli.file, "_report.txt");
        fs::write(&report_path, &out)
            .with_context(|| format!("cannot write {}", report_path.display()))?;
        eprintln!("Report saved to {}", report_path.display());
    } else {
        print!("{out}");
    }

    if cli.filter {
        eprintln!("Filtering characters...");
        let filtered = filter_text(
            &text,
            CharsetSet::from_ids(&cli.remove_charset),
            CharsetSet::from_ids(&cli.remain_charset),
        );
        let out_path = cli
            .outfile
            .unwrap_or_else(|| sibling_path(&cli.file, "_out.txt"));
        fs::write(&out_path, filtered)
            .with_context(|| format!("cannot write {}", out_path.display()))?;
        eprintln!("Filtered text saved to {}", out_path.display());
    }

    Ok(())
}

/// `dir/name.txt` plus `_out.txt` becomes `dir/name_out.txt`, next to the
/// input.
fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_derive_from_the_input_stem() {
        assert_eq!(
            sibling_path(Path::new("data/input.txt"), "_out.txt"),
            Path::new("data/input_out.txt")
        );
        assert_eq!(
            sibling_path(Path::new("notes.md"), "_report.txt"),
            Path::new("notes_report.txt")
        );
        assert_eq!(
            sibling_path(Path::new("no_extension"), "_out.txt"),
            Path::new("no_extension_out.txt")
        );
    }

    #[test]
    fn cli_declaration_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
