use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use legend_rs::SaveOptions;
use legend_rs::spec_file::LegendFile;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "legend",
    version,
    about = "Compose standalone legend graphics from a JSON description"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a legend file to an image (.svg, .png, .jpg or .bmp).
    Render(RenderArgs),
    /// Open a window showing the legend.
    Show(FigureArgs),
    /// Validate a legend file and print a short summary.
    Check(SpecArg),
}

#[derive(Args, Debug)]
struct SpecArg {
    /// Legend description (JSON).
    #[arg(short, long)]
    spec: PathBuf,
}

#[derive(Args, Debug)]
struct FigureArgs {
    #[command(flatten)]
    spec: SpecArg,
    /// Figure width in inches (requires --height). Overrides the file's figsize.
    #[arg(long, requires = "height")]
    width: Option<f64>,
    /// Figure height in inches (requires --width).
    #[arg(long, requires = "width")]
    height: Option<f64>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    figure: FigureArgs,
    /// Output image path; the format is taken from the extension.
    #[arg(short, long)]
    out: PathBuf,
    /// Output resolution (dots per inch).
    #[arg(long)]
    dpi: Option<f64>,
}

fn load(path: &Path) -> Result<LegendFile> {
    LegendFile::load(path).with_context(|| format!("reading legend file {}", path.display()))
}

fn figsize(args: &FigureArgs, file: &LegendFile) -> Option<(f64, f64)> {
    match (args.width, args.height) {
        (Some(w), Some(h)) => Some((w, h)),
        _ => file.figsize,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Show(args) => cmd_show(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let file = load(&args.figure.spec.spec)?;
    let size = figsize(&args.figure, &file);
    let mut legend = file.into_legend()?;
    legend.create(size)?;
    let options = SaveOptions { dpi: args.dpi };
    legend
        .save_with(&args.out, &options)
        .with_context(|| format!("writing {}", args.out.display()))?;
    eprintln!("Wrote legend to {}", args.out.display());
    Ok(())
}

fn cmd_show(args: FigureArgs) -> Result<()> {
    let file = load(&args.spec.spec)?;
    let size = figsize(&args, &file);
    let mut legend = file.into_legend()?;
    legend.create(size)?;
    legend.show()?;
    Ok(())
}

fn cmd_check(args: SpecArg) -> Result<()> {
    let file = load(&args.spec)?;
    let legend = file.into_legend()?;
    println!(
        "{}: {} entries, {} column(s)",
        args.spec.display(),
        legend.entries().len(),
        legend.style().ncol
    );
    Ok(())
}
