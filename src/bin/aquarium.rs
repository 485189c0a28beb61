use std::path::{Path, PathBuf};

use anyhow::Context as _;
use aquarium::catalog::FishCatalog as _;
use aquarium::compose::RenderedFish;
use aquarium::patterns::builtin_patterns;
use aquarium::selection::today_utc;
use aquarium::{
    AquariumConfig, Catalog, ColorScheme, FishRecord, FishRenderer, JsonFileStore, SavedFishList,
    ShapeKind,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aquarium", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one catalog fish as SVG or PNG.
    Render(RenderArgs),
    /// Render every shape and pattern combination into a directory.
    Gallery(GalleryArgs),
    /// Print the fish of the day.
    Daily(DailyArgs),
    /// Print a selection for a display configuration.
    Select(SelectArgs),
    /// Manage the saved fish list.
    List(ListArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Catalog directory (`fish.json`, optional `index.json` and `sources.json`).
    #[arg(long)]
    catalog: PathBuf,

    /// Fish id.
    #[arg(long)]
    id: String,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Write a PNG instead of SVG.
    #[arg(long, default_value_t = false)]
    png: bool,

    /// Raster scale (PNG only).
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Primary color for every fish.
    #[arg(long)]
    color: Option<String>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct DailyArgs {
    /// Catalog directory.
    #[arg(long)]
    catalog: PathBuf,

    /// Number of fish.
    #[arg(long, default_value_t = 8)]
    count: usize,

    /// UTC date (`YYYY-MM-DD`); today when omitted.
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Parser, Debug)]
struct SelectArgs {
    /// Catalog directory.
    #[arg(long)]
    catalog: PathBuf,

    /// Display configuration JSON; defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ids to leave out (repeatable).
    #[arg(long)]
    exclude: Vec<String>,

    /// Seed for the shuffle; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// JSON store file.
    #[arg(long)]
    store: PathBuf,

    #[command(subcommand)]
    action: ListAction,
}

#[derive(Subcommand, Debug)]
enum ListAction {
    /// Print saved ids.
    Show,
    /// Save a fish.
    Add { id: String },
    /// Forget a fish.
    Remove { id: String },
    /// Save or forget a fish.
    Toggle { id: String },
    /// Forget every fish.
    Clear,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Gallery(args) => cmd_gallery(args),
        Command::Daily(args) => cmd_daily(args),
        Command::Select(args) => cmd_select(args),
        Command::List(args) => cmd_list(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let catalog = Catalog::from_dir(&args.catalog)?;
    let record = catalog
        .fish_by_id(&args.id)
        .with_context(|| format!("fish '{}' not found in catalog", args.id))?;
    let svg = FishRenderer::default().try_render(record, &record.id)?;

    ensure_parent(&args.out)?;
    if args.png {
        let png = aquarium::rasterize_png(&svg, args.scale)?;
        std::fs::write(&args.out, png)
            .with_context(|| format!("write png '{}'", args.out.display()))?;
    } else {
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    if let Some(color) = &args.color {
        aquarium::Rgb::parse(color).with_context(|| format!("invalid --color '{color}'"))?;
    }
    let mut records = Vec::new();
    for shape in ShapeKind::ALL {
        for pattern in builtin_patterns() {
            let mut record = FishRecord::new(format!("{shape}-{pattern}"));
            record.appearance.body_shape = Some(shape.name().to_owned());
            record.appearance.pattern = Some(pattern.to_owned());
            record.colors = ColorScheme {
                primary: args.color.clone(),
                ..ColorScheme::default()
            };
            records.push(record);
        }
    }

    let renderer = FishRenderer::default();
    let rendered = match args.threads {
        Some(n) => aquarium::compose::render_batch_with_threads(&renderer, &records, n)?,
        None => aquarium::render_batch(&renderer, &records),
    };

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    for RenderedFish { id, markup } in &rendered {
        let path = args.out.join(format!("{id}.svg"));
        std::fs::write(&path, markup).with_context(|| format!("write '{}'", path.display()))?;
    }
    eprintln!("wrote {} fish to {}", rendered.len(), args.out.display());
    Ok(())
}

fn cmd_daily(args: DailyArgs) -> anyhow::Result<()> {
    let catalog = Catalog::from_dir(&args.catalog)?;
    let date = args.date.unwrap_or_else(today_utc);
    let picked = aquarium::select_daily_fish_on(catalog.index(), args.count, date);
    print_selection(&catalog, &picked);
    Ok(())
}

fn cmd_select(args: SelectArgs) -> anyhow::Result<()> {
    let catalog = Catalog::from_dir(&args.catalog)?;
    let config = match &args.config {
        Some(path) => AquariumConfig::from_path(path)?,
        None => AquariumConfig::default(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let picked = aquarium::select_for_config(
        catalog.index(),
        &config,
        &args.exclude,
        today_utc(),
        &mut rng,
    );
    print_selection(&catalog, &picked);
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let store = JsonFileStore::open(&args.store)?;
    let mut list = SavedFishList::load(store)?;
    match args.action {
        ListAction::Show => {}
        ListAction::Add { id } => {
            if !list.add(&id)? {
                eprintln!("'{id}' is already saved");
            }
        }
        ListAction::Remove { id } => {
            if !list.remove(&id)? {
                eprintln!("'{id}' was not saved");
            }
        }
        ListAction::Toggle { id } => {
            let saved = list.toggle(&id)?;
            eprintln!("'{id}' {}", if saved { "saved" } else { "removed" });
        }
        ListAction::Clear => list.clear()?,
    }
    for id in list.ids() {
        println!("{id}");
    }
    Ok(())
}

fn print_selection(catalog: &Catalog, picked: &[aquarium::FishSummary]) {
    for fish in picked {
        let name = catalog
            .fish_by_id(&fish.id)
            .map(|r| r.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("-");
        println!("{}\t{}\t{}", fish.id, fish.body_shape, name);
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
