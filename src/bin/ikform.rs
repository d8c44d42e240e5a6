use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use ikform::MetadataProbe as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ikform", version)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the whole form: access gate, metadata probe, URLs.
    Page(PageArgs),
    /// Build preview/download/origin URLs only (no gate, no probe).
    Urls(UrlsArgs),
    /// Read the pixel dimensions of an image URL.
    Probe(ProbeArgs),
    /// List widget choices and ranges.
    Options,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Query string handed over by the host, e.g. `access_token=..&imagekit_id=..&path=..`.
    #[arg(long)]
    query: String,

    /// Form state JSON; missing fields take widget defaults.
    #[arg(long)]
    form: Option<PathBuf>,

    /// Config JSON (secrets may also come from ACCESS_TOKEN / IMAGEKIT_ID).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the metadata probe.
    #[arg(long)]
    no_probe: bool,

    /// Print the page as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct UrlsArgs {
    /// Form state JSON; missing fields take widget defaults.
    #[arg(long)]
    form: Option<PathBuf>,

    /// Image path (overrides the form's `path`).
    #[arg(long)]
    path: Option<String>,

    /// ImageKit account identifier.
    #[arg(long)]
    imagekit_id: String,

    /// Delivery host.
    #[arg(long, default_value = ikform::IMAGEKIT_BASE_URL)]
    base_url: String,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Image URL to probe.
    #[arg(long)]
    url: String,

    /// Request timeout in milliseconds (default: none).
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Page(args) => cmd_page(args),
        Command::Urls(args) => cmd_urls(args),
        Command::Probe(args) => cmd_probe(args),
        Command::Options => {
            cmd_options();
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_form_json(path: &Path) -> anyhow::Result<ikform::FormState> {
    let f = File::open(path).with_context(|| format!("open form '{}'", path.display()))?;
    let r = BufReader::new(f);
    let form: ikform::FormState =
        serde_json::from_reader(r).with_context(|| "parse form JSON")?;
    Ok(form)
}

fn load_form(path: Option<&Path>, seed_path: Option<&str>) -> anyhow::Result<ikform::FormState> {
    let mut form = match path {
        Some(p) => read_form_json(p)?,
        None => ikform::FormState::default(),
    };
    if form.path.is_empty() {
        form.path = seed_path.unwrap_or_default().to_string();
    }
    form.validate()?;
    Ok(form)
}

fn cmd_page(args: PageArgs) -> anyhow::Result<()> {
    let config = ikform::AppConfig::load(args.config.as_deref())?;
    let query = ikform::QueryParams::parse(&args.query);
    // Credentials are checked before the form is even read.
    ikform::AccessGate::new(config.secrets.clone())
        .authorize(query.access_token.as_deref(), query.imagekit_id.as_deref())?;
    let form = load_form(args.form.as_deref(), query.path.as_deref())?;

    let http;
    let probe: Option<&dyn ikform::MetadataProbe> = if args.no_probe {
        None
    } else {
        http = ikform::HttpProbe::new(&config.probe)?;
        Some(&http)
    };

    let view = ikform::render_page(&query, &form, &config, probe)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("serialize page")?
        );
    } else {
        print!("{view}");
    }
    Ok(())
}

fn cmd_urls(args: UrlsArgs) -> anyhow::Result<()> {
    let mut form = load_form(args.form.as_deref(), None)?;
    if let Some(path) = args.path {
        form.path = path;
    }
    let endpoint = ikform::Endpoint {
        base_url: args.base_url,
        imagekit_id: args.imagekit_id,
    };
    let urls = ikform::build_urls(&form, &endpoint);
    println!("preview:  {}", urls.preview);
    println!("download: {}", urls.download);
    println!("origin:   {}", urls.origin);
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let config = ikform::ProbeConfig {
        timeout_ms: args.timeout_ms,
        ..ikform::ProbeConfig::default()
    };
    let probe = ikform::HttpProbe::new(&config)?;
    let dims = probe.probe(&args.url)?;
    println!("Image detail: {dims}");
    Ok(())
}

fn cmd_options() {
    let range = |name: &str, r: ikform::WidgetRange| {
        println!(
            "{name}: {}..={} step {} (default {})",
            r.min, r.max, r.step, r.default
        );
    };
    range("resize width/height", ikform::WidgetRange::RESIZE);
    range("extract x/y", ikform::WidgetRange::EXTRACT_POSITION);
    range("text lx/ly", ikform::WidgetRange::TEXT_POSITION);

    let focus: Vec<_> = ikform::Focus::ALL.iter().map(|f| f.as_str()).collect();
    println!("focus: {}", focus.join(", "));
    let formats: Vec<_> = ikform::OutputFormat::ALL
        .iter()
        .map(|f| f.as_str())
        .collect();
    println!("format: {}", formats.join(", "));
    let fonts: Vec<_> = ikform::Font::ALL.iter().map(|f| f.name()).collect();
    println!("font: {}", fonts.join(", "));
    println!("font size: {}", ikform::OVERLAY_FONT_SIZE);
}
