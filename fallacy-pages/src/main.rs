use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use fallacy_core::{FallacyCollection, SiteConfig, page_file_name, render_page};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "fallacy-pages", version)]
#[command(about = "Generate one static page per fallacy with link-preview metadata")]
struct Args {
    /// Fallacy collection (JSON)
    #[arg(long, default_value = "fallacies.json")]
    data: PathBuf,

    /// Base page the generated pages are derived from
    #[arg(long, default_value = "index.html")]
    template: PathBuf,

    /// Directory the pages are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Public address of the site, used in canonical and share URLs
    #[arg(long)]
    site_url: Option<String>,

    /// Site name shown in link previews
    #[arg(long)]
    site_name: Option<String>,

    /// List the pages that would be generated and exit
    #[arg(long)]
    list: bool,

    /// Render every page but write nothing
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn site(&self) -> SiteConfig {
        let mut site = SiteConfig::default();
        if let Some(url) = &self.site_url {
            site.site_url = url.trim_end_matches('/').to_string();
        }
        if let Some(name) = &self.site_name {
            site.site_name.clone_from(name);
        }
        site
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let collection = load_collection(&args.data)?;

    if args.list {
        for fallacy in &collection {
            println!("{}  {}", page_file_name(fallacy), fallacy.title);
        }
        return Ok(());
    }

    announce_banner();
    let template = fs::read_to_string(&args.template)
        .with_context(|| format!("reading template {}", args.template.display()))?;
    let written = generate(&collection, &template, &args.site(), &args.out_dir, args.dry_run)?;

    let verb = if args.dry_run { "Rendered" } else { "Generated" };
    println!(
        "\n{} {} of {} pages",
        "✓".green().bold(),
        format!("{verb} {written}").as_str().bold(),
        collection.len()
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn announce_banner() {
    println!("{}", "📄 Fallacy Page Generator".bright_cyan().bold());
    println!("{}", "═".repeat(40).bright_black());
}

fn load_collection(path: &Path) -> Result<FallacyCollection> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading collection {}", path.display()))?;
    let collection = FallacyCollection::from_json(&json)
        .with_context(|| format!("parsing collection {}", path.display()))?;
    if collection.is_empty() {
        bail!("collection {} has no fallacies", path.display());
    }
    log::debug!("loaded {} fallacies from {}", collection.len(), path.display());
    Ok(collection)
}

/// Render and (unless `dry_run`) write one page per item. Returns the page count.
fn generate(
    collection: &FallacyCollection,
    template: &str,
    site: &SiteConfig,
    out_dir: &Path,
    dry_run: bool,
) -> Result<usize> {
    if !dry_run {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    }

    let mut written = 0;
    for fallacy in collection {
        let page = render_page(template, fallacy, site)
            .with_context(|| format!("rendering page for {}", fallacy.slug))?;
        let file_name = page_file_name(fallacy);
        if dry_run {
            log::debug!("would write {file_name} ({} bytes)", page.len());
        } else {
            let target = out_dir.join(&file_name);
            fs::write(&target, page).with_context(|| format!("writing {}", target.display()))?;
            println!("{} {file_name}", "Generated:".green());
        }
        written += 1;
    }
    Ok(written)
}
