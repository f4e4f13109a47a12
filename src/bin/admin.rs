//! CLI inspection tool for site-publisher.
//!
//! Shows what the daily build would publish without writing anything.
//!
//! # Usage
//!
//! ```bash
//! # Status of every article
//! cargo run --bin admin -- articles list
//!
//! # Upcoming articles, earliest first
//! cargo run --bin admin -- articles scheduled
//!
//! # Counts as of a given time
//! cargo run --bin admin -- --now 2024-06-01T00:00:00Z stats
//!
//! # Check the sitemap marker entry
//! cargo run --bin admin -- sitemap check
//! ```
//!
//! # Environment Variables
//!
//! Same as the main binary; see `site_publisher::config`.
//!
//! # Features
//!
//! - **Article Status**: LIVE / SCHEDULED / INVALID DATE per article
//! - **Statistics**: counts and next publication time
//! - **Sitemap Check**: marker presence and current lastmod
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use site_publisher::application::services::{MarkerLookup, SitemapService};
use site_publisher::config::{self, Config};
use site_publisher::domain::entities::Article;
use site_publisher::domain::repositories::ArticleRepository;
use site_publisher::domain::{ArticleStatus, PublishDate, PublishPartition};
use site_publisher::infrastructure::persistence::{FileSitemapRepository, JsonArticleRepository};

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for inspecting site content.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site root directory (overrides SITE_ROOT)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Evaluate publish dates at this RFC 3339 time instead of now
    #[arg(long, global = true)]
    now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect articles
    Articles {
        #[command(subcommand)]
        action: ArticlesAction,
    },

    /// Show publishing statistics
    Stats,

    /// Sitemap operations
    Sitemap {
        #[command(subcommand)]
        action: SitemapAction,
    },
}

/// Article inspection subcommands.
#[derive(Subcommand)]
enum ArticlesAction {
    /// List every article with its status
    List,

    /// List articles waiting for their publish date
    Scheduled,
}

/// Sitemap subcommands.
#[derive(Subcommand)]
enum SitemapAction {
    /// Check that the marker entry exists
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env(cli.root)?;

    let now = cli.now.unwrap_or_else(Utc::now);

    match cli.command {
        Commands::Articles { action } => handle_articles_action(action, &config, now).await?,
        Commands::Stats => handle_stats(&config, now).await?,
        Commands::Sitemap { action } => handle_sitemap_action(action, &config).await?,
    }

    Ok(())
}

async fn load_articles(config: &Config) -> Result<Vec<Article>> {
    let repo = JsonArticleRepository::new(config.database_file());
    Ok(repo.load_all().await?)
}

/// Dispatches article inspection commands.
async fn handle_articles_action(
    action: ArticlesAction,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<()> {
    let articles = load_articles(config).await?;

    match action {
        ArticlesAction::List => list_articles(&articles, now),
        ArticlesAction::Scheduled => list_scheduled(&articles, now),
    }

    Ok(())
}

/// Lists all articles with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Articles as of 2024-06-01T00:00:00Z
///
///   ID       Title                                    Publish date          Status
///   ───────────────────────────────────────────────────────────────────────────────────
///   1        Spring review                            -                     LIVE
///   2        Summer guide                             2099-01-01 00:00      SCHEDULED
/// ```
fn list_articles(articles: &[Article], now: DateTime<Utc>) {
    println!(
        "{} {}",
        "📋 Articles as of".bright_blue().bold(),
        format_time(now).bright_blue().bold()
    );
    println!();

    if articles.is_empty() {
        println!("{}", "  No articles found".yellow());
        println!();
        return;
    }

    print_header();

    for article in articles {
        let date = PublishDate::of(article);
        let status = match date.status_at(now) {
            ArticleStatus::Live => "LIVE".green(),
            ArticleStatus::Scheduled(_) => "SCHEDULED".yellow(),
            ArticleStatus::InvalidDate => "INVALID DATE".red(),
        };

        print_row(article, &describe_date(&date), status);
    }

    println!();
    println!(
        "  Total: {}",
        articles.len().to_string().bright_white().bold()
    );
    println!();
}

/// Lists scheduled articles, earliest publication first.
fn list_scheduled(articles: &[Article], now: DateTime<Utc>) {
    println!("{}", "⏳ Scheduled Articles".bright_blue().bold());
    println!();

    let partition = PublishPartition::at(now, articles);
    let scheduled = partition.scheduled_by_date();

    if scheduled.is_empty() {
        println!("{}", "  Nothing scheduled".yellow());
        println!();
        return;
    }

    print_header();

    for entry in &scheduled {
        print_row(
            entry.article,
            &entry.publish_at.format("%Y-%m-%d %H:%M").to_string(),
            "SCHEDULED".yellow(),
        );
    }

    println!();
    if let Some(next) = partition.next_publication() {
        println!("  Next publication: {}", format_time(next).bright_green().bold());
    }
    println!(
        "  Total: {}",
        scheduled.len().to_string().bright_white().bold()
    );
    println!();
}

/// Displays publishing statistics.
///
/// Shows:
/// - Total number of articles
/// - Live, scheduled and invalid-date counts
/// - Next publication time
async fn handle_stats(config: &Config, now: DateTime<Utc>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let articles = load_articles(config).await?;
    let partition = PublishPartition::at(now, &articles);

    println!(
        "  Articles:      {}",
        partition.total().to_string().bright_white().bold()
    );
    println!(
        "  Live:          {}",
        partition.live.len().to_string().bright_green().bold()
    );
    println!(
        "  Scheduled:     {}",
        partition.scheduled.len().to_string().yellow().bold()
    );

    let invalid = partition.invalid.len().to_string();
    if partition.invalid.is_empty() {
        println!("  Invalid dates: {}", invalid.bright_black());
    } else {
        println!("  Invalid dates: {}", invalid.red().bold());
    }

    match partition.next_publication() {
        Some(next) => println!("  Next:          {}", format_time(next).cyan()),
        None => println!("  Next:          {}", "-".bright_black()),
    }
    println!();

    Ok(())
}

/// Handles sitemap diagnostic commands.
async fn handle_sitemap_action(action: SitemapAction, config: &Config) -> Result<()> {
    match action {
        SitemapAction::Check => {
            println!("{}", "🔍 Checking sitemap marker...".bright_blue());

            let service = SitemapService::new(
                Arc::new(FileSitemapRepository::new(config.sitemap_file())),
                config.sitemap_page.clone(),
            );

            match service.inspect().await? {
                MarkerLookup::Found(entry) => {
                    println!("{}", "✅ Marker found".green().bold());
                    println!("  Loc:     {}", entry.loc.trim().cyan());
                    println!("  Lastmod: {}", entry.lastmod.bright_white());
                }
                MarkerLookup::NotFound => {
                    println!(
                        "{} {}",
                        "⚠️  No <loc>/<lastmod> entry for".yellow(),
                        config.sitemap_locator()?.as_str().yellow()
                    );
                }
                MarkerLookup::SitemapMissing => {
                    println!(
                        "{} {}",
                        "❌ Sitemap not found:".red(),
                        config.sitemap_file().display()
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_header() {
    println!(
        "  {:<8} {:<40} {:<21} {:<10}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Publish date".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(83).bright_black());
}

fn print_row(article: &Article, date: &str, status: ColoredString) {
    println!(
        "  {:<8} {:<40} {:<21} {}",
        truncate(&article.id_label(), 8).bright_black(),
        truncate(&article.title_label(), 40).cyan(),
        truncate(date, 21).bright_black(),
        status
    );
}

fn describe_date(date: &PublishDate) -> String {
    match date {
        PublishDate::Immediate => "-".to_string(),
        PublishDate::At(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        PublishDate::Invalid(raw) => raw.to_string(),
    }
}

fn format_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Shortens `text` to at most `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
