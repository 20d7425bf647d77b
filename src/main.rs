//! Facetr CLI application entry point
//!
//! Command-line front end for the faceted listing engine. Each page in
//! the rendered site owns one item collection; this binary resolves a
//! collection the way the page scripts do and prints the result.
//!
//! # Features
//!
//! - **List**: resolve a collection under a query, tag conjunction, and
//!   sort key, and print the visible cards in order
//! - **Tags**: print the tag catalog for a collection
//! - **Feed**: render an Atom or RSS document over one or more
//!   collections
//! - **Quiet Mode**: suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Resolve the projects listing, newest first
//! facetr list --items projects.json
//!
//! # Conjunctive tag filter plus a query, sorted by citations
//! facetr list --items projects.json -t nlp -t rl --sort citations attention
//!
//! # Writing posts support only newest and relevance
//! facetr list --items writing.json --kind writing --sort relevance parsing
//!
//! # Tag catalog
//! facetr tags --items projects.json
//!
//! # Combined feed over both collections
//! facetr feed --projects projects.json --writing writing.json --format rss
//!
//! # Quiet mode (only card ids)
//! facetr -q list --items projects.json
//! ```
//!
//! # Configuration
//!
//! Site metadata and selector overrides load from a TOML file passed
//! via `--config`; without one, defaults apply.

use facetr::{
    FacetrError,
    cli::{Cli, Commands, FeedFormat},
    config::FacetrConfig,
    feed::{atom_feed, rss_feed},
    filter::SortKey,
    output,
    schema::{self, Item, ListingKind},
    session::{FilterAction, ListingSession},
    surface::MockSurface,
};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, FacetrError>;

/// Handle the list command - resolve a collection and print the cards
///
/// Builds a session over the collection, replays the CLI filters as
/// dispatched actions against an in-memory surface, and prints what
/// that surface ends up showing. The printed order is exactly the order
/// the reconciler produced.
///
/// # Errors
///
/// Returns `FacetrError` if the collection cannot be loaded or fails
/// validation.
fn handle_list_command(
    config: &FacetrConfig,
    items: &Path,
    kind: ListingKind,
    query: Option<String>,
    tags: &[String],
    sort: SortKey,
    quiet: bool,
) -> Result<()> {
    let items = schema::load_items(items)?;
    let total = items.len();

    let mut session = ListingSession::builder()
        .items(items)
        .kind(kind)
        .anchors(config.anchors(kind))
        .build()?;

    if !quiet {
        if !sort.valid_for(kind) {
            eprintln!("Warning: sort '{sort:?}' is not available for {kind} listings; keeping newest");
        }
        for tag in tags {
            if !session.tags().iter().any(|t| t == tag) {
                eprintln!("Warning: tag '{tag}' is not in the catalog; ignoring");
            }
        }
    }

    let ids: Vec<String> = session.items().iter().map(|i| i.id.clone()).collect();
    let mut surface = MockSurface::seeded(session.anchors(), &ids);
    session.on_state_changed(&mut surface);

    if let Some(text) = query {
        session.dispatch(FilterAction::SetQuery(text), &mut surface);
    }
    for tag in tags {
        session.dispatch(FilterAction::ToggleTag(tag.clone()), &mut surface);
    }
    session.dispatch(FilterAction::SetSort(sort), &mut surface);

    let visible = surface.visible_order();
    if !quiet {
        println!("{}", output::counter_line(visible.len(), total, quiet));
    }

    if visible.is_empty() {
        if !quiet {
            println!("{}", output::empty_line());
        }
        return Ok(());
    }

    for id in &visible {
        if let Some(item) = session.items().iter().find(|i| &i.id == id) {
            println!("{}", output::item_line(item, quiet));
        }
    }

    Ok(())
}

/// Handle the tags command - print the catalog for a collection
///
/// # Errors
///
/// Returns `FacetrError` if the collection cannot be loaded or fails
/// validation.
fn handle_tags_command(items: &Path, quiet: bool) -> Result<()> {
    let items = schema::load_items(items)?;
    let tags = facetr::catalog::catalog(&items);

    if tags.is_empty() {
        if !quiet {
            println!("No tags in collection.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in collection:");
    }
    for tag in tags {
        println!("{}", output::tag_line(&tag, quiet));
    }

    Ok(())
}

/// Handle the feed command - print an Atom or RSS document
///
/// # Errors
///
/// Returns `FacetrError::InvalidInput` if no collection was given, or a
/// schema error if a collection fails to load or validate.
fn handle_feed_command(
    config: &FacetrConfig,
    projects: Option<PathBuf>,
    writing: Option<PathBuf>,
    format: FeedFormat,
) -> Result<()> {
    if projects.is_none() && writing.is_none() {
        return Err(FacetrError::InvalidInput(
            "No collections provided. Use --projects and/or --writing.".into(),
        ));
    }

    let mut loaded: Vec<(ListingKind, Vec<Item>)> = Vec::new();
    if let Some(path) = projects {
        loaded.push((ListingKind::Projects, schema::load_items(&path)?));
    }
    if let Some(path) = writing {
        loaded.push((ListingKind::Writing, schema::load_items(&path)?));
    }

    let collections: Vec<(ListingKind, &[Item])> = loaded
        .iter()
        .map(|(kind, items)| (*kind, items.as_slice()))
        .collect();

    let doc = match format {
        FeedFormat::Atom => atom_feed(&collections, &config.site),
        FeedFormat::Rss => rss_feed(&collections, &config.site),
    };
    print!("{doc}");

    Ok(())
}

/// Main entry point for the facetr application
///
/// Loads configuration, parses command-line arguments, and dispatches
/// to the appropriate command handler.
///
/// # Errors
///
/// Returns `FacetrError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => FacetrConfig::load(path)?,
        None => FacetrConfig::default(),
    };

    let quiet = cli.quiet || config.quiet;

    match cli.command {
        Commands::List {
            items,
            kind,
            query,
            tags,
            sort,
        } => handle_list_command(&config, &items, kind, query, &tags, sort, quiet)?,
        Commands::Tags { items } => handle_tags_command(&items, quiet)?,
        Commands::Feed {
            projects,
            writing,
            format,
        } => handle_feed_command(&config, projects, writing, format)?,
    }

    Ok(())
}
