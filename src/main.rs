//! Interactive terminal wizard for the product configurator.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use product_configurator::adapters::catalog::{BuiltinCatalogSource, FileCatalogSource};
use product_configurator::config::{AppConfig, LoggingConfig};
use product_configurator::domain::catalog::{Catalog, Schema};
use product_configurator::domain::configurator::{
    display_name, ConfiguratorSession, EngineResult, FacetExtractor, Selections,
};
use product_configurator::ports::CatalogSource;

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Choose(usize),
    Reset,
    Quit,
    Facets(&'a str),
    Unknown,
}

impl<'a> Command<'a> {
    /// Options are numbered from 1 on screen.
    fn parse(input: &'a str) -> Self {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "q" | "quit" => return Command::Quit,
            "r" | "reset" => return Command::Reset,
            _ => {}
        }
        if input.starts_with('{') {
            return Command::Facets(input);
        }
        match input.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Choose(n - 1),
            _ => Command::Unknown,
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let (json, pretty) = if logging.is_json() {
        (
            Some(tracing_subscriber::fmt::layer().json().with_writer(io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(io::stderr)),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();
}

fn catalog_source(config: &AppConfig) -> Box<dyn CatalogSource> {
    match &config.catalog.path {
        Some(path) => Box::new(FileCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource::new()),
    }
}

fn render(
    out: &mut impl Write,
    session: &ConfiguratorSession,
    state: &EngineResult,
    base_product_url: &str,
) -> io::Result<()> {
    let name = session.display_name();
    if !name.is_empty() {
        writeln!(out, "\n[{}]", name)?;
    }

    match state {
        EngineResult::Question(question) => {
            writeln!(out, "{}", question.question)?;
            for (i, option) in question.options.iter().enumerate() {
                writeln!(out, "  {}) {}", i + 1, option.label)?;
            }
            write!(out, "> ")?;
        }
        EngineResult::Complete { products } if products.is_empty() => {
            writeln!(out, "Nenhum produto corresponde a essa combinação.")?;
            writeln!(out, "Digite 'r' para recomeçar ou 'q' para sair.")?;
        }
        EngineResult::Complete { products } => {
            writeln!(out, "Produto encontrado:")?;
            let schema = session.catalog().schema();
            for product in products {
                let full_name = display_name(&Selections::describing(product), schema);
                writeln!(out, "  {}", full_name)?;
                writeln!(out, "    {}", product.url(base_product_url))?;
                if let Some(image) = &product.image {
                    writeln!(out, "    imagem: {}", image)?;
                }
            }
            writeln!(out, "Digite 'r' para recomeçar ou 'q' para sair.")?;
        }
    }
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let source = catalog_source(&config);
    let products = source.load()?;
    let schema = Schema::standard().with_placeholder_image(&config.catalog.placeholder_image);
    let catalog = Arc::new(Catalog::new(products, schema)?);
    info!(source = %source.describe(), products = catalog.len(), "Catalog loaded");

    let extractor = FacetExtractor::new();
    let mut session = ConfiguratorSession::new(catalog);
    let base_url = config.catalog.base_product_url.as_str();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut state = session.state();
    render(&mut stdout, &session, &state, base_url)?;

    for line in stdin.lock().lines() {
        let line = line?;
        state = match Command::parse(&line) {
            Command::Quit => break,
            Command::Reset => session.reset(),
            Command::Choose(index) => match session.choose_option(index) {
                Ok(next) => next,
                Err(e) => {
                    writeln!(stdout, "{}", e)?;
                    state
                }
            },
            Command::Facets(reply) => match extractor.extract(reply) {
                Ok(facets) => {
                    if let Some(answer) = facets.knowledge_base_answer() {
                        writeln!(stdout, "{}", answer)?;
                    }
                    session.apply_facets(&facets)
                }
                Err(e) => {
                    warn!(error = %e, "Could not read extracted facets");
                    writeln!(stdout, "Resposta não reconhecida: {}", e)?;
                    state
                }
            },
            Command::Unknown => {
                writeln!(stdout, "Digite o número de uma opção, 'r' ou 'q'.")?;
                state
            }
        };
        render(&mut stdout, &session, &state, base_url)?;
    }

    info!(session_id = %session.id(), "Session finished");
    Ok(())
}
