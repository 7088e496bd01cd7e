use clap::ValueEnum;
use cinemix_models::{Movie, MovieOrdering};
use color_eyre::Result;
use comfy_table::Table;
use tracing::error;

use super::prompts;
use crate::context::AppContext;
use crate::i18n::Catalog;
use crate::output::{Output, OutputFormat};
use crate::ui::{self, Spinner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Popular,
    Recent,
    Rating,
    Title,
}

impl From<SortKey> for MovieOrdering {
    fn from(sort: SortKey) -> Self {
        match sort {
            SortKey::Popular => MovieOrdering::Popularity,
            SortKey::Recent => MovieOrdering::ReleaseYear,
            SortKey::Rating => MovieOrdering::Rating,
            SortKey::Title => MovieOrdering::Title,
        }
    }
}

pub async fn run_movies(ctx: &AppContext, sort: SortKey, output: &Output) -> Result<()> {
    let t = &ctx.catalog;
    let gateway = ctx.gateway();

    // Primary page load: error view with a retry affordance that re-issues
    // the same request.
    let page = loop {
        let spinner = Spinner::start(output, t.text("homePage.loading"));
        let result = gateway.list_movies(Some(sort.into())).await;
        spinner.finish();
        match result {
            Ok(page) => break page,
            Err(err) => {
                error!(error = %err, "Failed to fetch movie list");
                output.error(err.to_string());
                if !(ui::is_interactive() && prompts::prompt_confirm(&t.text("errors.retry"), true)?)
                {
                    std::process::exit(1);
                }
            }
        }
    };

    match output.format() {
        OutputFormat::Human => {
            output.println(movie_table(t, &page.results).to_string());
        }
        _ => output.value(&serde_json::to_value(&page)?),
    }
    Ok(())
}

pub(crate) fn movie_table(catalog: &Catalog, movies: &[Movie]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        catalog.text("table.title"),
        catalog.text("table.year"),
        catalog.text("table.rating"),
        catalog.text("table.genres"),
        catalog.text("table.slug"),
    ]);
    for movie in movies {
        table.add_row(vec![
            movie.title.clone(),
            movie.year.to_string(),
            format!("{:.1}", movie.rating),
            movie
                .genres
                .iter()
                .map(|genre| genre.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            movie.slug.clone(),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
