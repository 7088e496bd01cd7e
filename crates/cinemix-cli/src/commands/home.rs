use cinemix_models::MovieOrdering;
use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use tracing::error;

use super::movies::movie_table;
use super::prompts;
use crate::context::AppContext;
use crate::output::{Output, OutputFormat};
use crate::ui::{self, Spinner};

/// The landing view: popular and recently added shelves, fetched jointly.
/// If either fetch fails the whole load fails with the first error and the
/// other result is discarded.
pub async fn run_home(ctx: &AppContext, output: &Output) -> Result<()> {
    let t = &ctx.catalog;
    let gateway = ctx.gateway();

    let (popular, recent) = loop {
        let spinner = Spinner::start(output, t.text("homePage.loading"));
        let result = tokio::try_join!(
            gateway.list_movies(Some(MovieOrdering::Popularity)),
            gateway.list_movies(Some(MovieOrdering::ReleaseYear)),
        );
        spinner.finish();
        match result {
            Ok(pages) => break pages,
            Err(err) => {
                error!(error = %err, "Failed to fetch home shelves");
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
            output.println(format!("\n{}", t.text("homePage.popular").bold()));
            output.println(movie_table(t, &popular.results).to_string());
            output.println(format!("\n{}", t.text("homePage.recent").bold()));
            output.println(movie_table(t, &recent.results).to_string());
        }
        _ => output.value(&json!({
            "popular": popular.results,
            "recent": recent.results,
        })),
    }
    Ok(())
}
