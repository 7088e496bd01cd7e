use cinemix_api::ApiError;
use cinemix_models::{Movie, MovieStatus, Review};
use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use tracing::error;

use super::prompts;
use crate::context::AppContext;
use crate::i18n::Catalog;
use crate::output::{Output, OutputFormat};
use crate::ui::{self, Spinner};

/// Detail view: movie and its reviews load jointly; the per-user status
/// line is fetched on top only for an authenticated session.
pub async fn run_movie(ctx: &AppContext, slug: &str, output: &Output) -> Result<()> {
    let t = &ctx.catalog;
    let gateway = ctx.gateway();

    let (movie, reviews, status) = loop {
        let spinner = Spinner::start(output, t.text("moviePage.loading"));
        let result = load_page(ctx, &gateway, slug).await;
        spinner.finish();
        match result {
            Ok(page) => break page,
            Err(ApiError::NotFound(_)) => {
                output.info(t.text("moviePage.notFound"));
                return Ok(());
            }
            Err(err) => {
                error!(error = %err, slug, "Failed to fetch movie detail");
                output.error(err.to_string());
                if !(ui::is_interactive() && prompts::prompt_confirm(&t.text("errors.retry"), true)?)
                {
                    std::process::exit(1);
                }
            }
        }
    };

    match output.format() {
        OutputFormat::Human => render_human(ctx, t, &movie, &reviews, status, output),
        _ => output.value(&json!({
            "movie": movie,
            "status": status,
            "reviews": reviews,
        })),
    }
    Ok(())
}

async fn load_page(
    ctx: &AppContext,
    gateway: &cinemix_api::Gateway,
    slug: &str,
) -> Result<(Movie, Vec<Review>, Option<MovieStatus>), ApiError> {
    let (movie, reviews) = tokio::try_join!(gateway.movie(slug), gateway.reviews(slug))?;
    let status = if ctx.session.is_authenticated() {
        Some(gateway.movie_status(slug).await?)
    } else {
        None
    };
    Ok((movie, reviews, status))
}

fn render_human(
    ctx: &AppContext,
    t: &Catalog,
    movie: &Movie,
    reviews: &[Review],
    status: Option<MovieStatus>,
    output: &Output,
) {
    output.println(format!(
        "\n{} ({})",
        movie.title.bold(),
        movie.year
    ));
    let genres = movie
        .genres
        .iter()
        .map(|genre| genre.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if genres.is_empty() {
        output.println(format!("★ {:.1}", movie.rating));
    } else {
        output.println(format!("★ {:.1} · {}", movie.rating, genres));
    }

    output.println(format!("\n{}", t.text("moviePage.synopsis").bold()));
    match movie.description.as_deref().filter(|text| !text.is_empty()) {
        Some(description) => output.println(description),
        None => output.println(t.text("moviePage.noSynopsis")),
    }

    if let Some(status) = status {
        let yes = t.text("moviePage.yes");
        let no = t.text("moviePage.no");
        output.println(String::new());
        output.println(format!(
            "{}: {}",
            t.text("moviePage.inWatchlist"),
            if status.in_watchlist { &yes } else { &no }
        ));
        output.println(format!(
            "{}: {}",
            t.text("moviePage.favorite"),
            if status.is_favorite { &yes } else { &no }
        ));
    }

    output.println(format!("\n{}", t.text("moviePage.reviews").bold()));
    if reviews.is_empty() {
        output.println(t.text("moviePage.noReviews"));
    } else {
        for review in reviews {
            output.println(render_review(review));
        }
    }

    let user_id = ctx.session.user().map(|user| user.id);
    if reviews.iter().any(|review| Some(review.author.id) == user_id) {
        output.println(format!("\n{}", t.text("moviePage.alreadyReviewed")));
    }
}

fn render_review(review: &Review) -> String {
    let stars = "★".repeat(review.rating as usize)
        + &"☆".repeat(5usize.saturating_sub(review.rating as usize));
    let mut line = format!(
        "\n{} {} · {}",
        review.author.username.bold(),
        stars,
        review.created_at.format("%Y-%m-%d")
    );
    if review.spoiler {
        line.push_str(" [spoiler]");
    }
    if let Some(title) = review.title.as_deref().filter(|title| !title.is_empty()) {
        line.push_str(&format!("\n{}", title));
    }
    line.push_str(&format!("\n{}", review.text));
    line
}
