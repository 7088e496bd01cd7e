use cinemix_api::ApiError;
use cinemix_core::{validate_review, ReviewIssue};
use cinemix_models::ReviewPayload;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::error;

use super::prompts;
use crate::context::AppContext;
use crate::output::Output;

pub async fn run_review(
    ctx: &AppContext,
    slug: &str,
    rating: Option<u8>,
    title: Option<String>,
    text: Option<String>,
    spoiler: bool,
    output: &Output,
) -> Result<()> {
    let t = &ctx.catalog;
    if !ctx.session.is_authenticated() {
        output.error(t.text("session.loginRequired"));
        std::process::exit(1);
    }

    let rating = match rating {
        Some(rating) => rating,
        None => prompts::prompt_number(&t.text("reviewForm.rating"))?,
    };
    let text = match text {
        Some(text) => text,
        None => prompts::prompt_string(&t.text("reviewForm.text"))?,
    };

    let payload = ReviewPayload {
        title,
        text,
        rating,
        spoiler,
    };

    // Local gate: a zero rating or empty text never reaches the network,
    // so validation runs before any request goes out.
    if let Err(issues) = validate_review(&payload) {
        for issue in &issues {
            let key = match issue {
                ReviewIssue::RatingOutOfRange => "reviewForm.selectRating",
                ReviewIssue::MissingText => "reviewForm.emptyText",
            };
            output.error(t.text(key));
        }
        std::process::exit(1);
    }

    let gateway = ctx.gateway();

    // One review per user per movie is a client-side convention, the same
    // check the web form makes before offering itself.
    let reviews = match gateway.reviews(slug).await {
        Ok(reviews) => reviews,
        Err(ApiError::NotFound(_)) => {
            output.error(t.text("moviePage.notFound"));
            std::process::exit(1);
        }
        Err(err) => return Err(eyre!(err)),
    };
    let user_id = ctx.session.user().map(|user| user.id);
    if reviews.iter().any(|review| Some(review.author.id) == user_id) {
        output.info(t.text("moviePage.alreadyReviewed"));
        return Ok(());
    }

    match gateway.create_review(slug, &payload).await {
        Ok(review) => {
            output.success(t.text("reviewForm.submitted"));
            output.value(&serde_json::to_value(&review)?);
            Ok(())
        }
        Err(ApiError::Validation(fields)) => {
            for (field, messages) in fields.iter() {
                output.error(format!("{}: {}", field, messages.join(", ")));
            }
            std::process::exit(1);
        }
        Err(ApiError::Status { message, .. }) => {
            // e.g. the duplicate-review rejection from the remote
            output.error(message);
            std::process::exit(1);
        }
        Err(err) => {
            error!(error = %err, slug, "Review submission failed");
            output.error(t.text("reviewForm.failed"));
            std::process::exit(1);
        }
    }
}
