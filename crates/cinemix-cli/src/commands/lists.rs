use cinemix_api::ApiError;
use cinemix_core::OptimisticToggle;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::warn;

use crate::context::AppContext;
use crate::i18n::Catalog;
use crate::output::Output;

#[derive(Debug, Clone, Copy)]
pub enum ToggleKind {
    Watchlist,
    Favorite,
}

/// Optimistic toggle: the displayed state flips before the remote call,
/// sticks on success and reverts on failure. A failed flip is silent apart
/// from the diagnostic log and the reverted state line.
pub async fn run_toggle(
    ctx: &AppContext,
    slug: &str,
    kind: ToggleKind,
    output: &Output,
) -> Result<()> {
    let t = &ctx.catalog;
    if !ctx.session.is_authenticated() {
        output.error(t.text("session.loginRequired"));
        std::process::exit(1);
    }

    let gateway = ctx.gateway();
    let status = match gateway.movie_status(slug).await {
        Ok(status) => status,
        Err(ApiError::NotFound(_)) => {
            output.error(t.text("moviePage.notFound"));
            std::process::exit(1);
        }
        Err(ApiError::NotAuthenticated) => {
            output.error(t.text("session.loginRequired"));
            std::process::exit(1);
        }
        Err(err) => return Err(eyre!(err)),
    };

    let current = match kind {
        ToggleKind::Watchlist => status.in_watchlist,
        ToggleKind::Favorite => status.is_favorite,
    };

    let mut toggle = OptimisticToggle::new(current);
    let optimistic = toggle.begin();
    output.info(state_label(t, kind, optimistic));

    let result = match kind {
        ToggleKind::Watchlist => gateway.toggle_watchlist(slug).await,
        ToggleKind::Favorite => gateway.toggle_favorite(slug).await,
    };

    match result {
        Ok(remote) => {
            let settled = toggle.commit(remote);
            output.success(state_label(t, kind, settled));
        }
        Err(err) => {
            let reverted = toggle.rollback();
            warn!(error = %err, slug, "Toggle failed, reverting optimistic state");
            output.warn(format!(
                "{} ({})",
                t.text("toggle.reverted"),
                state_label(t, kind, reverted)
            ));
        }
    }
    Ok(())
}

fn state_label(t: &Catalog, kind: ToggleKind, value: bool) -> String {
    let key = match (kind, value) {
        (ToggleKind::Watchlist, true) => "toggle.watchlistOn",
        (ToggleKind::Watchlist, false) => "toggle.watchlistOff",
        (ToggleKind::Favorite, true) => "toggle.favoriteOn",
        (ToggleKind::Favorite, false) => "toggle.favoriteOff",
    };
    t.text(key)
}
