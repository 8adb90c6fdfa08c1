//! Category selection and search route handlers.
//!
//! Both controls change only the filter, so they dispatch and send the
//! browser back to `/` for a full re-render of the visible sections.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use goldenrod_core::Action;

use crate::state::AppState;

/// Category selection form data.
#[derive(Debug, Deserialize)]
pub struct SelectCategoryForm {
    pub name: String,
}

/// Search form data.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub query: String,
}

/// Select a category, unconditionally.
#[instrument(skip(state))]
pub async fn select_category(
    State(state): State<AppState>,
    Form(form): Form<SelectCategoryForm>,
) -> Redirect {
    state.dispatch(Action::SelectCategory(form.name));
    Redirect::to("/")
}

/// Submit the search form. Known words map to a category; anything else
/// falls back to showing every section.
#[instrument(skip(state))]
pub async fn submit_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Redirect {
    state.dispatch(Action::SubmitSearch(form.query));
    Redirect::to("/")
}
