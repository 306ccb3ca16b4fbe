//! HTML fragments for the article grid and the favorites list.
//!
//! Templates only see view models from [`crate::listing`].

use askama::Template;

use code_brew_core::Category;

use crate::content::ArticleCatalog;
use crate::listing::{ArticleCard, CategoryFilter, FavoriteCard, ListState};

/// A category filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl FilterButton {
    fn new(filter: CategoryFilter, current: CategoryFilter) -> Self {
        let label = match filter {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        };
        Self {
            value: filter.as_str(),
            label,
            active: filter == current,
        }
    }
}

/// Blog grid fragment.
#[derive(Template)]
#[template(path = "blog/grid.html")]
pub struct ArticleGridTemplate<'a> {
    pub filters: Vec<FilterButton>,
    pub cards: &'a [ArticleCard],
    pub has_more: bool,
}

/// Favorites list fragment.
#[derive(Template)]
#[template(path = "favorites/list.html")]
pub struct FavoriteListTemplate<'a> {
    pub cards: &'a [FavoriteCard],
}

/// Filter buttons for `categories`, with the current filter marked.
#[must_use]
pub fn filter_buttons(categories: &[Category], current: CategoryFilter) -> Vec<FilterButton> {
    std::iter::once(CategoryFilter::All)
        .chain(categories.iter().copied().map(CategoryFilter::Only))
        .map(|filter| FilterButton::new(filter, current))
        .collect()
}

/// Render the article grid for `state`.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_article_grid(
    catalog: &ArticleCatalog,
    state: &ListState,
) -> Result<String, askama::Error> {
    let cards = state.article_cards(catalog.all());
    ArticleGridTemplate {
        filters: filter_buttons(&catalog.categories(), state.filter()),
        cards: &cards,
        has_more: state.view(catalog.all()).has_more,
    }
    .render()
}

/// Render the favorites list.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_favorites(cards: &[FavoriteCard]) -> Result<String, askama::Error> {
    FavoriteListTemplate { cards }.render()
}
