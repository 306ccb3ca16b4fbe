//! Filtered, paginated list views.
//!
//! [`view`] is a pure function of the items, a filter and how many items are
//! visible. [`ListState`] holds the visitor's filter, page and expanded
//! articles; every transition returns a new state.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Serialize;

use code_brew_core::{ArticleId, Category, CategoryError, FavoriteId};

use crate::content::Article;
use crate::models::FavoriteDrink;

/// Default number of items revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Filter value that matches every category.
const ALL: &str = "all";

/// Items that belong to a category.
pub trait Categorized {
    fn category(&self) -> Category;
}

impl Categorized for Article {
    fn category(&self) -> Category {
        self.category
    }
}

/// Which categories a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }

    /// Filter value as used by the filter buttons.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Only(category) => category.slug(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// The visible slice of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a, T> {
    /// Matching items, at most `visible_count` of them, in source order.
    pub shown: Vec<&'a T>,
    /// Whether more matching items exist beyond `shown`.
    pub has_more: bool,
    /// Number of matching items.
    pub total: usize,
}

/// Filter `items` and take the first `visible_count` matches.
#[must_use]
pub fn view<T: Categorized>(items: &[T], filter: CategoryFilter, visible_count: usize) -> View<'_, T> {
    let matching: Vec<&T> = items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .collect();
    let total = matching.len();
    View {
        shown: matching.into_iter().take(visible_count).collect(),
        has_more: visible_count < total,
        total,
    }
}

/// A visitor's position in a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    filter: CategoryFilter,
    visible_count: usize,
    page_size: usize,
    expanded: BTreeSet<ArticleId>,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListState {
    /// First page of the unfiltered list. A zero page size is raised to one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            filter: CategoryFilter::All,
            visible_count: page_size,
            page_size,
            expanded: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Switch filter and go back to the first page.
    #[must_use]
    pub fn with_filter(self, filter: CategoryFilter) -> Self {
        Self {
            filter,
            visible_count: self.page_size,
            ..self
        }
    }

    /// Reveal one more page.
    #[must_use]
    pub fn load_more(self) -> Self {
        Self {
            visible_count: self.visible_count.saturating_add(self.page_size),
            ..self
        }
    }

    /// Expand or collapse one article. Other articles are unaffected.
    #[must_use]
    pub fn toggle_expanded(mut self, id: ArticleId) -> Self {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self
    }

    #[must_use]
    pub fn is_expanded(&self, id: ArticleId) -> bool {
        self.expanded.contains(&id)
    }

    /// Apply this state to `items`.
    #[must_use]
    pub fn view<'a, T: Categorized>(&self, items: &'a [T]) -> View<'a, T> {
        view(items, self.filter, self.visible_count)
    }

    /// Article cards for the current page.
    #[must_use]
    pub fn article_cards(&self, articles: &[Article]) -> Vec<ArticleCard> {
        self.view(articles)
            .shown
            .into_iter()
            .map(|article| ArticleCard::new(article, self.is_expanded(article.id)))
            .collect()
    }
}

/// An article as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCard {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    pub full_text: String,
    pub category: &'static str,
    pub category_label: String,
    pub icon: String,
    pub author_name: String,
    /// e.g. "March 15, 2024".
    pub date: String,
    pub expanded: bool,
}

impl ArticleCard {
    #[must_use]
    pub fn new(article: &Article, expanded: bool) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            full_text: article.full_text.clone(),
            category: article.category.slug(),
            category_label: article.category_label.clone(),
            icon: article.icon.clone(),
            author_name: article.author_name.clone(),
            date: article.date.format("%B %-d, %Y").to_string(),
            expanded,
        }
    }

    /// Label of the expand/collapse control.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        if self.expanded { "Show Less" } else { "Read More" }
    }
}

/// A favorite drink as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteCard {
    pub id: FavoriteId,
    pub name: String,
    pub size: String,
    pub customization: Option<String>,
    pub notes: Option<String>,
    /// e.g. "Mar 1, 2024".
    pub added: String,
}

impl From<&FavoriteDrink> for FavoriteCard {
    fn from(drink: &FavoriteDrink) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            id: drink.id,
            name: drink.name.clone(),
            size: drink.size.clone(),
            customization: non_empty(&drink.customization),
            notes: non_empty(&drink.notes),
            added: drink.added_at.format("%b %-d, %Y").to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::content::ArticleCatalog;
    use crate::models::FavoriteDraft;

    #[derive(Debug, PartialEq, Eq)]
    struct Item(u8, Category);

    impl Categorized for Item {
        fn category(&self) -> Category {
            self.1
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item(1, Category::CoffeeCulture),
            Item(2, Category::Brewing),
            Item(3, Category::CoffeeCulture),
            Item(4, Category::Community),
            Item(5, Category::Brewing),
            Item(6, Category::CoffeeCulture),
        ]
    }

    #[test]
    fn test_first_page_has_more() {
        let items = items();
        let view = view(&items, CategoryFilter::All, 3);
        assert_eq!(view.shown.len(), 3);
        assert!(view.has_more);
        assert_eq!(view.total, 6);
    }

    #[test]
    fn test_everything_visible() {
        let items = items();
        let view = view(&items, CategoryFilter::All, 6);
        assert_eq!(view.shown.len(), 6);
        assert!(!view.has_more);
    }

    #[test]
    fn test_filter_keeps_source_order() {
        let items = items();
        let view = view(&items, CategoryFilter::Only(Category::CoffeeCulture), 10);
        let ids: Vec<u8> = view.shown.iter().map(|i| i.0).collect();
        assert_eq!(ids, vec![1, 3, 6]);
        assert!(!view.has_more);
    }

    #[test]
    fn test_empty_items() {
        let view = view::<Item>(&[], CategoryFilter::All, 3);
        assert!(view.shown.is_empty());
        assert!(!view.has_more);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "brewing".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Brewing)
        );
        assert!("espresso".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::Only(Category::CoffeeCulture).as_str(), "coffee-culture");
    }

    #[test]
    fn test_load_more_then_filter_resets() {
        let items = items();
        let state = ListState::default().load_more();
        assert_eq!(state.visible_count(), 6);
        assert!(!state.view(&items).has_more);

        let state = state.with_filter(CategoryFilter::Only(Category::Brewing));
        assert_eq!(state.visible_count(), 3);
        assert_eq!(state.view(&items).shown.len(), 2);
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let state = ListState::new(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn test_toggle_is_independent_per_article() {
        let a = ArticleId::new(1);
        let b = ArticleId::new(2);
        let state = ListState::default().toggle_expanded(a).toggle_expanded(b);
        assert!(state.is_expanded(a) && state.is_expanded(b));
        let state = state.toggle_expanded(a);
        assert!(!state.is_expanded(a));
        assert!(state.is_expanded(b));
    }

    #[test]
    fn test_article_cards() {
        let catalog = ArticleCatalog::builtin();
        let first = catalog.all().first().unwrap().id;
        let state = ListState::default().toggle_expanded(first);
        let cards = state.article_cards(catalog.all());
        assert_eq!(cards.len(), 3);
        let card = cards.first().unwrap();
        assert!(card.expanded);
        assert_eq!(card.toggle_label(), "Show Less");
        assert_eq!(card.date, "March 15, 2024");
        assert_eq!(cards.get(1).map(ArticleCard::toggle_label), Some("Read More"));
    }

    #[test]
    fn test_favorite_card_hides_empty_fields() {
        let added_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let drink = FavoriteDrink::from_draft(
            FavoriteId::new(1),
            FavoriteDraft::new("Latte", "Medium").notes("oat milk"),
            added_at,
        );
        let card = FavoriteCard::from(&drink);
        assert_eq!(card.customization, None);
        assert_eq!(card.notes.as_deref(), Some("oat milk"));
        assert_eq!(card.added, "Mar 1, 2024");
    }
}
