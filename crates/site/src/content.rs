//! Blog articles.
//!
//! The article set is fixed and compiled in. It is loaded once into an
//! [`ArticleCatalog`] and never mutated.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use code_brew_core::{ArticleId, AuthorId, Category};

/// A blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    pub full_text: String,
    pub category: Category,
    pub category_label: String,
    pub icon: String,
    pub author_name: String,
    /// Link to a member account. No article has one yet.
    pub author_id: Option<AuthorId>,
    pub date: NaiveDate,
}

struct ArticleSeed {
    id: i64,
    title: &'static str,
    excerpt: &'static str,
    full_text: &'static str,
    category: Category,
    icon: &'static str,
    author_name: &'static str,
    date: (i32, u32, u32),
}

const SEED: &[ArticleSeed] = &[
    ArticleSeed {
        id: 1,
        title: "The Art of Latte Art",
        excerpt: "From simple hearts to intricate rosettas, latte art is where \
                  craft meets creativity.",
        full_text: "Latte art starts with well-steamed milk: glossy, velvety and \
                    free of large bubbles. Pour from a height to let the milk \
                    sink beneath the crema, then bring the pitcher close to the \
                    surface so the foam floats and forms the pattern. Hearts come \
                    first, then tulips, then rosettas. Practice with water and a \
                    drop of dish soap to save milk while you learn the motion.",
        category: Category::CoffeeCulture,
        icon: "☕",
        author_name: "Maya Chen",
        date: (2024, 3, 15),
    },
    ArticleSeed {
        id: 2,
        title: "Pour-Over Perfection",
        excerpt: "A step-by-step guide to brewing a clean, bright cup with a \
                  pour-over dripper.",
        full_text: "Use a 1:16 ratio of coffee to water and a medium-fine grind. \
                    Rinse the filter with hot water, add the grounds, and bloom \
                    with twice their weight in water for 30 to 45 seconds. Pour \
                    the rest in slow spirals, keeping the bed level, and aim for \
                    a total brew time of three to four minutes. Adjust the grind \
                    finer if the cup tastes sour and coarser if it tastes bitter.",
        category: Category::Brewing,
        icon: "🫖",
        author_name: "Jordan Ellis",
        date: (2024, 3, 8),
    },
    ArticleSeed {
        id: 3,
        title: "Coffee Around the World",
        excerpt: "Turkish coffee, Vietnamese egg coffee, Italian espresso: a tour \
                  of how the world drinks its coffee.",
        full_text: "In Turkey, finely ground coffee is simmered in a cezve and \
                    served unfiltered. In Vietnam, strong robusta is whipped with \
                    egg yolk and condensed milk into a rich, custardy drink. In \
                    Italy, espresso is taken standing at the bar in a few quick \
                    sips. Each tradition reflects its history, its climate and \
                    the beans that were close at hand.",
        category: Category::CoffeeCulture,
        icon: "🌍",
        author_name: "Maya Chen",
        date: (2024, 2, 28),
    },
    ArticleSeed {
        id: 4,
        title: "Open Mic Nights Are Back",
        excerpt: "Every Friday evening our shop turns into a stage for local \
                  musicians, poets and storytellers.",
        full_text: "Sign-ups open at 6pm and performances start at 7. Each act \
                    gets ten minutes, and every performer gets a free drink of \
                    their choice. Whether you are stepping up to the mic for the \
                    first time or just want to listen with a cortado in hand, \
                    there is a seat for you.",
        category: Category::Community,
        icon: "🎤",
        author_name: "Sam Rivera",
        date: (2024, 2, 20),
    },
    ArticleSeed {
        id: 5,
        title: "Cold Brew at Home",
        excerpt: "Smooth, low-acid cold brew needs nothing more than coarse \
                  grounds, water and patience.",
        full_text: "Combine one part coarsely ground coffee with eight parts cold \
                    water in a jar. Stir, cover and steep in the fridge for 12 to \
                    18 hours. Strain through a fine mesh sieve lined with a paper \
                    filter. The concentrate keeps for up to two weeks; dilute it \
                    one to one with water or milk and serve over ice.",
        category: Category::Brewing,
        icon: "🧊",
        author_name: "Jordan Ellis",
        date: (2024, 2, 12),
    },
    ArticleSeed {
        id: 6,
        title: "A Short History of the Coffeehouse",
        excerpt: "Coffeehouses have been meeting places for thinkers, traders and \
                  neighbors for over five hundred years.",
        full_text: "The first coffeehouses opened in the Ottoman Empire in the \
                    sixteenth century and quickly spread to Europe. In London \
                    they were called penny universities, since a penny bought a \
                    cup and a seat in the conversation. Insurance markets, \
                    newspapers and scientific societies all took shape over \
                    coffee. Today's shops carry on the same tradition of a third \
                    place between home and work.",
        category: Category::CoffeeCulture,
        icon: "📜",
        author_name: "Sam Rivera",
        date: (2024, 1, 30),
    },
];

impl ArticleSeed {
    fn to_article(&self) -> Option<Article> {
        let (year, month, day) = self.date;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Article {
            id: ArticleId::new(self.id),
            title: self.title.to_string(),
            excerpt: self.excerpt.to_string(),
            full_text: self.full_text.to_string(),
            category: self.category,
            category_label: self.category.label().to_string(),
            icon: self.icon.to_string(),
            author_name: self.author_name.to_string(),
            author_id: None,
            date,
        })
    }
}

/// The fixed set of blog articles, cheaply cloneable.
#[derive(Debug, Clone)]
pub struct ArticleCatalog {
    articles: Arc<Vec<Article>>,
}

impl ArticleCatalog {
    /// The articles shipped with the site, newest first.
    #[must_use]
    pub fn builtin() -> Self {
        let articles = SEED
            .iter()
            .filter_map(|seed| {
                let article = seed.to_article();
                if article.is_none() {
                    tracing::error!(id = seed.id, "article has an invalid date, skipping");
                }
                article
            })
            .collect();
        Self::new(articles)
    }

    /// A catalog of the given articles, in the given order.
    #[must_use]
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(articles),
        }
    }

    #[must_use]
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    /// Get an article by ID.
    #[must_use]
    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Categories that have at least one article, in display order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.articles.iter().any(|a| a.category == *c))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_six_articles() {
        let catalog = ArticleCatalog::builtin();
        assert_eq!(catalog.all().len(), 6);
        let count = |c: Category| catalog.all().iter().filter(|a| a.category == c).count();
        assert_eq!(count(Category::CoffeeCulture), 3);
        assert_eq!(count(Category::Brewing), 2);
        assert_eq!(count(Category::Community), 1);
    }

    #[test]
    fn test_no_article_has_an_author_id() {
        let catalog = ArticleCatalog::builtin();
        assert!(catalog.all().iter().all(|a| a.author_id.is_none()));
    }

    #[test]
    fn test_author_id_serializes_as_null_or_value() {
        let mut article = ArticleCatalog::builtin().all().first().cloned().unwrap();
        let json = serde_json::to_value(&article).unwrap();
        assert!(json["authorId"].is_null());
        assert_eq!(json["category"], "coffee-culture");
        assert_eq!(json["categoryLabel"], "Coffee Culture");

        article.author_id = Some(AuthorId::new(7));
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["authorId"], 7);
    }

    #[test]
    fn test_ids_are_unique_and_get_finds_them() {
        let catalog = ArticleCatalog::builtin();
        for article in catalog.all() {
            assert_eq!(catalog.get(article.id), Some(article));
        }
        assert!(catalog.get(ArticleId::new(99)).is_none());
    }

    #[test]
    fn test_newest_first() {
        let catalog = ArticleCatalog::builtin();
        let dates: Vec<_> = catalog.all().iter().map(|a| a.date).collect();
        assert!(dates.windows(2).all(|w| w.first() >= w.last()));
    }

    #[test]
    fn test_categories() {
        assert_eq!(ArticleCatalog::builtin().categories(), Category::ALL.to_vec());
        assert!(ArticleCatalog::new(Vec::new()).categories().is_empty());
    }
}
