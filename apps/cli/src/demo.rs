//! In-memory articles and people served by the `japi` binary.

use japi::domain::request::ErrorResponse;
use japi::kernel::locator::{ServiceLocator, SimpleServiceLocator};
use japi::prelude::*;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Root of the demo catalogs.
pub const SEARCH_LOCATION: &str = "japi.demo";

const UNPROCESSABLE_ENTITY: u16 = 422;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl Resource for Article {
    type Id = u64;
    const TYPE: &'static str = "articles";
    const ID_KIND: IdKind = IdKind::Unsigned;

    fn relationships() -> Vec<RelationshipField> {
        vec![RelationshipField::to_one("author", "people")]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
}

impl Resource for Person {
    type Id = String;
    const TYPE: &'static str = "people";
}

/// Raised when an article is saved without a title.
#[derive(Debug, thiserror::Error)]
#[error("article {0} has no title")]
pub struct MissingTitle(pub u64);

#[derive(Debug, Clone, Copy)]
pub struct MissingTitleMapper;

impl ExceptionMapper<MissingTitle> for MissingTitleMapper {
    fn to_error_response(&self, error: &MissingTitle) -> ErrorResponse {
        ErrorResponse::single(UNPROCESSABLE_ENTITY, "Unprocessable Entity", error.to_string())
    }
}

#[derive(Debug, Default)]
pub struct Articles(RwLock<BTreeMap<u64, Article>>);

impl ResourceRepository<Article> for Articles {
    fn find_one(&self, id: &u64, _: &QueryParams) -> Result<Option<Article>, RepositoryError> {
        Ok(self.0.read().get(id).cloned())
    }

    /// Honours `filter[author]=<id>`.
    fn find_all(&self, query: &QueryParams) -> Result<Vec<Article>, RepositoryError> {
        let author = query.get("filter[author]");
        Ok(self
            .0
            .read()
            .values()
            .filter(|article| author.is_none_or(|a| article.author.as_deref() == Some(a)))
            .cloned()
            .collect())
    }

    fn save(&self, mut article: Article) -> Result<Article, RepositoryError> {
        let mut articles = self.0.write();
        if article.id == 0 {
            article.id = articles.keys().next_back().map_or(1, |last| last + 1);
        }
        if article.title.trim().is_empty() {
            return Err(RepositoryError::custom(MissingTitle(article.id)));
        }
        articles.insert(article.id, article.clone());
        Ok(article)
    }

    fn delete(&self, id: &u64) -> Result<(), RepositoryError> {
        self.0
            .write()
            .remove(id)
            .map(drop)
            .ok_or_else(|| RepositoryError::not_found(format!("article {id}")))
    }
}

#[derive(Debug, Default)]
pub struct People(RwLock<BTreeMap<String, Person>>);

impl ResourceRepository<Person> for People {
    fn find_one(&self, id: &String, _: &QueryParams) -> Result<Option<Person>, RepositoryError> {
        Ok(self.0.read().get(id).cloned())
    }

    fn find_all(&self, _: &QueryParams) -> Result<Vec<Person>, RepositoryError> {
        Ok(self.0.read().values().cloned().collect())
    }

    fn save(&self, person: Person) -> Result<Person, RepositoryError> {
        self.0.write().insert(person.id.clone(), person.clone());
        Ok(person)
    }

    fn delete(&self, id: &String) -> Result<(), RepositoryError> {
        self.0
            .write()
            .remove(id)
            .map(drop)
            .ok_or_else(|| RepositoryError::not_found(format!("person {id}")))
    }
}

fn article(id: u64, title: &str, author: &str) -> Article {
    Article { id, title: title.to_owned(), body: String::new(), author: Some(author.to_owned()) }
}

fn person(id: &str, name: &str) -> Person {
    Person { id: id.to_owned(), name: name.to_owned() }
}

/// Stores seeded with two people and three articles.
#[must_use]
pub fn locator() -> Arc<dyn ServiceLocator> {
    let articles = Articles::default();
    articles.0.write().extend(
        [
            article(1, "JSON:API in practice", "ada"),
            article(2, "Sparse fieldsets", "ada"),
            article(3, "Compound documents", "grace"),
        ]
        .map(|a| (a.id, a)),
    );

    let people = People::default();
    people.0.write().extend(
        [person("ada", "Ada Lovelace"), person("grace", "Grace Hopper")]
            .map(|p| (p.id.clone(), p)),
    );

    Arc::new(SimpleServiceLocator::new().with(articles).with(people))
}

/// Catalogs listing the demo resources and exception mappers.
#[must_use]
pub fn defaults() -> CatalogDefaults {
    let resources = ResourceCatalog::new()
        .register::<Article, Articles>("japi.demo.articles")
        .register::<Person, People>("japi.demo.people");
    let mappers =
        MapperCatalog::new().register::<MissingTitle, _>("japi.demo.errors", MissingTitleMapper);

    CatalogDefaults::new(resources, mappers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_ids_to_new_articles() {
        let articles = Articles::default();
        let saved = articles.save(article(0, "first", "ada")).unwrap();
        assert_eq!(saved.id, 1);
        assert_eq!(articles.save(article(0, "second", "ada")).unwrap().id, 2);
    }

    #[test]
    fn untitled_articles_raise_a_mappable_error() {
        let err = Articles::default().save(article(4, " ", "ada")).unwrap_err();
        let source = std::error::Error::source(&err).expect("custom error keeps its source");
        assert!(source.downcast_ref::<MissingTitle>().is_some());
    }

    #[test]
    fn filters_by_author() {
        let articles = Articles::default();
        articles.save(article(1, "a", "ada")).unwrap();
        articles.save(article(2, "b", "grace")).unwrap();

        let query = QueryParams::new().with("filter[author]", "grace");
        let found = articles.find_all(&query).unwrap();
        assert_eq!(found.iter().map(|a| a.id).collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn catalogs_sit_under_the_search_location() {
        let defaults = defaults();
        let registry =
            defaults.resource_registry(locator(), SEARCH_LOCATION, "http://localhost").unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(defaults.exception_mappers(SEARCH_LOCATION).unwrap().len(), 1);
    }
}
