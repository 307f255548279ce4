use std::sync::Arc;

use docgraph_store::{MemoryStore, Store};
use docgraph_types::{Document, FieldKind, Model, ModelField};

pub fn editor() -> Model {
    Model::new(
        "Editor",
        vec![
            ModelField::new("first_name", FieldKind::String).required(),
            ModelField::new("last_name", FieldKind::String),
        ],
    )
    .unwrap()
}

pub fn article() -> Model {
    Model::new(
        "Article",
        vec![
            ModelField::new("headline", FieldKind::String).required(),
            ModelField::new("pub_date", FieldKind::DateTime),
            ModelField::new("editor", FieldKind::reference("Editor")),
        ],
    )
    .unwrap()
}

pub fn reporter() -> Model {
    Model::new("Reporter", reporter_fields()).unwrap()
}

/// Reporter carrying a list of embedded articles, which has no GraphQL mapping.
pub fn reporter_with_embedded_articles() -> Model {
    let mut fields = reporter_fields();
    fields.push(ModelField::new(
        "embedded_articles",
        FieldKind::list(FieldKind::embedded("EmbeddedArticle")),
    ));
    Model::new("Reporter", fields).unwrap()
}

fn reporter_fields() -> Vec<ModelField> {
    vec![
        ModelField::new("first_name", FieldKind::String).required(),
        ModelField::new("last_name", FieldKind::String).required(),
        ModelField::new("email", FieldKind::Email),
        ModelField::new("articles", FieldKind::list(FieldKind::reference("Article"))),
        ModelField::new("awards", FieldKind::list(FieldKind::String)),
    ]
}

pub fn memory_store() -> Store {
    Arc::new(MemoryStore::new())
}

#[derive(Debug)]
pub struct Fixtures {
    pub editors: Vec<Document>,
    pub articles: Vec<Document>,
    pub reporter: Document,
}

pub async fn setup_fixtures(store: &Store) -> Fixtures {
    let penny = editor_document("Penny", "Hardaway");
    let grant = editor_document("Grant", "Hill");

    let hello = Document::new("article")
        .set("headline", "Hello")
        .set("pub_date", "2018-01-01T00:00:00Z")
        .set("editor", penny.id.clone());
    let world = Document::new("article")
        .set("headline", "World")
        .set("pub_date", "2018-01-02T00:00:00Z")
        .set("editor", grant.id.clone());

    let reporter = Document::new("reporter")
        .set("first_name", "Allen")
        .set("last_name", "Iverson")
        .set("email", "ai@gmail.com")
        .set("awards", vec!["2010-mvp"])
        .set("articles", vec![hello.id.clone(), world.id.clone()]);

    let editors = vec![insert(store, penny).await, insert(store, grant).await];
    let articles = vec![insert(store, hello).await, insert(store, world).await];
    let reporter = insert(store, reporter).await;

    Fixtures { editors, articles, reporter }
}

pub fn editor_document(first_name: &str, last_name: &str) -> Document {
    Document::new("editor").set("first_name", first_name).set("last_name", last_name)
}

pub async fn insert(store: &Store, document: Document) -> Document {
    store.insert(document).await.unwrap()
}
