#[cfg(test)]
mod tests {
    use async_graphql::dynamic::Schema;
    use async_graphql::Value as GraphqlValue;
    use docgraph_store::Store;
    use docgraph_types::{FieldKind, Model, ModelField};
    use serde_json::json;

    use crate::tests::common::{editor, memory_store, setup_fixtures};
    use crate::tests::run_graphql_query;
    use crate::{Error, ObjectTypeOptions, Registry, RootField, SchemaBuilder};

    fn editor_schema(store: Store) -> Schema {
        let mut registry = Registry::new();
        registry.register(ObjectTypeOptions::new("EditorType").model(editor())).unwrap();

        SchemaBuilder::new(registry)
            .query(RootField::first("editor", "EditorType"))
            .query(RootField::list("editors", "EditorType"))
            .query(RootField::by_id("editorById", "EditorType"))
            .finish(store)
            .unwrap()
    }

    #[tokio::test]
    async fn test_editor_and_editors() {
        let store = memory_store();
        setup_fixtures(&store).await;
        let schema = editor_schema(store);

        let query = r#"
          query EditorQuery {
            editor {
              firstName
            }
            editors {
              firstName
              lastName
            }
          }
        "#;
        let result = run_graphql_query(&schema, query).await;

        assert_eq!(
            result,
            json!({
                "editor": { "firstName": "Penny" },
                "editors": [
                    { "firstName": "Penny", "lastName": "Hardaway" },
                    { "firstName": "Grant", "lastName": "Hill" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_editor_by_id() {
        let store = memory_store();
        let fixtures = setup_fixtures(&store).await;
        let schema = editor_schema(store);

        let grant = &fixtures.editors[1];
        let query = format!(r#"{{ editorById(id: "{}") {{ id firstName }} }}"#, grant.id);
        let result = run_graphql_query(&schema, &query).await;
        assert_eq!(result, json!({ "editorById": { "id": grant.id, "firstName": "Grant" } }));

        let query = r#"{ editorById(id: "000000000000000000000000") { firstName } }"#;
        let result = run_graphql_query(&schema, query).await;
        assert_eq!(result, json!({ "editorById": null }));
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let schema = editor_schema(memory_store());

        let result = run_graphql_query(&schema, "{ editor { firstName } editors { firstName } }").await;
        assert_eq!(result, json!({ "editor": null, "editors": [] }));
    }

    #[tokio::test]
    async fn test_fields_in_requested_order() {
        let store = memory_store();
        let fixtures = setup_fixtures(&store).await;
        let schema = editor_schema(store);

        let res = schema.execute("{ editor { lastName id firstName } }").await;
        assert!(res.errors.is_empty(), "{:?}", res.errors);

        let GraphqlValue::Object(data) = res.data else { panic!("expected an object") };
        let GraphqlValue::Object(editor) = &data["editor"] else { panic!("expected an editor") };
        let fields: Vec<_> = editor.iter().map(|(name, value)| (name.as_str(), value.clone())).collect();

        assert_eq!(
            fields,
            vec![
                ("lastName", GraphqlValue::from("Hardaway")),
                ("id", GraphqlValue::from(fixtures.editors[0].id.clone())),
                ("firstName", GraphqlValue::from("Penny")),
            ]
        );
    }

    #[test]
    fn test_repeated_root_field_is_an_error() {
        let mut registry = Registry::new();
        registry.register(ObjectTypeOptions::new("EditorType").model(editor())).unwrap();

        let result = SchemaBuilder::new(registry)
            .query(RootField::list("editors", "EditorType"))
            .query(RootField::first("editors", "EditorType"))
            .finish(memory_store());

        match result {
            Err(Error::DuplicateRootField(name)) => assert_eq!(name, "editors"),
            Err(other) => panic!("unexpected error {other:?}"),
            Ok(_) => panic!("schema with a repeated root field should not build"),
        }
    }

    #[test]
    fn test_node_field_without_node_types() {
        let mut registry = Registry::new();
        registry.register(ObjectTypeOptions::new("EditorType").model(editor())).unwrap();

        let result = SchemaBuilder::new(registry).query(RootField::node()).finish(memory_store());

        match result {
            Err(Error::MissingNodeType(name)) => assert_eq!(name, "node"),
            Err(other) => panic!("unexpected error {other:?}"),
            Ok(_) => panic!("node field without node types should not build"),
        }
    }

    #[test]
    fn test_colliding_field_names_are_rejected_on_register() {
        let model = Model::new(
            "User",
            vec![
                ModelField::new("first_name", FieldKind::String),
                ModelField::new("firstName", FieldKind::Int),
            ],
        )
        .unwrap();

        let mut registry = Registry::new();
        let err = registry.register(ObjectTypeOptions::new("UserType").model(model)).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateFieldName { graphql_name, .. } if graphql_name == "firstName"
        ));
        assert!(registry.is_empty());
    }
}
