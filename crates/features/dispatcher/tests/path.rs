mod common;

use common::{Store, registry};
use japi_dispatcher::{DispatchError, JsonPath};
use japi_resources::ResourceRegistry;
use proptest::prelude::*;
use std::sync::Arc;

fn tasks_registry() -> ResourceRegistry {
    registry(Arc::new(Store::with([])))
}

#[test]
fn parses_each_shape() {
    let registry = tasks_registry();

    assert_eq!(
        JsonPath::parse("/tasks", &registry).unwrap(),
        JsonPath::Collection { resource_type: "tasks".to_owned() }
    );
    assert_eq!(
        JsonPath::parse("/tasks/1,2/", &registry).unwrap(),
        JsonPath::Resource { resource_type: "tasks".to_owned(), ids: vec!["1".into(), "2".into()] }
    );
    assert_eq!(
        JsonPath::parse("tasks/1/project", &registry).unwrap(),
        JsonPath::Field {
            resource_type: "tasks".to_owned(),
            id: "1".to_owned(),
            field: "project".to_owned()
        }
    );
    assert_eq!(
        JsonPath::parse("/projects/3/relationships/tasks", &registry).unwrap().to_string(),
        "/projects/3/relationships/tasks"
    );
}

#[test]
fn reports_unknown_types_and_malformed_paths() {
    let registry = tasks_registry();

    assert!(matches!(
        JsonPath::parse("/people/1", &registry),
        Err(DispatchError::ResourceNotFound { .. })
    ));
    for path in ["", "//", "/tasks//1", "/tasks/1,,2", "/tasks/1/relationships/project/extra"] {
        assert!(
            matches!(JsonPath::parse(path, &registry), Err(DispatchError::BadRequest { .. })),
            "{path} should be rejected"
        );
    }
}

proptest! {
    #[test]
    fn id_lists_survive_parsing(ids in prop::collection::vec("[a-z0-9]{1,8}", 1..6)) {
        let registry = tasks_registry();
        let path = format!("/tasks/{}", ids.join(","));

        let parsed = JsonPath::parse(&path, &registry).unwrap();
        prop_assert_eq!(parsed.ids(), ids.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(parsed.to_string(), path);
    }

    #[test]
    fn arbitrary_input_never_panics(path in "\\PC{0,40}") {
        let _ = JsonPath::parse(&path, &tasks_registry());
    }
}
