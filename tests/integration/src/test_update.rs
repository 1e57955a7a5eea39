//! Update document scenarios.

#[cfg(test)]
mod tests {
    use bson::{Bson, Document, doc};
    use docstack_update_core::{Position, UpdateBuilder, UpdateOperator};

    use crate::init_tracing;

    fn keys(doc: &Document) -> Vec<&str> {
        doc.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_should_build_status_update() {
        init_tracing();

        let update = UpdateBuilder::new().set("status", "done").inc("count", 1).build();

        assert_eq!(
            update,
            doc! { "$set": { "status": "done" }, "$inc": { "count": 1_i64 } }
        );
        assert_eq!(keys(&update), ["$set", "$inc"]);
    }

    #[test]
    fn test_should_build_single_operator_for_any_value() {
        init_tracing();

        let values = [
            Bson::String("text".to_owned()),
            Bson::Int32(7),
            Bson::Double(2.5),
            Bson::Boolean(false),
            Bson::Null,
            Bson::Array(vec![Bson::Int32(1), Bson::Int32(2)]),
            Bson::Document(doc! { "nested": { "deep": true } }),
        ];
        for value in values {
            let update = UpdateBuilder::new().set("field", value.clone()).build();
            assert_eq!(update.len(), 1);
            assert_eq!(
                update.get_document("$set").unwrap(),
                &doc! { "field": value }
            );
        }
    }

    #[test]
    fn test_should_let_last_write_win_per_operator() {
        init_tracing();

        let mut builder = UpdateBuilder::new();
        builder
            .set("a", 1)
            .push("log", "first")
            .set("b", 2)
            .push("log", "second");

        assert_eq!(
            builder.build(),
            doc! { "$set": { "b": 2 }, "$push": { "log": "second" } }
        );
        assert_eq!(
            builder.operators().collect::<Vec<_>>(),
            vec![UpdateOperator::Set, UpdateOperator::Push]
        );
    }

    #[test]
    fn test_should_build_array_maintenance_update() {
        init_tracing();

        let update = UpdateBuilder::new()
            .push_all("history", vec![doc! { "v": 1 }, doc! { "v": 2 }])
            .pull_all("tags", ["stale", "old"])
            .pop("queue", Position::First)
            .add_to_set("owners", "ops")
            .build();

        assert_eq!(
            update,
            doc! {
                "$pushAll": { "history": [{ "v": 1 }, { "v": 2 }] },
                "$pullAll": { "tags": ["stale", "old"] },
                "$pop": { "queue": -1 },
                "$addToSet": { "owners": "ops" },
            }
        );
        assert_eq!(keys(&update), ["$pushAll", "$pullAll", "$pop", "$addToSet"]);
    }

    #[test]
    fn test_should_build_schema_migration_update() {
        init_tracing();

        let update = UpdateBuilder::new()
            .rename("fullname", "name")
            .unset("deprecated")
            .pull("roles", "guest")
            .build();

        assert_eq!(
            update,
            doc! {
                "$rename": { "fullname": "name" },
                "$unset": { "deprecated": 1 },
                "$pull": { "roles": "guest" },
            }
        );
    }

    #[test]
    fn test_should_produce_identical_independent_builds() {
        init_tracing();

        let mut builder = UpdateBuilder::new();
        builder.set("profile", doc! { "age": 30 }).pop("stack", Position::Last);

        let mut first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);

        first
            .get_document_mut("$set")
            .unwrap()
            .get_document_mut("profile")
            .unwrap()
            .insert("age", 31);

        assert_eq!(second, builder.build());
        assert_eq!(
            second.get_document("$set").unwrap(),
            &doc! { "profile": { "age": 30 } }
        );
    }

    #[test]
    fn test_should_parse_operator_names_from_built_document() {
        init_tracing();

        let update = UpdateBuilder::new()
            .inc("a", 1)
            .rename("b", "c")
            .pop("d", Position::Last)
            .build();

        let ops: Vec<UpdateOperator> = update
            .keys()
            .map(|k| k.parse().unwrap())
            .collect();
        assert_eq!(
            ops,
            vec![UpdateOperator::Inc, UpdateOperator::Rename, UpdateOperator::Pop]
        );
    }
}
