//! Property tests for id assignment.

use proptest::prelude::*;
use student_store::storage::{SqliteStore, StudentFields, StudentId};

/// One step of a random workload.
#[derive(Debug, Clone)]
enum Op {
    Create,
    DeleteOldest,
    DeleteAll,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Create),
        2 => Just(Op::DeleteOldest),
        1 => Just(Op::DeleteAll),
    ]
}

async fn run_ops(ops: Vec<Op>) -> Vec<StudentId> {
    let store = SqliteStore::open_in_memory().await.expect("open");
    let fields = StudentFields::new("Prop", "Test", 30, "prop@example.com");
    let mut assigned = Vec::new();

    for op in ops {
        match op {
            Op::Create => assigned.push(store.create(&fields).await.expect("create")),
            Op::DeleteOldest => {
                let students = store.list_all().await.expect("list");
                if let Some(first) = students.first() {
                    assert!(store.delete(first.id).await.expect("delete"));
                }
            }
            Op::DeleteAll => {
                store.delete_all().await.expect("delete all");
            }
        }
    }

    assigned
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ids_strictly_increase(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let assigned = runtime.block_on(run_ops(ops));

        for pair in assigned.windows(2) {
            prop_assert!(pair[0] < pair[1], "ids not increasing: {:?}", assigned);
        }
    }
}
