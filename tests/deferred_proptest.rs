use deferred::Deferred;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Construct(String),
    Destruct,
    Take,
    Replace(String),
    Push(char),
    CloneFrom(Option<String>),
    MemTake,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Operation::Construct),
        Just(Operation::Destruct),
        Just(Operation::Take),
        "[a-z]{0,8}".prop_map(Operation::Replace),
        any::<char>().prop_map(Operation::Push),
        proptest::option::of("[a-z]{0,8}").prop_map(Operation::CloneFrom),
        Just(Operation::MemTake),
    ]
}

proptest! {
    #[test]
    fn test_deferred_matches_option_model(ops in proptest::collection::vec(operation(), 1..100)) {
        let mut model: Option<String> = None;
        let mut cell: Deferred<String> = Deferred::new();

        for op in ops {
            match op {
                Operation::Construct(value) => {
                    // Constructing into a live cell is a contract violation; skip it.
                    if model.is_none() {
                        cell.construct(value.clone());
                        model = Some(value);
                    }
                }
                Operation::Destruct => {
                    cell.destruct();
                    model = None;
                }
                Operation::Take => {
                    prop_assert_eq!(cell.take(), model.take());
                }
                Operation::Replace(value) => {
                    prop_assert_eq!(cell.replace(value.clone()), model.replace(value));
                }
                Operation::Push(ch) => {
                    if let Some(expected) = model.as_mut() {
                        expected.push(ch);
                        cell.get_mut().push(ch);
                    }
                }
                Operation::CloneFrom(source) => {
                    let source_cell = source.clone().map_or_else(Deferred::new, Deferred::from_value);
                    cell.clone_from(&source_cell);
                    model = source;
                }
                Operation::MemTake => {
                    let moved = std::mem::take(&mut cell);
                    prop_assert!(!cell.is_constructed());
                    prop_assert_eq!(moved.try_get(), model.as_ref());
                    cell = moved;
                }
            }

            prop_assert_eq!(cell.is_constructed(), model.is_some());
            prop_assert_eq!(cell.try_get(), model.as_ref());
            let copy = cell.clone();
            prop_assert_eq!(copy.try_get(), model.as_ref());
        }
    }
}
