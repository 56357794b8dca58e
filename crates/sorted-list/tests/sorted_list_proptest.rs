use proptest::prelude::*;
use sorted_list::{ElementKind, SortedList, Value};

#[derive(Clone, Debug)]
enum Op {
    Add(i64),
    Remove(i64),
    RemoveAll(i64),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (-20i64..20).prop_map(Op::Add),
        2 => (-20i64..20).prop_map(Op::Remove),
        2 => (-20i64..20).prop_map(Op::RemoveAll),
        1 => Just(Op::Clear),
    ]
}

fn ints(list: &SortedList) -> Vec<i64> {
    list.iter().filter_map(Value::as_integer).collect()
}

proptest! {
    #[test]
    fn from_values_is_sorted_permutation(values in proptest::collection::vec(any::<i64>(), 0..64)) {
        let list = SortedList::from_values(values.clone(), None).unwrap();
        let mut expected = values;
        expected.sort();
        prop_assert_eq!(ints(&list), expected);
        prop_assert!(list.assert_valid().is_ok());
    }

    #[test]
    fn text_order_is_bytewise(words in proptest::collection::vec(".{0,6}", 0..32)) {
        let list = SortedList::from_values(words.clone(), Some(ElementKind::Text)).unwrap();
        let mut expected = words;
        expected.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
        let actual: Vec<&str> = list.iter().filter_map(Value::as_text).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn operations_match_model(ops in proptest::collection::vec(op(), 0..128)) {
        let mut list = SortedList::of_int();
        let mut model: Vec<i64> = Vec::new();

        for op in ops {
            match op {
                Op::Add(n) => {
                    list.add(n).unwrap();
                    model.push(n);
                    model.sort();
                }
                Op::Remove(n) => {
                    let expected = model.iter().position(|x| *x == n);
                    prop_assert_eq!(list.remove(n), expected.is_some());
                    if let Some(pos) = expected {
                        model.remove(pos);
                    }
                }
                Op::RemoveAll(n) => {
                    let before = model.len();
                    model.retain(|x| *x != n);
                    prop_assert_eq!(list.remove_all(n), before - model.len());
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }
            prop_assert!(list.assert_valid().is_ok());
            prop_assert_eq!(list.kind(), Some(ElementKind::Integer));
        }

        prop_assert_eq!(ints(&list), model.clone());
        prop_assert_eq!(list.min().and_then(Value::as_integer), model.iter().min().copied());
        prop_assert_eq!(list.max().and_then(Value::as_integer), model.iter().max().copied());
        prop_assert_eq!(list.size(), model.len());
    }

    #[test]
    fn contains_matches_model(values in proptest::collection::vec(-50i64..50, 0..40), probe in -60i64..60) {
        let list = SortedList::from_values(values.clone(), None).unwrap();
        prop_assert_eq!(list.contains(probe), values.contains(&probe));
    }

    #[test]
    fn equals_ignores_insertion_order(values in proptest::collection::vec(any::<i64>(), 0..32)) {
        let a = SortedList::from_values(values.clone(), Some(ElementKind::Integer)).unwrap();
        let mut reversed = values;
        reversed.reverse();
        let b = SortedList::from_values(reversed, Some(ElementKind::Integer)).unwrap();
        prop_assert!(a.equals(&b));
        prop_assert!(b.equals(&a));
    }

    #[test]
    fn json_round_trip(values in proptest::collection::vec(any::<i64>(), 1..32)) {
        let list = SortedList::from_values(values, None).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        let back: SortedList = serde_json::from_str(&json).unwrap();
        prop_assert!(back.equals(&list));
    }
}
