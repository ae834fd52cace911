use sortsearch::{binary_search, linear_search, merge_sort};

#[test]
fn test_binary_search_found() {
    let items = [2, 4, 6, 8, 10];
    assert_eq!(binary_search(&items, &6), Some(2));
    assert_eq!(binary_search(&items, &2), Some(0));
    assert_eq!(binary_search(&items, &10), Some(4));
}

#[test]
fn test_binary_search_not_found() {
    let items = [2, 4, 6, 8, 10];
    assert_eq!(binary_search(&items, &5), None);
    assert_eq!(binary_search(&items, &1), None);
    assert_eq!(binary_search(&items, &11), None);
}

#[test]
fn test_linear_search_unsorted() {
    let items = [64, 34, 25, 12, 22, 11, 90, 25];
    assert_eq!(linear_search(&items, &25), Some(2));
    assert_eq!(linear_search(&items, &90), Some(6));
    assert_eq!(linear_search(&items, &64), Some(0));
    assert_eq!(linear_search(&items, &13), None);
}

#[test]
fn test_single_element() {
    let items = ["only"];
    assert_eq!(linear_search(&items, &"only"), Some(0));
    assert_eq!(binary_search(&items, &"only"), Some(0));
    assert_eq!(binary_search(&items, &"other"), None);
}

#[test]
fn test_searches_agree_on_sorted_input() {
    let mut items: Vec<u32> = (0..200).map(|i| (i * 37 + 11) % 50).collect();
    merge_sort(&mut items);

    for target in 0..60 {
        let linear = linear_search(&items, &target);
        let binary = binary_search(&items, &target);

        match (linear, binary) {
            (Some(l), Some(b)) => {
                assert_eq!(items[l], target);
                assert_eq!(items[b], target);
            }
            (None, None) => assert!(!items.contains(&target)),
            _ => panic!("searches disagree for {}: {:?} vs {:?}", target, linear, binary),
        }
    }
}

#[test]
fn test_linear_search_returns_first_match() {
    let items = [3, 1, 3, 1, 3];
    assert_eq!(linear_search(&items, &3), Some(0));
    assert_eq!(linear_search(&items, &1), Some(1));
}
