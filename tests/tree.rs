use std::collections::HashSet;

use linked_bst::{Error, Tree};
use quickcheck::quickcheck;

fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

fn build<T: Ord + Copy>(items: &[T]) -> Tree<T> {
    init_logger();
    items.iter().copied().collect()
}

fn sorted(tree: &Tree<i32>) -> Vec<i32> {
    tree.inorder().copied().collect()
}

#[test]
fn add_then_inorder_is_sorted() {
    let tree = build(&[5, 3, 8, 1, 4]);

    assert_eq!(sorted(&tree), [1, 3, 4, 5, 8]);
    assert_eq!(tree.height(), 2);
}

#[test]
fn remove_inner_node() {
    let mut tree = build(&[5, 3, 8, 1, 4]);

    assert_eq!(tree.remove(&3), Ok(3));

    assert!(!tree.contains(&3));
    assert_eq!(tree.len(), 4);
    assert_eq!(sorted(&tree), [1, 4, 5, 8]);
}

#[test]
fn remove_absent_item_is_an_error() {
    let mut tree = build(&[5, 3, 8, 1, 4]);

    let err = tree.remove(&99).unwrap_err();

    assert_eq!(err, Error::ItemNotFound);
    assert_eq!(err.to_string(), "item not in tree");
    assert_eq!(tree.len(), 5);
}

#[test]
fn rebalance_degenerate_chain() {
    let mut tree = build(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.height(), 6);
    assert!(!tree.is_balanced());

    tree.rebalance();

    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
    assert_eq!(sorted(&tree), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn successor_and_predecessor() {
    let tree = build(&[5, 3, 8, 1, 4]);

    assert_eq!(tree.successor(&4), Some(&5));
    assert_eq!(tree.predecessor(&4), Some(&3));
    assert_eq!(tree.successor(&8), None);
}

#[test]
fn range_find_closed_interval() {
    let tree = build(&[5, 3, 8, 1, 4]);

    assert_eq!(tree.range_find(&3, &5), [&3, &4, &5]);
}

#[test]
fn replace_and_clear() {
    let mut tree = build(&[5, 3, 8]);

    assert_eq!(tree.replace(&8, 7), Some(8));
    assert_eq!(tree.replace(&8, 9), None);
    assert_eq!(sorted(&tree), [3, 5, 7]);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.find(&5), None);
}

#[test]
fn strings_in_word_order() {
    init_logger();
    let words = ["pear", "apple", "fig", "kiwi", "banana"];
    let mut tree: Tree<String> = words.iter().map(|w| w.to_string()).collect();

    assert_eq!(tree.find(&"fig".to_string()).map(String::as_str), Some("fig"));
    assert_eq!(tree.successor(&"c".to_string()).map(String::as_str), Some("fig"));
    tree.rebalance();
    assert_eq!(
        tree.into_iter().collect::<Vec<_>>(),
        ["apple", "banana", "fig", "kiwi", "pear"]
    );
}

#[test]
fn clone_then_diverge() {
    let mut tree = build(&[5, 3, 8, 1, 4]);
    let copy = tree.clone();

    assert_eq!(tree.remove(&3), Ok(3));

    assert_eq!(sorted(&copy), [1, 3, 4, 5, 8]);
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8]);
    assert_eq!(sorted(&tree), [1, 4, 5, 8]);
}

quickcheck! {
    fn clone_matches_original(xs: Vec<i16>) -> bool {
        let tree = build(&xs[..]);
        let copy = tree.clone();

        copy.iter().eq(tree.iter()) && copy.height() == tree.height() && copy.len() == tree.len()
    }

    fn inorder_is_non_descending(xs: Vec<i32>) -> bool {
        let tree = build(&xs[..]);
        let items = sorted(&tree);

        items.windows(2).all(|w| w[0] <= w[1]) && items.len() == xs.len()
    }

    fn len_matches_traversal(xs: Vec<i16>, removes: Vec<i16>) -> bool {
        let mut tree = build(&xs[..]);
        let mut expected = xs.len();
        for remove in &removes {
            if tree.remove(remove).is_ok() {
                expected -= 1;
            }
        }

        tree.len() == expected && tree.iter().count() == expected && tree.inorder().count() == expected
    }

    fn add_then_remove_round_trips(xs: Vec<i8>) -> bool {
        let distinct: HashSet<_> = xs.into_iter().collect();
        let mut tree = build(&distinct.iter().copied().collect::<Vec<_>>()[..]);

        distinct.iter().all(|x| tree.remove(x) == Ok(*x) && !tree.contains(x)) && tree.is_empty()
    }

    fn rebalance_preserves_items(xs: Vec<i32>) -> bool {
        let mut tree = build(&xs[..]);
        let before = sorted(&tree);

        tree.rebalance();

        let bound = ((xs.len() + 1) as f64).log2().ceil() as isize;
        sorted(&tree) == before && tree.height() <= bound
    }

    fn neighbours_are_closest(xs: Vec<i8>, target: i8) -> bool {
        let tree = build(&xs[..]);

        tree.successor(&target) == xs.iter().filter(|&&x| x > target).min()
            && tree.predecessor(&target) == xs.iter().filter(|&&x| x < target).max()
    }

    fn range_find_is_exact(xs: Vec<i8>, low: i8, high: i8) -> bool {
        let tree = build(&xs[..]);
        let mut expected: Vec<_> = xs.iter().filter(|&&x| low <= x && x <= high).collect();
        expected.sort();

        tree.range_find(&low, &high) == expected
    }
}
