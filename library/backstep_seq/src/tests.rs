use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use super::*;

#[test]
fn borrowed_slice_yields_references() {
    let data = [10, 20, 30];
    let seq: &[i32] = &data;
    assert_eq!(Sequence::len(&seq), 3);
    assert_eq!(seq.at(0), &10);
    assert_eq!(seq.at(2), &30);
}

#[test]
fn borrowed_vec_outlives_the_sequence_handle() {
    let data = vec![String::from("a"), String::from("b")];
    let last = {
        let seq = &data;
        Sequence::at(&seq, 1)
    };
    assert_eq!(last, "b");
}

#[test]
fn borrowed_deque() {
    let mut data = VecDeque::new();
    data.push_back(2);
    data.push_front(1);
    let seq = &data;
    assert_eq!(Sequence::len(&seq), 2);
    assert_eq!(Sequence::at(&seq, 0), &1);
}

#[test]
fn owned_containers_clone_elements() {
    let v = vec![1, 2, 3];
    assert_eq!(v.at(1), 2);

    let boxed: Box<[u8]> = Box::new([7, 8]);
    assert_eq!(Sequence::len(&boxed), 2);
    assert_eq!(boxed.at(1), 8);

    let rc: Rc<[char]> = Rc::from(vec!['x', 'y']);
    assert_eq!(rc.at(0), 'x');

    let arc: Arc<[&str]> = Arc::from(vec!["p", "q", "r"]);
    assert_eq!(Sequence::len(&arc), 3);
    assert_eq!(arc.at(2), "r");

    let deque: VecDeque<i64> = VecDeque::from(vec![-1, -2]);
    assert_eq!(deque.at(1), -2);
}

#[test]
fn arrays_report_their_const_length() {
    let arr = ['t', 'e', 's', 't'];
    assert_eq!(Sequence::len(&arr), 4);
    assert_eq!(arr.at(2), 's');

    let empty: [u8; 0] = [];
    assert!(Sequence::is_empty(&empty));
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn out_of_range_lookup_panics() {
    let v = vec![1];
    let _ = v.at(1);
}

mod proptest_sequences {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn owned_and_borrowed_agree(items in proptest::collection::vec(any::<i32>(), 0..64)) {
            let borrowed: &[i32] = &items;
            prop_assert_eq!(Sequence::len(&borrowed), Sequence::len(&items));
            for i in 0..items.len() {
                prop_assert_eq!(*borrowed.at(i), items.at(i));
            }
        }
    }
}
