use result_rail::Result;

#[test]
fn iter_yields_success_value_once() {
    let r = Result::<i32, &str>::success(7);
    let mut iter = r.iter();

    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&7));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_on_failure_is_empty() {
    let mut r = Result::<i32, &str>::failure("error");

    assert_eq!(r.iter().len(), 0);
    assert_eq!(r.iter().next(), None);
    assert_eq!(r.iter_mut().next(), None);
    assert_eq!(r.into_iter().next(), None);
}

#[test]
fn iter_mut_updates_value() {
    let mut r = Result::<i32, &str>::success(3);
    for value in &mut r {
        *value += 1;
    }
    assert_eq!(r.into_value(), Some(4));
}

#[test]
fn for_loop_over_reference_reads_value() {
    let r = Result::<i32, &str>::success(3);
    let mut total = 0;
    for value in &r {
        total += *value;
    }
    assert_eq!(total, 3);
}

#[test]
fn collect_gathers_all_successes() {
    let collected: Result<Vec<i32>, &str> = (1..=3).map(Result::success).collect();

    assert_eq!(collected.into_value(), Some(vec![1, 2, 3]));
}

#[test]
fn collect_returns_first_failure_and_stops() {
    let mut pulled = 0;
    let collected: Result<Vec<i32>, &str> =
        [Result::success(1), Result::failure("second"), Result::failure("third")]
            .into_iter()
            .inspect(|_| pulled += 1)
            .collect();

    assert_eq!(collected.into_error(), Some("second"));
    assert_eq!(pulled, 2);
}

#[test]
fn collect_of_empty_iterator_is_success() {
    let collected: Result<Vec<i32>, &str> = std::iter::empty().collect();
    assert_eq!(collected.into_value(), Some(vec![]));
}
