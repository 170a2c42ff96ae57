use result_rail::Result;

pub mod iter;

#[test]
fn success_and_failure_are_mutually_exclusive() {
    let cases: Vec<Result<i32, &str>> = vec![Result::success(0), Result::failure("e")];

    for case in &cases {
        assert_ne!(case.is_success(), case.is_failure());
        assert_ne!(case.value().is_some(), case.error().is_some());
    }
}

#[test]
fn constructors_round_trip_through_accessors() {
    assert_eq!(Result::<i32, &str>::success(9).into_value(), Some(9));
    assert_eq!(Result::<i32, &str>::failure("oops").into_error(), Some("oops"));
}

#[test]
fn map_then_flat_map_chains_success_values() {
    let result = Result::<i32, &str>::success(4).map(|x| x * 2).flat_map(|x| {
        if x == 8 {
            Result::success(x + 1)
        } else {
            Result::failure("unexpected")
        }
    });

    assert_eq!(result.into_value(), Some(9));
}

#[test]
fn failure_short_circuits_a_whole_chain() {
    let mut calls = 0;
    let result: Result<String, &str> = Result::<i32, &str>::failure("first")
        .map(|x| {
            calls += 1;
            x + 1
        })
        .try_map(|x| {
            calls += 1;
            Ok::<_, &str>(x * 2)
        })
        .flat_map(|x| {
            calls += 1;
            Result::success(x.to_string())
        });

    assert_eq!(calls, 0);
    assert_eq!(result.into_error(), Some("first"));
}
