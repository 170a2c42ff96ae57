use result_rail::traits::ErrorOps;
use result_rail::Result;

#[test]
fn recover_replaces_std_failure() {
    let recovered = Err::<i32, &str>("missing").recover(|_| Ok(42));
    assert_eq!(recovered, Ok(42));
}

#[test]
fn recover_keeps_rail_success() {
    let mut calls = 0;
    let kept = Result::<i32, &str>::success(1).recover(|_| {
        calls += 1;
        Result::success(0)
    });

    assert_eq!(calls, 0);
    assert_eq!(kept, Result::success(1));
}

#[test]
fn bimap_result_maps_std_result_to_rail() {
    let ok = Ok::<i32, &str>(21).bimap_result(|x| x * 2, |e| e.to_uppercase());
    assert_eq!(ok, Result::success(42));

    let err = Err::<i32, &str>("bad").bimap_result(|x| x * 2, |e| e.to_uppercase());
    assert_eq!(err, Result::failure("BAD".to_string()));
}
