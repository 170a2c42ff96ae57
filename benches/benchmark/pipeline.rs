use crate::common::{
    configure_criterion, parse_user_id, simulate_auth_check, simulate_db_query,
    simulate_validation, DomainError, UserData,
};
use criterion::{criterion_group, Criterion};
use result_rail::Result;
use std::hint::black_box;

pub fn bench_flat_map_chain_vs_std(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/flat_map_chain");

    group.bench_function("rail_success", |b| {
        b.iter(|| {
            black_box(
                simulate_db_query(black_box(123))
                    .flat_map(simulate_validation)
                    .flat_map(simulate_auth_check)
                    .map(|user| user.username),
            )
        })
    });

    group.bench_function("rail_failure", |b| {
        b.iter(|| {
            black_box(
                simulate_db_query(black_box(100))
                    .flat_map(simulate_validation)
                    .flat_map(simulate_auth_check)
                    .map(|user| user.username),
            )
        })
    });

    group.bench_function("std_success", |b| {
        b.iter(|| {
            black_box(
                simulate_db_query(black_box(123))
                    .into_std()
                    .and_then(|u| simulate_validation(u).into_std())
                    .and_then(|u| simulate_auth_check(u).into_std())
                    .map(|user| user.username),
            )
        })
    });

    group.finish();
}

pub fn bench_try_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/try_map");

    group.bench_function("parse_ok", |b| {
        b.iter(|| {
            let raw = Result::<&str, DomainError>::success(black_box("4242"));
            black_box(raw.try_map(parse_user_id))
        })
    });

    group.bench_function("parse_err", |b| {
        b.iter(|| {
            let raw = Result::<&str, DomainError>::success(black_box("42x"));
            black_box(raw.try_map(parse_user_id))
        })
    });

    group.finish();
}

pub fn bench_collect(c: &mut Criterion) {
    let ids: Vec<u64> = (1..=99).collect();

    c.bench_function("pipeline/collect_users", |b| {
        b.iter(|| {
            let users: Result<Vec<UserData>, _> =
                ids.iter().map(|id| simulate_db_query(*id)).collect();
            black_box(users)
        })
    });
}

criterion_group! {
    name = pipeline_benches;
    config = configure_criterion();
    targets =
        bench_flat_map_chain_vs_std,
        bench_try_map,
        bench_collect,
}
