// SPDX-License-Identifier: MPL-2.0
//! Benchmarks the name filter over the built-in country list.

use country_dial::data::HardcodedCountryRepository;
use country_dial::domain::{CountryRepository, NameFilter};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_name_filter(c: &mut Criterion) {
    let countries = HardcodedCountryRepository::new()
        .countries()
        .expect("constant list is valid");

    c.bench_function("filter_blank_query", |b| {
        let filter = NameFilter::new("");
        b.iter(|| black_box(filter.apply(black_box(&countries))));
    });

    c.bench_function("filter_common_substring", |b| {
        let filter = NameFilter::new("united");
        b.iter(|| black_box(filter.apply(black_box(&countries))));
    });

    c.bench_function("filter_no_match", |b| {
        let filter = NameFilter::new("zz");
        b.iter(|| black_box(filter.apply(black_box(&countries))));
    });
}

criterion_group!(benches, bench_name_filter);
criterion_main!(benches);
