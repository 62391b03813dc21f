use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rankdfa::dfa::Dfa;
use rankdfa::regex::att_fst_from_regex;

const MAX_LEN: u32 = 24;

fn bench_dfa() -> Dfa {
    let listing = att_fst_from_regex("([a-z]{2}[0-9]){3,8}").unwrap();
    Dfa::new(&listing, MAX_LEN).unwrap()
}

pub fn table_build(c: &mut Criterion) {
    let listing = att_fst_from_regex("([a-z]{2}[0-9]){3,8}").unwrap();
    c.bench_function("dfa table build", |b| {
        b.iter(|| Dfa::new(black_box(&listing), black_box(MAX_LEN)).unwrap())
    });
}

pub fn rank(c: &mut Criterion) {
    let dfa = bench_dfa();
    let word = b"ab1cd2ef3gh4";
    c.bench_function("rank", |b| b.iter(|| dfa.rank(black_box(word)).unwrap()));
}

pub fn unrank(c: &mut Criterion) {
    let dfa = bench_dfa();
    let rank = dfa.rank(b"ab1cd2ef3gh4").unwrap();
    c.bench_function("unrank", |b| {
        b.iter(|| dfa.unrank(black_box(&rank)).unwrap())
    });
}

pub fn regex_compile(c: &mut Criterion) {
    c.bench_function("regex compile", |b| {
        b.iter(|| att_fst_from_regex(black_box("([a-z]{2}[0-9]){3,8}")).unwrap())
    });
}

criterion_group!(benches, table_build, rank, unrank, regex_compile);
criterion_main!(benches);
