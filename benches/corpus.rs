use divan::{Bencher, black_box};
use itctk::loader::load;
use itctk::searcher::lookup_c_to;
use std::io;
use std::path::Path;

fn main() {
    divan::main();
}

const FIXTURE: &str = "tests/fixtures/test.tsv";

/// Benchmark loading the test corpus
#[divan::bench]
fn load_fixture(bencher: Bencher) {
    let path = Path::new(FIXTURE);
    bencher.bench_local(|| black_box(load(black_box(path)).unwrap()));
}

/// Benchmark a prefix token search
#[divan::bench]
fn find_word(bencher: Bencher) {
    let corpus = load(FIXTURE).unwrap();
    bencher.bench_local(|| black_box(corpus.find_word(black_box("mem.+"), true).unwrap().len()));
}

/// Benchmark a tag-sequence lookup, discarding the listing
#[divan::bench]
fn lookup_tags(bencher: Bencher) {
    let corpus = load(FIXTURE).unwrap();
    bencher.bench_local(|| {
        black_box(lookup_c_to(&corpus, black_box("PRP VB"), &mut io::sink()).unwrap())
    });
}
