#![allow(missing_docs)]

use divan::{Bencher, black_box, counter::BytesCount};
use rand::{SeedableRng, rngs::StdRng};
use wordsnip::{
    CodeTable,
    SubwordEncoder,
    Vocabulary,
    codes::read_codes,
    encoders::DropoutRate,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static CODES: &str = "#version: 0.2
t h
th e</w>
e r
l o
lo w
low er</w>
e s
es t</w>
low est</w>
n e
ne w
i n
in g</w>
a n
an d</w>
o f</w>
";

static ENGLISH_LINES: &[&str] = &[
    "the lowest newer thing and the lower of the newest",
    "  a line with leading and trailing whitespace  ",
    "going, doing, and being: the nothing of everything",
    "another longer line where the words are mostly unseen by the codes table",
];

fn english_text() -> Vec<String> {
    ENGLISH_LINES
        .iter()
        .cycle()
        .take(200)
        .enumerate()
        .map(|(idx, line)| format!("{line} {idx}"))
        .collect()
}

fn codes() -> CodeTable {
    read_codes(CODES.as_bytes()).unwrap()
}

fn byte_count(lines: &[String]) -> BytesCount {
    BytesCount::new(lines.iter().map(String::len).sum::<usize>())
}

#[divan::bench]
fn process_lines_cold(bencher: Bencher) {
    let lines = english_text();
    let codes = codes();
    bencher
        .counter(byte_count(&lines))
        .with_inputs(|| SubwordEncoder::new(codes.clone(), Vocabulary::default()))
        .bench_values(|encoder| {
            for line in &lines {
                black_box(encoder.process_line(black_box(line)));
            }
        });
}

#[divan::bench]
fn process_lines_warm(bencher: Bencher) {
    let lines = english_text();
    let encoder = SubwordEncoder::new(codes(), Vocabulary::default());
    for line in &lines {
        encoder.process_line(line);
    }
    bencher.counter(byte_count(&lines)).bench(|| {
        for line in &lines {
            black_box(encoder.process_line(black_box(line)));
        }
    });
}

#[divan::bench(args = [0.1, 0.5])]
fn process_lines_dropout(
    bencher: Bencher,
    p: f64,
) {
    let lines = english_text();
    let encoder = SubwordEncoder::new(codes(), Vocabulary::default());
    let rate = DropoutRate::new(p).unwrap();
    bencher.counter(byte_count(&lines)).bench(|| {
        let mut rng = StdRng::seed_from_u64(7);
        for line in &lines {
            black_box(encoder.process_line_with_dropout(black_box(line), rate, &mut rng));
        }
    });
}
