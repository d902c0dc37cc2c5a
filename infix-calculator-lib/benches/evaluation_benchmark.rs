use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use infix_calculator::interpreter::{evaluate, to_postfix};

const EXPRESSIONS: [&str; 5] = [
    "2 + 3",
    "8 - 3 - 2",
    "(5 + 3) * 12 / 3",
    "-(-----7+++1) + 3 * (10 / (12 / (3 + 1) - 1)) / (2 + 3) - 5 - 3 + (8)",
    "((((((((((1 + 2) * 3) - 4) / 5) + 6) * 7) - 8) / 9) + 10) * 11)",
];

fn evaluate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for expression in EXPRESSIONS {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(expression),
            expression,
            |bencher, expression| {
                bencher.iter(|| evaluate(expression));
            },
        );
    }
}

fn to_postfix_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_postfix");
    // Signed factors are not supported when converting to postfix.
    for expression in EXPRESSIONS.iter().filter(|expression| !expression.starts_with('-')) {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(expression),
            expression,
            |bencher, expression| {
                bencher.iter(|| to_postfix(expression));
            },
        );
    }
}

criterion_group!(benches, evaluate_benchmark, to_postfix_benchmark);
criterion_main!(benches);
