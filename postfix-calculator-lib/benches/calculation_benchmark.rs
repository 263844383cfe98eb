use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use postfix_calculator::calculator::calculate;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    let expressions = [
        "2+3*4".to_string(),
        "(2+3)*4".to_string(),
        "((1+2)*(3+4))/7".to_string(),
        "9*8*7*6/5+4-3*2+1".to_string(),
        "(((1+2)+3)+4)*((5-6)*(7-8))".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Elements(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| calculate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
