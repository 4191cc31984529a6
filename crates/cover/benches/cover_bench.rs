use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use cover::{builtin, builtin_licenses, Options};

fn bench_cover(c: &mut Criterion) {
    let mit = builtin_licenses()
        .into_iter()
        .find(|l| l.name == "MIT")
        .expect("MIT template")
        .text;

    let mut group = c.benchmark_group("cover");

    let inputs = [
        ("mit_verbatim", mit.clone()),
        ("mit_twice", format!("{mit}\n\n{mit}")),
        (
            "url_only",
            "See https://opensource.org/licenses/MIT for terms.".to_string(),
        ),
        ("no_match", "these words resemble no known license text ".repeat(40)),
    ];

    for (name, input) in &inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(*name, |b| {
            b.iter(|| builtin().cover(black_box(input.as_bytes()), Options::default()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cover);
criterion_main!(benches);
