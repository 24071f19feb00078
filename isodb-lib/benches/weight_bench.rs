use criterion::{Criterion, black_box, criterion_group, criterion_main};
use isodb::{IsotopeDb, atomic_weight_from_weight_percent};

fn bench_lookup_apis(c: &mut Criterion) {
    let db = IsotopeDb::seed();
    let ids = ["Sn", "sn", "SN", "tin"];

    c.bench_function("resolve_symbol_mixed_identifiers", |b| {
        b.iter(|| {
            for id in ids {
                black_box(db.resolve_symbol(black_box(id)).unwrap());
            }
        });
    });

    c.bench_function("atomic_weight_mixed_identifiers", |b| {
        b.iter(|| {
            for id in ids {
                black_box(db.atomic_weight(black_box(id)).unwrap());
            }
        });
    });
}

fn bench_weight_percent(c: &mut Criterion) {
    let masses = [238.0496, 239.0522, 240.0538, 241.0568, 242.0587];
    let percents = [15.0, 35.0, 15.0, 20.0, 15.0];
    let fractions = [0.15, 0.35, 0.15, 0.20, 0.15];

    c.bench_function("weight_percent_percent_branch", |b| {
        b.iter(|| {
            black_box(
                atomic_weight_from_weight_percent(black_box(&masses), black_box(&percents))
                    .unwrap(),
            );
        });
    });

    c.bench_function("weight_percent_fraction_branch", |b| {
        b.iter(|| {
            black_box(
                atomic_weight_from_weight_percent(black_box(&masses), black_box(&fractions))
                    .unwrap(),
            );
        });
    });
}

criterion_group!(benches, bench_lookup_apis, bench_weight_percent);
criterion_main!(benches);
