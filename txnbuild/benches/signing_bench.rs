// Build, sign and encode benchmarks for the transaction pipeline.
//
// Covers the full build_sign_encode path at several operation counts, the
// network-separated hash on its own, and strict decoding of a signed envelope.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use txnbuild::crypto::Keypair;
use txnbuild::identity::SimpleAccount;
use txnbuild::transaction::{
    Asset, BuiltTransaction, Memo, Operation, Payment, Timebounds, TransactionBuilder,
};
use txnbuild::xdr::TransactionEnvelope;

const DESTINATION: &str = "GB7BDSZU2Y27LYNLALKKALB52WS2IZWYBDGY6EQBLEED3TJOCVMZRH7H";

fn payments(count: usize) -> Vec<Operation> {
    (0..count)
        .map(|i| Payment::new(DESTINATION, format!("{}.5", i + 1), Asset::native()).into())
        .collect()
}

fn built(keypair: &Keypair, ops: usize) -> BuiltTransaction {
    let mut source = SimpleAccount::new(keypair.address(), 42);
    TransactionBuilder::new(&mut source)
        .operations(payments(ops))
        .memo(Memo::Id(7))
        .timebounds(Timebounds::new(0, 1_700_000_000))
        .build()
        .unwrap()
}

fn bench_build_sign_encode(c: &mut Criterion) {
    let keypair = Keypair::random();
    let mut group = c.benchmark_group("pipeline/build_sign_encode");

    for ops in [1, 10, 100] {
        let operations = payments(ops);
        group.throughput(Throughput::Elements(ops as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ops), &operations, |b, operations| {
            b.iter(|| {
                let mut source = SimpleAccount::new(keypair.address(), 42);
                TransactionBuilder::new(&mut source)
                    .operations(operations.clone())
                    .timebounds(Timebounds::new(0, 1_700_000_000))
                    .build_sign_encode(&[&keypair])
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let keypair = Keypair::random();
    let tx = built(&keypair, 10);

    c.bench_function("pipeline/hash_10_ops", |b| {
        b.iter(|| tx.hash().unwrap());
    });
}

fn bench_decode(c: &mut Criterion) {
    let keypair = Keypair::random();
    let encoded = built(&keypair, 10)
        .sign(&keypair)
        .unwrap()
        .to_base64()
        .unwrap();

    c.bench_function("pipeline/decode_base64_10_ops", |b| {
        b.iter(|| TransactionEnvelope::from_base64(&encoded).unwrap());
    });
}

criterion_group!(benches, bench_build_sign_encode, bench_hash, bench_decode);
criterion_main!(benches);
