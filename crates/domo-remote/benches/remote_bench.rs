//! Throughput of execute/undo/redo cycles on the remote control.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use domo_core::{Light, PowerOnCmd, shared};
use domo_remote::{RemoteConfig, RemoteControl};

fn bench_execute_undo_redo(c: &mut Criterion) {
    c.bench_function("execute_1000", |b| {
        b.iter(|| {
            let light = shared(Light::new("bench light"));
            let mut remote = RemoteControl::new(RemoteConfig::unlimited());
            for _ in 0..1000 {
                remote
                    .execute(Box::new(PowerOnCmd::new(light.clone())))
                    .unwrap();
            }
            black_box(remote.journal().len())
        });
    });

    c.bench_function("undo_redo_cycle_1000", |b| {
        b.iter(|| {
            let light = shared(Light::new("bench light"));
            let mut remote = RemoteControl::new(RemoteConfig::unlimited());
            for _ in 0..1000 {
                remote
                    .execute(Box::new(PowerOnCmd::new(light.clone())))
                    .unwrap();
            }
            while remote.undo().is_some() {}
            while remote.redo().is_some() {}
            black_box(remote.journal().len())
        });
    });
}

criterion_group!(benches, bench_execute_undo_redo);
criterion_main!(benches);
