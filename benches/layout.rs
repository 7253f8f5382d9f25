// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for snack bar layout.
//!
//! Measures the performance of:
//! - The height calculation alone
//! - Making a snack bar with an action (measurement + layout)

use criterion::{criterion_group, criterion_main, Criterion};
use snack_bar::ui::snack_bar::{
    DefaultStyle, DisplayDuration, FixedAdvanceMeasurer, Host, IconKind, Layout, LayoutInput,
    SnackBar, Style,
};
use std::hint::black_box;

const MESSAGE: &str = "Two lines with one action. One to two lines is preferable on mobile.";

fn bench_compute(c: &mut Criterion) {
    let style = Style::default();
    let input = LayoutInput {
        container_width: 375.0,
        message_width: 420.0,
        has_icon: true,
        action_width: Some(60.0),
    };

    c.bench_function("layout_compute", |b| {
        b.iter(|| black_box(Layout::compute(&style, black_box(input))));
    });
}

fn bench_make(c: &mut Criterion) {
    let host = Host::new(375.0);
    let mut measurer = FixedAdvanceMeasurer::default();

    c.bench_function("make_with_action", |b| {
        b.iter(|| {
            let snack: SnackBar<()> = SnackBar::make(
                &host,
                IconKind::Success,
                black_box(MESSAGE),
                DisplayDuration::SHORT,
                &DefaultStyle,
                &mut measurer,
            )
            .with_action("Undo", None, &mut measurer);
            black_box(snack.height())
        });
    });
}

criterion_group!(benches, bench_compute, bench_make);
criterion_main!(benches);
