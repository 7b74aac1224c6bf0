//! Benchmarks for adorner arrange passes and mouse-down routing

use std::rc::Rc;

use astrelis_core::geometry::{Pos, Size};
use astrelis_design::adorner::{
    AdornedGeometry, Adorner, AdornerHandler, AdornerId, AdornerPanel, AdornerPanelId,
    RelativePlacement, placement,
};
use astrelis_design::{
    DesignItemId, DesignPanel, InputHandlingLayer, MouseButton, MouseButtonEvent,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

struct NoopHandler;

impl AdornerHandler for NoopHandler {
    fn on_mouse_down(
        &self,
        _panel: &mut DesignPanel,
        _target: (AdornerPanelId, AdornerId),
        event: &mut MouseButtonEvent,
    ) {
        event.handled = true;
    }
}

fn selection_panel(item: DesignItemId, handler: &Rc<NoopHandler>) -> AdornerPanel {
    let mut panel = AdornerPanel::new(item);
    panel.add(Adorner::new("frame", placement::fill_content()));
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
        panel.add(
            Adorner::new(
                "grip",
                RelativePlacement {
                    width_relative_to_desired_width: 1.0,
                    height_relative_to_desired_height: 1.0,
                    x_offset: x * 100.0 - 4.0,
                    y_offset: y * 50.0 - 4.0,
                    ..Default::default()
                }
                .into_placement(),
            )
            .with_desired_size(Size::new(8.0, 8.0))
            .with_input(InputHandlingLayer::Highest, handler.clone()),
        );
    }
    panel
}

fn bench_arrange(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrange_panel");

    for count in [4, 16, 64, 256] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut panel = AdornerPanel::new(DesignItemId(1));
            for _ in 0..count {
                panel.add(Adorner::new("frame", placement::fill_content()));
            }
            let mut width = 100.0;
            b.iter(|| {
                width += 1.0;
                let geometry = AdornedGeometry::new(Size::new(width, 50.0));
                black_box(panel.update_geometry(geometry).is_ok())
            });
        });
    }

    group.finish();
}

fn bench_mouse_down(c: &mut Criterion) {
    let mut group = c.benchmark_group("mouse_down_routing");
    let handler = Rc::new(NoopHandler);

    for count in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut panel = DesignPanel::default();
            for i in 0..count {
                let item = DesignItemId(i as u64);
                panel.adorners_mut().add(selection_panel(item, &handler));
                let geometry = AdornedGeometry::new(Size::new(100.0, 50.0)).with_offset(i as f64 * 120.0, 0.0);
                let _ = panel.update_adorned_geometry(item, geometry);
            }
            b.iter(|| {
                // Bottom-right grip of the first item.
                let mut event = MouseButtonEvent::down(MouseButton::Left, Pos::new(100.0, 50.0));
                black_box(panel.handle_mouse_down(&mut event))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_arrange, bench_mouse_down);
criterion_main!(benches);
