use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formarte_booking::availability::FlowAvailability;
use formarte_booking::calendar::{render_month, CalendarMonth};
use formarte_booking::{Booking, BookingKind, BookingStatus};

const TIMES: [&str; 4] = ["17:00", "18:00", "19:00", "20:00"];

// Helper function to create a year's worth of bookings
fn create_bookings(count: usize) -> Vec<Booking> {
    (0..count)
        .map(|i| {
            let status = if i % 5 == 0 {
                BookingStatus::Cancelled
            } else {
                BookingStatus::Upcoming
            };
            Booking {
                id: i.to_string(),
                user_email: "guest@formarte.com".to_string(),
                kind: BookingKind::Psychological,
                service_title: "Sesión de Apoyo Psicológico".to_string(),
                date: format!("2024-{:02}-{:02}", (i / 112) % 12 + 1, (i / 4) % 28 + 1),
                time: TIMES[i % TIMES.len()].to_string(),
                tutor_name: None,
                status,
                price: 0,
            }
        })
        .collect()
}

fn times() -> Vec<String> {
    TIMES.iter().map(|t| t.to_string()).collect()
}

fn benchmark_flow_availability(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_availability");
    let times = times();

    for count in [0usize, 100, 1_000, 10_000] {
        let bookings = create_bookings(count);
        group.bench_function(format!("psychological_{}", count), |b| {
            b.iter(|| {
                FlowAvailability::compute(
                    black_box(BookingKind::Psychological),
                    black_box(&bookings),
                    black_box(&times),
                )
            })
        });
    }

    group.finish();
}

fn benchmark_render_month(c: &mut Criterion) {
    let bookings = create_bookings(1_000);
    let availability = FlowAvailability::compute(BookingKind::Psychological, &bookings, &times());
    let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    c.bench_function("render_month_march", |b| {
        b.iter(|| {
            let month = CalendarMonth::new(2024, 3).unwrap();
            render_month(
                black_box(month),
                black_box(today),
                black_box(&availability.disabled_dates),
            )
        })
    });
}

criterion_group!(benches, benchmark_flow_availability, benchmark_render_month);
criterion_main!(benches);
