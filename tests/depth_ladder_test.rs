use market_depth::{DepthRow, DepthTableRenderer, Direction, DirectionTracker, Side, Snapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_snapshot(rng: &mut StdRng, levels: u32) -> Snapshot {
    let rows = (0..levels)
        .map(|level| {
            let bid = 1000.0 - level as f64 - rng.gen_range(0..5) as f64;
            let offer = 1001.0 + level as f64 + rng.gen_range(0..5) as f64;
            let bid_qty = if rng.gen_bool(0.1) { 0.0 } else { rng.gen_range(1..2000) as f64 };
            let offer_qty = if rng.gen_bool(0.1) { 0.0 } else { rng.gen_range(1..2000) as f64 };
            DepthRow::new(level, bid, bid_qty, offer, offer_qty)
        })
        .collect();
    Snapshot::new(rows)
}

#[test]
fn test_first_sighting_is_unknown() {
    let mut tracker = DirectionTracker::new(Side::Bid);
    for level in 0..20 {
        assert_eq!(tracker.update(level, 100.0 + level as f64), Direction::Unknown, "档位 {} 首次出现应该为Unknown", level);
    }
}

#[test]
fn test_two_update_directions() {
    let pairs = [(100.0, 101.0, Direction::Up), (100.0, 99.0, Direction::Down), (100.0, 100.0, Direction::Unchanged)];

    for (p1, p2, expected) in pairs {
        let mut tracker = DirectionTracker::new(Side::Offer);
        tracker.update(0, p1);
        assert_eq!(tracker.update(0, p2), expected, "{} -> {}", p1, p2);
    }
}

#[test]
fn test_repeated_price_commits_state() {
    let mut tracker = DirectionTracker::new(Side::Bid);
    tracker.update(0, 100.0);

    assert_eq!(tracker.update(0, 98.0), Direction::Down);
    assert_eq!(tracker.update(0, 98.0), Direction::Unchanged);
}

#[test]
fn test_width_fractions_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut renderer = DepthTableRenderer::new();

    for _ in 0..200 {
        let levels = rng.gen_range(0..12);
        let snapshot = random_snapshot(&mut rng, levels);
        let rows = renderer.render(&snapshot);

        for row in &rows {
            assert!((0.0..=1.0).contains(&row.bid_width_fraction));
            assert!((0.0..=1.0).contains(&row.offer_width_fraction));
        }

        // 持有最大挂单量的一侧宽度比例恰好为1
        if !rows.is_empty() {
            let max_fraction = rows
                .iter()
                .flat_map(|row| [row.bid_width_fraction, row.offer_width_fraction])
                .fold(0.0_f64, f64::max);
            let max_quantity = snapshot
                .rows()
                .iter()
                .flat_map(|row| [row.bid_quantity, row.offer_quantity])
                .fold(0.0_f64, f64::max);

            if max_quantity > 0.0 {
                assert_eq!(max_fraction, 1.0);
            } else {
                assert_eq!(max_fraction, 0.0);
            }
        }
    }
}

#[test]
fn test_all_zero_quantities_render_blank_bars() {
    let mut renderer = DepthTableRenderer::new();
    let snapshot = Snapshot::new(vec![
        DepthRow::new(0, 100.0, 0.0, 101.0, 0.0),
        DepthRow::new(1, 99.0, 0.0, 102.0, 0.0),
    ]);

    for row in renderer.render(&snapshot) {
        assert_eq!(row.bid_width_fraction, 0.0);
        assert_eq!(row.offer_width_fraction, 0.0);
    }
}

#[test]
fn test_output_in_ascending_level_order() {
    let mut renderer = DepthTableRenderer::new();
    let snapshot = Snapshot::new(vec![
        DepthRow::new(3, 97.0, 1.0, 104.0, 1.0),
        DepthRow::new(0, 100.0, 1.0, 101.0, 1.0),
        DepthRow::new(2, 98.0, 1.0, 103.0, 1.0),
        DepthRow::new(1, 99.0, 1.0, 102.0, 1.0),
    ]);

    let levels: Vec<u32> = renderer.render(&snapshot).iter().map(|row| row.level).collect();
    assert_eq!(levels, vec![0, 1, 2, 3]);
}

#[test]
fn test_state_follows_level_not_position() {
    let mut renderer = DepthTableRenderer::new();
    renderer.render(&Snapshot::new(vec![
        DepthRow::new(0, 100.0, 1.0, 101.0, 1.0),
        DepthRow::new(5, 90.0, 1.0, 111.0, 1.0),
    ]));

    // 档位0消失后档位5移到第一个位置，仍然与自己的上一次价格比较
    let rows = renderer.render(&Snapshot::new(vec![
        DepthRow::new(5, 91.0, 1.0, 110.0, 1.0),
        DepthRow::new(7, 80.0, 1.0, 120.0, 1.0),
    ]));

    assert_eq!(rows[0].level, 5);
    assert_eq!(rows[0].bid_direction, Direction::Up);
    assert_eq!(rows[0].offer_direction, Direction::Down);
    assert_eq!(rows[1].bid_direction, Direction::Unknown);
}

#[test]
fn test_first_render_scenario() {
    let mut renderer = DepthTableRenderer::new();
    let rows = renderer.render(&Snapshot::new(vec![DepthRow::new(0, 100.0, 50.0, 101.0, 30.0)]));

    assert_eq!(rows[0].bid_direction, Direction::Unknown);
    assert_eq!(rows[0].offer_direction, Direction::Unknown);
    assert_eq!(rows[0].bid_width_fraction, 1.0);
    assert_eq!(rows[0].offer_width_fraction, 0.6);

    let rows = renderer.render(&Snapshot::new(vec![DepthRow::new(0, 99.0, 50.0, 101.0, 30.0)]));
    assert_eq!(rows[0].bid_direction, Direction::Down);
    assert_eq!(rows[0].offer_direction, Direction::Unchanged);
}

#[test]
fn test_reappearing_level_is_unknown() {
    let mut renderer = DepthTableRenderer::new();
    let with_level_1 = |bid: f64| {
        Snapshot::new(vec![
            DepthRow::new(0, 100.0, 10.0, 101.0, 10.0),
            DepthRow::new(1, bid, 10.0, 102.0, 10.0),
        ])
    };

    renderer.render(&with_level_1(99.0));
    renderer.render(&Snapshot::new(vec![DepthRow::new(0, 100.0, 10.0, 101.0, 10.0)]));
    let rows = renderer.render(&with_level_1(95.0));

    assert_eq!(rows[1].bid_direction, Direction::Unknown);
    assert_eq!(rows[1].offer_direction, Direction::Unknown);
    assert_eq!(rows[0].bid_direction, Direction::Unchanged);
}

#[test]
fn test_render_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let first = random_snapshot(&mut rng, 8);
    let second = random_snapshot(&mut rng, 8);

    let mut a = DepthTableRenderer::new();
    let mut b = DepthTableRenderer::new();
    a.render(&first);
    b.render(&first);

    assert_eq!(a.render(&second), b.render(&second));
}

#[test]
fn test_tracker_size_bounded_by_visible_levels() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut renderer = DepthTableRenderer::new();

    for _ in 0..100 {
        let levels = rng.gen_range(1..20);
        renderer.render(&random_snapshot(&mut rng, levels));
        assert_eq!(renderer.tracked_levels().len(), levels as usize);
        assert_eq!(renderer.tracker(Side::Offer).len(), levels as usize);
    }
}
