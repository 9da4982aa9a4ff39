use slither::{ChainSolver, NoOpStepObserver, SegmentChain, Vec2};

const BASE_SPEED: f32 = 150.0;
const MAX_SUB_DT: f32 = 1.0 / 240.0;

fn solver() -> ChainSolver<f32> {
    ChainSolver::new(BASE_SPEED, MAX_SUB_DT)
}

/// Tail at the origin, head at +x, each segment `spacing` apart.
fn straight_chain(count: usize, spacing: f32, rest_length: f32) -> SegmentChain<f32> {
    let mut chain = SegmentChain::single(Vec2::zero(), rest_length, 5.0);
    for i in 1..count {
        chain.append_at_head(Vec2::new(i as f32 * spacing, 0.0), rest_length);
    }
    chain
}

fn max_neighbor_distance(chain: &SegmentChain<f32>) -> f32 {
    let positions = chain.positions();
    positions
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .fold(0.0, f32::max)
}

#[test]
fn head_advances_by_speed_times_dt() {
    let mut chain = straight_chain(10, 2.0, 2.0);
    let start = chain.head().position;
    let stats = solver().step(&mut chain, Vec2::new(0.0, 1.0), 60.0, 0.1, &mut NoOpStepObserver);

    assert_eq!(stats.sub_steps, 24);
    let head = chain.head().position;
    assert!((head.x - start.x).abs() < 1e-4);
    assert!((head.y - start.y - 6.0).abs() < 1e-3, "head y moved {}", head.y - start.y);
}

#[test]
fn caught_up_segments_do_not_move() {
    let mut chain = straight_chain(5, 1.0, 2.0);
    let before = chain.positions();
    let moved = solver().relax(&mut chain, Vec2::new(1.0, 0.0), 0.0, 1.0 / 240.0);

    assert_eq!(moved, 0);
    assert_eq!(chain.positions(), before);
}

#[test]
fn single_pass_moves_at_most_delta_times_gain() {
    let mut chain = straight_chain(8, 5.0, 2.0);
    let before = chain.positions();
    let dt = 1.0 / 480.0;
    let moved = solver().relax(&mut chain, Vec2::zero(), BASE_SPEED, dt);
    let after = chain.positions();

    assert_eq!(moved, 7);
    for i in 0..before.len() - 1 {
        let delta = before[i + 1] - before[i];
        let step = before[i].distance(after[i]);
        assert!(
            step <= delta.length() * BASE_SPEED * dt + 1e-4,
            "segment {} moved {} for delta {}",
            i, step, delta.length(),
        );
    }
}

#[test]
fn correction_reads_previous_neighbor_position() {
    // Two segments: the head moves in the same pass, but the tail's
    // correction uses where the head was before the pass.
    let mut chain = straight_chain(2, 4.0, 2.0);
    let dt = 1.0 / 300.0;
    solver().relax(&mut chain, Vec2::new(1.0, 0.0), BASE_SPEED, dt);

    let tail = chain.tail().position;
    assert!((tail.x - 4.0 * BASE_SPEED * dt).abs() < 1e-5);
}

#[test]
fn stationary_head_converges_within_rest_length() {
    let mut chain = straight_chain(20, 5.0, 2.0);
    let head = chain.head().position;

    for _ in 0..240 {
        solver().step(&mut chain, Vec2::zero(), 0.0, 1.0 / 60.0, &mut NoOpStepObserver);
    }

    assert_eq!(chain.head().position, head);
    let max = max_neighbor_distance(&chain);
    assert!(max <= 2.0 + 1e-4, "max neighbor distance {}", max);
    let positions = chain.positions();
    for w in positions.windows(2) {
        assert!(w[0].distance(w[1]) > 0.0, "segments should never collapse onto each other");
    }
}

#[test]
fn scenario_head_moves_right_for_one_second() {
    // 50 segments of rest length 2 laid out along a vertical line.
    let mut chain: SegmentChain<f32> =
        SegmentChain::new(Vec2::new(250.0, 100.0), 50, 100.0, 10.0).unwrap();
    let start = chain.head().position;
    let dt = 1.0 / 60.0;

    for _ in 0..60 {
        solver().step(&mut chain, Vec2::new(1.0, 0.0), BASE_SPEED, dt, &mut NoOpStepObserver);
    }

    let head = chain.head().position;
    assert!((head.x - start.x - BASE_SPEED).abs() < 0.05, "head advanced {}", head.x - start.x);
    assert!((head.y - start.y).abs() < 1e-4);

    let tolerance = BASE_SPEED * MAX_SUB_DT;
    let max = max_neighbor_distance(&chain);
    assert!(max <= 2.0 + tolerance, "max neighbor distance {}", max);
}

#[test]
fn long_frame_stays_stable() {
    let mut chain = straight_chain(30, 2.0, 2.0);
    solver().step(&mut chain, Vec2::new(0.0, 1.0), BASE_SPEED, 0.5, &mut NoOpStepObserver);

    for segment in chain.iter() {
        assert!(segment.position.is_finite());
    }
    assert!(max_neighbor_distance(&chain) < 10.0);
}

#[test]
fn stall_past_sub_step_limit_stays_finite_and_recovers() {
    for &stall in &[15.0f32, 30.0] {
        let mut chain = straight_chain(30, 2.0, 2.0);
        let start = chain.head().position;
        let s = solver();
        assert_eq!(s.sub_steps(stall), slither::solver::MAX_SUB_STEPS);

        s.step(&mut chain, Vec2::new(1.0, 0.0), BASE_SPEED, stall, &mut NoOpStepObserver);

        for segment in chain.iter() {
            assert!(segment.position.is_finite(), "stall {} left {:?}", stall, segment.position);
        }
        let advanced = chain.head().position.x - start.x;
        assert!((advanced - BASE_SPEED * stall).abs() < 1.0, "head advanced {}", advanced);

        for _ in 0..600 {
            s.step(&mut chain, Vec2::new(1.0, 0.0), BASE_SPEED, 1.0 / 60.0, &mut NoOpStepObserver);
        }
        let max = max_neighbor_distance(&chain);
        assert!(max <= 2.0 + BASE_SPEED * MAX_SUB_DT + 1e-2, "stall {} max distance {}", stall, max);
    }
}

#[test]
fn oversized_pass_never_moves_past_neighbor() {
    let mut chain = straight_chain(2, 4.0, 2.0);
    solver().relax(&mut chain, Vec2::zero(), 0.0, 1.0);
    assert_eq!(chain.tail().position, Vec2::new(4.0, 0.0));
}

#[test]
fn invalid_dt_moves_nothing() {
    let mut chain = straight_chain(5, 3.0, 2.0);
    let before = chain.positions();
    let s = solver();
    s.step(&mut chain, Vec2::new(1.0, 0.0), BASE_SPEED, f32::NAN, &mut NoOpStepObserver);
    s.step(&mut chain, Vec2::new(1.0, 0.0), BASE_SPEED, -1.0, &mut NoOpStepObserver);
    assert_eq!(chain.positions(), before);
}

#[test]
fn sub_steps_are_bounded() {
    let s = solver();
    assert_eq!(s.sub_steps(0.0), 1);
    assert_eq!(s.sub_steps(1.0 / 240.0), 1);
    assert_eq!(s.sub_steps(1.0 / 60.0), 4);
    assert_eq!(s.sub_steps(1.0e9), slither::solver::MAX_SUB_STEPS);
}
