use slither::{
    ChainConfig, ChainSolver, InputKind, InputSnapshot, MotionConfig, NoOpStepObserver,
    SegmentChain, Simulation, Vec2, ZoomRequest,
};

fn scripted_input(frame: usize) -> InputSnapshot<f32> {
    let angle = frame as f32 * 0.05;
    InputSnapshot::idle(InputKind::Pointer)
        .with_move(Vec2::new(libm::cosf(angle), libm::sinf(angle)))
        .with_growth(frame % 90 == 0)
        .with_boost(frame % 200 < 40)
        .with_zoom(ZoomRequest::Focus(frame % 120 > 60))
}

#[test]
fn solver_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let mut chain: SegmentChain<f32> =
            SegmentChain::new(Vec2::new(250.0, 100.0), 50, 100.0, 10.0).unwrap();
        let solver = ChainSolver::new(150.0, 1.0 / 240.0);
        for _ in 0..60 {
            solver.step(&mut chain, Vec2::new(1.0, 0.0), 150.0, 1.0 / 60.0, &mut NoOpStepObserver);
        }
        chain.positions()
    }).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn simulation_deterministic() {
    let half = Vec2::new(250.0f32, 250.0);
    let results: Vec<_> = (0..5).map(|_| {
        let mut sim = Simulation::new(&ChainConfig::default(), MotionConfig::new()).unwrap();
        for frame in 0..600 {
            sim.step(&scripted_input(frame), 1.0 / 60.0, half, &mut NoOpStepObserver).unwrap();
        }
        (sim.chain().positions(), sim.camera())
    }).collect();

    for (positions, camera) in &results[1..] {
        assert_eq!(positions.len(), results[0].0.len());
        for (a, b) in results[0].0.iter().zip(positions.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
        assert_eq!(results[0].1, *camera);
    }
}
