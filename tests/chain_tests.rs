use slither::{MotionError, SegmentChain, Vec2};

fn hops_from_tail_to_head(chain: &SegmentChain<f32>) -> usize {
    let mut hops = 0;
    let mut cursor = chain.tail_id();
    while let Some(next) = chain.get(cursor).and_then(|s| s.next()) {
        cursor = next;
        hops += 1;
    }
    assert_eq!(cursor, chain.head_id(), "walk should end at the head");
    hops
}

#[test]
fn chain_initial_layout() {
    let chain: SegmentChain<f32> =
        SegmentChain::new(Vec2::new(250.0, 100.0), 50, 100.0, 10.0).unwrap();
    assert_eq!(chain.len(), 50);
    assert_eq!(chain.thickness(), 10.0);
    assert_eq!(chain.tail().position, Vec2::new(250.0, 100.0));
    assert!((chain.head().position.y - 198.0).abs() < 1e-4);
    for segment in chain.iter() {
        assert!((segment.rest_length - 2.0).abs() < 1e-6);
        assert_eq!(segment.position.x, 250.0);
    }
}

#[test]
fn chain_structure_invariants() {
    let mut chain: SegmentChain<f32> = SegmentChain::new(Vec2::zero(), 5, 5.0, 1.0).unwrap();
    chain.append_at_head(Vec2::new(0.0, 6.0), 1.0);
    chain.append_at_tail(Vec2::new(0.0, -1.0), 1.0);
    chain.remove_at_tail().unwrap();

    assert!(chain.head().next().is_none());
    assert!(chain.head().is_head());
    assert_eq!(hops_from_tail_to_head(&chain), chain.len() - 1);
    assert_eq!(chain.iter().count(), chain.len());
    // Restartable
    assert_eq!(chain.iter().count(), chain.len());
}

#[test]
fn append_at_head_links_previous_head() {
    let mut chain: SegmentChain<f32> = SegmentChain::single(Vec2::zero(), 2.0, 1.0);
    let old_head = chain.head_id();
    let id = chain.append_at_head(Vec2::new(3.0, 0.0), 2.0);

    assert_eq!(chain.len(), 2);
    assert_eq!(chain.head_id(), id);
    assert_eq!(chain.get(old_head).unwrap().next(), Some(id));
    assert_eq!(chain.head().position, Vec2::new(3.0, 0.0));
}

#[test]
fn remove_at_tail_advances_tail() {
    let mut chain: SegmentChain<f32> = SegmentChain::new(Vec2::zero(), 3, 3.0, 1.0).unwrap();
    let second = chain.tail().next().unwrap();
    let removed = chain.remove_at_tail().unwrap();

    assert_eq!(removed.position, Vec2::zero());
    assert_eq!(chain.tail_id(), second);
    assert_eq!(chain.len(), 2);
}

#[test]
fn removing_last_segment_underflows() {
    let mut chain: SegmentChain<f32> = SegmentChain::new(Vec2::zero(), 2, 2.0, 1.0).unwrap();
    chain.remove_at_tail().unwrap();
    assert_eq!(chain.remove_at_tail(), Err(MotionError::ChainUnderflow { len: 1 }));
    assert_eq!(chain.len(), 1);
}

#[test]
fn invalid_chain_parameters_rejected() {
    let zero: Result<SegmentChain<f32>, _> = SegmentChain::new(Vec2::zero(), 0, 10.0, 1.0);
    assert_eq!(zero.unwrap_err(), MotionError::InvalidChain);
    let negative: Result<SegmentChain<f32>, _> = SegmentChain::new(Vec2::zero(), 4, -1.0, 1.0);
    assert!(negative.is_err());
    let nan: Result<SegmentChain<f32>, _> = SegmentChain::new(Vec2::zero(), 4, f32::NAN, 1.0);
    assert!(nan.is_err());
}

#[test]
fn views_are_indexed_from_the_head() {
    let chain: SegmentChain<f32> = SegmentChain::new(Vec2::zero(), 4, 4.0, 1.0).unwrap();
    let views: Vec<_> = chain.views().collect();
    assert_eq!(views.len(), 4);
    assert_eq!(views[0].index, 3);
    assert_eq!(views[3].index, 0);
    assert!(views[3].is_head);
    assert!(!views[0].is_head);
    assert_eq!(views[0].position, chain.tail().position);
}

#[test]
fn length_tracks_growth_and_shrink_sequence() {
    let mut chain: SegmentChain<f32> = SegmentChain::new(Vec2::zero(), 20, 40.0, 1.0).unwrap();
    let mut expected = 20usize;
    let mut seed = 12345u32;

    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        if (seed >> 16) % 3 == 0 {
            let tail = *chain.tail();
            for _ in 0..10 {
                chain.append_at_tail(tail.position, tail.rest_length);
            }
            expected += 10;
        } else {
            match chain.remove_at_tail() {
                Ok(_) => expected -= 1,
                Err(MotionError::ChainUnderflow { len }) => assert_eq!(len, 1),
                Err(e) => panic!("unexpected error {e}"),
            }
        }
        assert_eq!(chain.len(), expected);
        assert!(chain.len() >= 1);
        assert_eq!(chain.iter().count(), expected);
    }
}

#[test]
fn translate_moves_every_segment() {
    let mut chain: SegmentChain<f32> = SegmentChain::new(Vec2::zero(), 3, 3.0, 1.0).unwrap();
    let before = chain.positions();
    chain.translate(Vec2::new(5.0, -2.0));
    for (a, b) in before.iter().zip(chain.positions()) {
        assert_eq!(b, *a + Vec2::new(5.0, -2.0));
    }
}
