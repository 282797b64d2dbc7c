//! Integration tests for partitioning and task dispatch

use proptest::prelude::*;
use recip_team::{Partition, SerialTeam, Team};

#[cfg(feature = "parallel")]
use recip_team::{RayonTeam, TeamConfig};

/// Fill each chunk with its partition index through the given team
fn tag_chunks<T: Team>(team: &T, len: usize, parts: usize) -> Vec<usize> {
    let mut tags = vec![usize::MAX; len];
    let partition = team.partition(len, parts);
    team.join_all(
        tags.chunks_mut(partition.chunk_len())
            .enumerate()
            .map(|(index, chunk)| move || chunk.fill(index)),
    );
    tags
}

#[test]
fn test_partition_covers_range() {
    proptest!(|(len in 0usize..10_000, parts in 1usize..64)| {
        let partition = Partition::contiguous(len, parts);
        let ranges: Vec<_> = partition.ranges().collect();

        prop_assert!(ranges.len() <= parts);
        prop_assert_eq!(ranges.len(), partition.count());

        let mut next = 0;
        for range in &ranges {
            prop_assert_eq!(range.start, next);
            prop_assert!(range.end > range.start);
            next = range.end;
        }
        prop_assert_eq!(next, len);
    });
}

#[test]
fn test_serial_team_writes_every_slot_once() {
    let tags = tag_chunks(&SerialTeam, 10, 4);
    assert_eq!(tags, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_rayon_team_matches_serial() {
    let team = RayonTeam::new(&TeamConfig::default().with_threads(4)).unwrap();
    for &(len, parts) in &[(0usize, 1usize), (1, 8), (100, 3), (1000, 8), (1000, 1000)] {
        assert_eq!(
            tag_chunks(&team, len, parts),
            tag_chunks(&SerialTeam, len, parts),
            "len={len}, parts={parts}"
        );
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_rayon_team_blocks_until_done() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    let team = RayonTeam::new(&TeamConfig::default().with_threads(2)).unwrap();
    let finished = AtomicUsize::new(0);
    team.join_all((0..6).map(|_| {
        let finished = &finished;
        move || {
            std::thread::sleep(Duration::from_millis(5));
            finished.fetch_add(1, Ordering::SeqCst);
        }
    }));
    assert_eq!(finished.load(Ordering::SeqCst), 6);
}

/// Dispatch to one shared team from several threads at once
fn dispatch_from_threads<T: Team>(team: &T) {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..3)
            .map(|offset| scope.spawn(move || tag_chunks(team, 50 + offset, 4)))
            .collect();
        for (offset, handle) in handles.into_iter().enumerate() {
            let tags = handle.join().unwrap();
            assert_eq!(tags, tag_chunks(&SerialTeam, 50 + offset, 4));
        }
    });
}

#[test]
fn test_serial_team_shared_across_threads() {
    dispatch_from_threads(&SerialTeam);
}

#[cfg(feature = "parallel")]
#[test]
fn test_rayon_team_shared_across_threads() {
    let team = RayonTeam::new(&TeamConfig::default().with_threads(2)).unwrap();
    dispatch_from_threads(&team);
}
