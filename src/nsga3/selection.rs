//! Environmental selection: front truncation plus reference-point niching.
//!
//! Decides which subset of a too-large candidate pool survives into the
//! next generation. Whole Pareto fronts are admitted in rank order while
//! they fit; the first front that would overflow the target — the boundary
//! front — is partially admitted through a frequency-balanced niching fill
//! that repeatedly serves the least-used reference direction.
//!
//! The procedure is a pure transformation of (ranked candidates, reference
//! directions, random source) into the next population: every derived
//! quantity — ranks, normalized objectives, niche assignments, frequencies,
//! ideal/nadir points — is recomputed here and discarded on return.
//!
//! # References
//!
//! - Deb & Jain (2014), "An Evolutionary Many-Objective Optimization
//!   Algorithm Using Reference-Point-Based Nondominated Sorting Approach,
//!   Part I", Algorithm 1 (generation t) and Algorithm 4 (niching)

use rand::Rng;

use super::associate::associate;
use super::normalize::normalize;
use super::ranking::non_dominated_sort;
use super::types::Solution;

/// Selects exactly `target_size` survivors from a candidate population.
///
/// Ranks the candidates with the non-dominated sorting collaborator, admits
/// whole fronts while they fit, and fills the remaining slots from the
/// boundary front via reference-point niching. Solutions of ranks beyond
/// the boundary front are dropped permanently.
///
/// If the population holds at most `target_size` candidates, every one
/// survives and niching is skipped entirely.
///
/// The returned population is ordered by ascending rank, ties broken by
/// admission order. Each survivor carries its freshly assigned `rank`,
/// `niche` and `niche_distance`.
///
/// Randomness is consumed only by the niching tie-breaks, from the single
/// caller-supplied source: with a fixed `rng` and fixed input order the
/// result is fully deterministic.
///
/// # Panics
///
/// Panics on caller bugs: an empty population, an empty direction set, or a
/// zero target size.
pub fn environmental_selection<G, R: Rng>(
    population: Vec<Solution<G>>,
    directions: &[Vec<f64>],
    target_size: usize,
    rng: &mut R,
) -> Vec<Solution<G>> {
    assert!(target_size > 0, "target_size must be positive");
    assert!(!population.is_empty(), "cannot select from an empty population");
    assert!(!directions.is_empty(), "reference direction set must not be empty");

    let objectives: Vec<Vec<f64>> = population.iter().map(|s| s.objectives.clone()).collect();
    let sorted = non_dominated_sort(&objectives);

    let mut population = population;
    for (solution, &rank) in population.iter_mut().zip(&sorted.ranks) {
        solution.rank = rank;
    }

    if population.len() <= target_size {
        // Everyone survives; stable sort keeps insertion order within a rank.
        population.sort_by_key(|s| s.rank);
        return population;
    }

    // Front truncation: admit whole fronts while they fit. The first front
    // that would overflow the target is the boundary front; later ranks are
    // dropped.
    let mut admitted: Vec<usize> = Vec::with_capacity(target_size);
    let mut boundary: Vec<usize> = Vec::new();
    for front in &sorted.fronts {
        if admitted.len() + front.len() <= target_size {
            admitted.extend_from_slice(front);
        } else {
            boundary = front.clone();
            break;
        }
    }

    let n_admitted = admitted.len();
    let remaining = target_size - n_admitted;

    // Gather the truncated set (admitted fronts in rank order, then the
    // boundary front), taking each solution out of its original slot.
    let mut slots: Vec<Option<Solution<G>>> = population.into_iter().map(Some).collect();
    let mut survivors: Vec<Solution<G>> = Vec::with_capacity(n_admitted + boundary.len());
    for &i in admitted.iter().chain(&boundary) {
        survivors.push(slots[i].take().expect("front indices are unique"));
    }

    if remaining == 0 {
        survivors.truncate(n_admitted);
        return survivors;
    }
    assert!(
        boundary.len() >= remaining,
        "boundary front ({} candidates) cannot fill {} remaining slots",
        boundary.len(),
        remaining
    );

    // Normalization and association are generation-local, computed over the
    // truncated set only. Boundary solutions are associated but do not
    // count toward niche frequencies.
    let normalized = normalize(&survivors);
    let mut association = associate(&normalized, directions, n_admitted);
    for (solution, (&niche, &dist)) in survivors
        .iter_mut()
        .zip(association.niche.iter().zip(&association.distance))
    {
        solution.niche = niche;
        solution.niche_distance = dist;
    }

    let chosen = niche_fill(
        &association.niche[n_admitted..],
        &association.distance[n_admitted..],
        &mut association.frequency,
        remaining,
        rng,
    );

    let mut boundary_slots: Vec<Option<Solution<G>>> =
        survivors.split_off(n_admitted).into_iter().map(Some).collect();
    for index in chosen {
        survivors.push(
            boundary_slots[index]
                .take()
                .expect("niching admits each boundary candidate once"),
        );
    }
    survivors
}

/// Niching fill over the boundary front.
///
/// `boundary_niche` and `boundary_distance` are index-aligned with the
/// boundary front; `frequency` counts already-admitted solutions per
/// direction and is updated in place as admissions happen. Returns the
/// indices of the admitted boundary candidates, in admission order.
///
/// Loop, until `remaining` admissions are made:
/// 1. Find the minimum frequency among directions still available.
/// 2. Draw one direction uniformly at random among those at the minimum.
/// 3. A direction with no boundary candidates left is marked unavailable
///    and excluded from future searches, without consuming a slot.
/// 4. An empty niche (frequency 0) admits its closest-aligned candidate
///    deterministically; an occupied niche admits uniformly at random.
fn niche_fill<R: Rng>(
    boundary_niche: &[usize],
    boundary_distance: &[f64],
    frequency: &mut [usize],
    remaining: usize,
    rng: &mut R,
) -> Vec<usize> {
    let n_directions = frequency.len();

    // Per-direction pools of boundary candidates still up for admission.
    let mut pools: Vec<Vec<usize>> = vec![Vec::new(); n_directions];
    for (i, &niche) in boundary_niche.iter().enumerate() {
        pools[niche].push(i);
    }

    let mut available = vec![true; n_directions];
    let mut admitted = Vec::with_capacity(remaining);

    while admitted.len() < remaining {
        let min_frequency = (0..n_directions)
            .filter(|&d| available[d])
            .map(|d| frequency[d])
            .min()
            .expect("boundary front holds enough candidates to fill the remaining slots");

        let tied: Vec<usize> = (0..n_directions)
            .filter(|&d| available[d] && frequency[d] == min_frequency)
            .collect();
        let direction = if tied.len() == 1 {
            tied[0]
        } else {
            tied[rng.random_range(0..tied.len())]
        };

        let pool = &mut pools[direction];
        if pool.is_empty() {
            available[direction] = false;
            continue;
        }

        let position = if frequency[direction] == 0 {
            // Empty niche: the candidate best aligned with the direction,
            // deterministically.
            let mut best = 0;
            for (p, &candidate) in pool.iter().enumerate().skip(1) {
                if boundary_distance[candidate] < boundary_distance[pool[best]] {
                    best = p;
                }
            }
            best
        } else {
            rng.random_range(0..pool.len())
        };

        let index = pool.swap_remove(position);
        frequency[direction] += 1;
        admitted.push(index);
    }

    admitted
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::reference::simplex_lattice;
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solutions(objectives: &[Vec<f64>]) -> Vec<Solution<usize>> {
        objectives
            .iter()
            .enumerate()
            .map(|(i, o)| Solution::new(i, o.clone()))
            .collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_small_population_survives_whole() {
        let pop = solutions(&[vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]]);
        let directions = simplex_lattice(2, 4);
        let result = environmental_selection(pop, &directions, 10, &mut rng());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_small_population_reordered_by_rank() {
        let pop = solutions(&[
            vec![4.0, 4.0], // rank 1
            vec![1.0, 5.0], // rank 0
            vec![3.0, 3.0], // rank 0
            vec![6.0, 6.0], // rank 2
        ]);
        let directions = simplex_lattice(2, 4);
        let result = environmental_selection(pop, &directions, 10, &mut rng());
        let ranks: Vec<usize> = result.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![0, 0, 1, 2]);
        // Insertion order preserved inside rank 0
        let genomes: Vec<usize> = result.iter().map(|s| s.genome).collect();
        assert_eq!(genomes, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_returns_exactly_target_size() {
        let pop = solutions(&[
            vec![1.0, 9.0],
            vec![2.0, 7.0],
            vec![4.0, 4.0],
            vec![7.0, 2.0],
            vec![9.0, 1.0],
            vec![3.0, 8.0],
            vec![8.0, 3.0],
            vec![5.0, 5.0],
        ]);
        let directions = simplex_lattice(2, 6);
        let result = environmental_selection(pop, &directions, 5, &mut rng());
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_survivor_ranks_are_a_prefix() {
        // Two clean fronts of 4; target 6 → all of front 0 plus 2 of front 1.
        let pop = solutions(&[
            vec![1.0, 8.0],
            vec![3.0, 5.0],
            vec![5.0, 3.0],
            vec![8.0, 1.0],
            vec![2.0, 9.0],
            vec![4.0, 6.0],
            vec![6.0, 4.0],
            vec![9.0, 2.0],
        ]);
        let directions = simplex_lattice(2, 6);
        let result = environmental_selection(pop, &directions, 6, &mut rng());
        assert_eq!(result.len(), 6);
        assert_eq!(result.iter().filter(|s| s.rank == 0).count(), 4);
        assert_eq!(result.iter().filter(|s| s.rank == 1).count(), 2);
        // Rank order with boundary admissions last
        let ranks: Vec<usize> = result.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_dominance_chain_truncates_to_best_ranks() {
        // Ten solutions at ten distinct ranks, three evenly spaced
        // directions, target 5: the five singleton fronts 0..4 fit whole,
        // so truncation alone decides and ranks 5..9 are dropped.
        let objs: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, i as f64]).collect();
        let pop = solutions(&objs);
        let directions = simplex_lattice(2, 2);
        let result = environmental_selection(pop, &directions, 5, &mut rng());
        assert_eq!(result.len(), 5);
        let ranks: Vec<usize> = result.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_front_overflow_drops_one() {
        // Six mutually non-dominated solutions, target 5: the whole front
        // is the boundary front and niching drops exactly one.
        let pop = solutions(&[
            vec![0.0, 6.0],
            vec![1.0, 5.0],
            vec![2.0, 4.0],
            vec![4.0, 2.0],
            vec![5.0, 1.0],
            vec![6.0, 0.0],
        ]);
        let directions = simplex_lattice(2, 2);
        let result = environmental_selection(pop, &directions, 5, &mut rng());
        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|s| s.rank == 0));
    }

    #[test]
    fn test_exact_fit_skips_niching() {
        // Front 0 has 3, front 1 has 2, target 5: whole fronts fit exactly
        // and the rank-2 solution is dropped without any niching.
        let pop = solutions(&[
            vec![1.0, 5.0],
            vec![3.0, 3.0],
            vec![5.0, 1.0],
            vec![4.0, 4.0],
            vec![2.0, 6.0],
            vec![9.0, 9.0],
        ]);
        let directions = simplex_lattice(2, 4);
        let result = environmental_selection(pop, &directions, 5, &mut rng());
        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|s| s.rank <= 1));
    }

    #[test]
    fn test_empty_niche_prefers_best_aligned_candidate() {
        // One reference direction, boundary front of four rank-0 solutions
        // at known distances, two slots. The niche starts empty, so the
        // first admission is the closest-aligned candidate, picked
        // deterministically; the second is a random draw among the rest.
        //
        // Objectives are built so the perpendicular distances to the
        // diagonal direction order as 0.1 < 0.2 < 0.5 < 0.9 with genome 0
        // closest.
        // All points sit on x + y = 1, so the set is mutually
        // non-dominated and normalization is the identity map here.
        let d = |offset: f64| vec![0.5 + offset, 0.5 - offset];
        let pop = solutions(&[d(0.07), d(0.35), d(0.14), d(0.45), vec![1.0, 0.0], vec![0.0, 1.0]]);
        let directions = vec![vec![1.0, 1.0]];
        let result = environmental_selection(pop, &directions, 3, &mut rng());
        assert_eq!(result.len(), 3);
        // All six are mutually non-dominated, so all three survivors come
        // from the niching loop. The very first admission must be the
        // smallest-distance candidate: genome 0.
        assert_eq!(result[0].genome, 0);
    }

    #[test]
    fn test_niche_frequency_increments_match_admissions() {
        let pop = solutions(&[
            vec![0.0, 6.0],
            vec![1.0, 5.0],
            vec![2.0, 4.0],
            vec![4.0, 2.0],
            vec![5.0, 1.0],
            vec![6.0, 0.0],
        ]);
        // All rank 0 → zero admitted fronts, so every survivor is a
        // boundary admission and each one increments a frequency by 1.
        let normalized = normalize(&pop);
        let directions = simplex_lattice(2, 2);
        let mut association = associate(&normalized, &directions, 0);
        let before: usize = association.frequency.iter().sum();
        let chosen = niche_fill(
            &association.niche,
            &association.distance,
            &mut association.frequency,
            4,
            &mut rng(),
        );
        let after: usize = association.frequency.iter().sum();
        assert_eq!(chosen.len(), 4);
        assert_eq!(after - before, 4);
    }

    #[test]
    fn test_exhausted_direction_is_skipped_without_consuming_slot() {
        // Three directions but every boundary candidate sits in niche 1.
        // Directions 0 and 2 are repeatedly drawn as least-used, found
        // empty, marked unavailable — the loop must still terminate with
        // the right count.
        let boundary_niche = vec![1, 1, 1, 1];
        let boundary_distance = vec![0.4, 0.1, 0.3, 0.2];
        let mut frequency = vec![0, 0, 0];
        let chosen = niche_fill(&boundary_niche, &boundary_distance, &mut frequency, 3, &mut rng());
        assert_eq!(chosen.len(), 3);
        // First admission into the empty niche is the closest candidate.
        assert_eq!(chosen[0], 1);
        assert_eq!(frequency, vec![0, 3, 0]);
    }

    #[test]
    fn test_occupied_niche_draws_randomly() {
        // Single direction, frequency already 1: admissions are random
        // draws, not distance-ordered. Over many seeds every candidate
        // must get picked first at least once.
        let boundary_niche = vec![0, 0, 0, 0];
        let boundary_distance = vec![0.1, 0.5, 0.2, 0.9];
        let mut seen = [false; 4];
        for seed in 0..64 {
            let mut frequency = vec![1];
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = niche_fill(&boundary_niche, &boundary_distance, &mut frequency, 1, &mut rng);
            seen[chosen[0]] = true;
        }
        assert!(seen.iter().all(|&s| s), "random draw never picked some candidate: {seen:?}");
    }

    #[test]
    fn test_deterministic_with_fixed_seed() {
        let objs: Vec<Vec<f64>> = (0..20)
            .map(|i| {
                let t = f64::from(i) / 19.0;
                vec![t, 1.0 - t, (t - 0.5).abs()]
            })
            .collect();
        let directions = simplex_lattice(3, 4);

        let run = || {
            let mut rng = StdRng::seed_from_u64(7);
            environmental_selection(solutions(&objs), &directions, 8, &mut rng)
                .into_iter()
                .map(|s| s.genome)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    #[should_panic(expected = "empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Solution<usize>> = vec![];
        environmental_selection(pop, &simplex_lattice(2, 2), 5, &mut rng());
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_empty_directions_panics() {
        let pop = solutions(&[vec![1.0, 2.0]]);
        environmental_selection(pop, &[], 1, &mut rng());
    }

    proptest! {
        #[test]
        fn prop_selection_returns_exact_target(
            objs in prop::collection::vec(prop::collection::vec(0.0f64..10.0, 3), 12..48),
            target in 1usize..12,
            seed in 0u64..256,
        ) {
            let pop = solutions(&objs);
            let directions = simplex_lattice(3, 4);
            let mut rng = StdRng::seed_from_u64(seed);
            let result = environmental_selection(pop, &directions, target, &mut rng);
            prop_assert_eq!(result.len(), target);
        }

        #[test]
        fn prop_survivor_ranks_never_exceed_boundary(
            objs in prop::collection::vec(prop::collection::vec(0.0f64..10.0, 2), 12..40),
            seed in 0u64..256,
        ) {
            let target = 8;
            let pop = solutions(&objs);
            let directions = simplex_lattice(2, 6);
            let mut rng = StdRng::seed_from_u64(seed);
            let result = environmental_selection(pop, &directions, target, &mut rng);
            let max_rank = result.iter().map(|s| s.rank).max().unwrap();
            // Every survivor of a rank below the boundary front implies the
            // whole front survived: counts per rank must be exhaustive for
            // all ranks below the maximum surviving rank.
            let sorted = non_dominated_sort(&objs);
            for rank in 0..max_rank {
                let front_size = sorted.fronts[rank].len();
                let survived = result.iter().filter(|s| s.rank == rank).count();
                prop_assert_eq!(survived, front_size);
            }
        }
    }
}
