//! Tests for most-constrained cell selection and uniform random choice

#[cfg(test)]
mod tests {
    use mosaic::algorithm::option_set::OptionSet;
    use mosaic::algorithm::propagation::OptionSets;
    use mosaic::algorithm::selection::{
        RandomSelector, candidate_cells, least_options, select_cell, select_tile,
    };

    fn sets_with_counts(counts: &[usize], capacity: usize) -> OptionSets {
        counts
            .iter()
            .map(|&count| {
                let mut set = OptionSet::empty(capacity);
                for id in 0..count {
                    set.insert(id);
                }
                set
            })
            .collect::<Vec<_>>()
            .into()
    }

    // Tests empty sets are excluded from the minimum
    // Verified by including zero counts in the minimum
    #[test]
    fn test_least_options_skips_empty_sets() {
        let options = sets_with_counts(&[0, 3, 2, 0, 2, 4], 4);
        assert_eq!(least_options(&options), Some(2));
        assert_eq!(candidate_cells(&options), vec![2, 4]);
    }

    // Tests no candidates when every set is empty
    #[test]
    fn test_all_empty_has_no_candidates() {
        let options = sets_with_counts(&[0, 0, 0], 2);
        assert_eq!(least_options(&options), None);
        assert!(candidate_cells(&options).is_empty());

        let mut selector = RandomSelector::new(1);
        assert_eq!(select_cell(&options, &mut selector), None);
    }

    // Tests the same seed reproduces the same choices
    #[test]
    fn test_seeded_selector_is_deterministic() {
        let mut first = RandomSelector::new(42);
        let mut second = RandomSelector::new(42);

        let picks_first: Vec<_> = (0..50).map(|_| first.choose_index(7)).collect();
        let picks_second: Vec<_> = (0..50).map(|_| second.choose_index(7)).collect();

        assert_eq!(picks_first, picks_second);
        assert!(picks_first.iter().all(|pick| pick.is_some_and(|i| i < 7)));
    }

    #[test]
    fn test_choose_from_nothing() {
        let mut selector = RandomSelector::new(3);
        assert_eq!(selector.choose_index(0), None);
        assert_eq!(selector.choose_index(1), Some(0));
    }

    // Tests tied cells are chosen with roughly equal frequency
    // Verified by always picking the first candidate
    #[test]
    fn test_tie_break_is_uniform() {
        let options = sets_with_counts(&[3, 1, 2, 1, 0, 1, 1], 3);
        let mut selector = RandomSelector::new(2024);
        let mut tally = [0usize; 7];

        let samples = 8000;
        for _ in 0..samples {
            let picked = select_cell(&options, &mut selector).expect("candidates exist");
            if let Some(count) = tally.get_mut(picked) {
                *count += 1;
            }
        }

        for (index, &count) in tally.iter().enumerate() {
            if [1, 3, 5, 6].contains(&index) {
                assert!(
                    (1700..=2300).contains(&count),
                    "cell {index} chosen {count} times out of {samples}"
                );
            } else {
                assert_eq!(count, 0, "cell {index} is not a candidate");
            }
        }
    }

    // Tests tile choice covers every option uniformly and nothing else
    // Verified by choosing from the full tileset instead of the option set
    #[test]
    fn test_tile_choice_is_uniform_over_options() {
        let mut set = OptionSet::empty(6);
        set.insert(1);
        set.insert(4);
        set.insert(5);

        let mut selector = RandomSelector::new(11);
        let mut tally = [0usize; 6];
        for _ in 0..6000 {
            let tile = select_tile(&set, &mut selector).expect("non-empty options");
            if let Some(count) = tally.get_mut(tile) {
                *count += 1;
            }
        }

        assert_eq!(tally.first(), Some(&0));
        assert_eq!(tally.get(2), Some(&0));
        for tile in [1, 4, 5] {
            let count = tally.get(tile).copied().unwrap_or(0);
            assert!((1700..=2300).contains(&count), "tile {tile} chosen {count} times");
        }

        assert_eq!(select_tile(&OptionSet::empty(6), &mut selector), None);
    }
}
