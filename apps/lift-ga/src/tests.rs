//! Tests for the search procedure.

#[cfg(test)]
mod operators {
    use lift_core::SimRng;

    use crate::search::crossover;

    #[test]
    fn crossover_swaps_middle_segment() {
        let a = [1, 1, 1, 1, 1];
        let b = [2, 2, 2, 2, 2];
        let (c1, c2) = crossover(&a, &b, (1, 3));
        assert_eq!(c1, [1, 2, 2, 1, 1]);
        assert_eq!(c2, [2, 1, 1, 2, 2]);
    }

    #[test]
    fn segment_can_swap_the_last_gene() {
        let a = [1, 1, 1, 1];
        let b = [2, 2, 2, 2];
        let mut rng = SimRng::new(5);
        let swapped = (0..200)
            .filter_map(|_| rng.segment(a.len()))
            .map(|cut| crossover(&a, &b, cut))
            .any(|(c1, c2)| c1[3] == 2 && c2[3] == 1);
        assert!(swapped);
        assert_eq!(crossover(&a, &b, (2, 4)), (vec![1, 1, 2, 2], vec![2, 2, 1, 1]));
    }

    #[test]
    fn empty_segment_copies_parents() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let (c1, c2) = crossover(&a, &b, (2, 2));
        assert_eq!(c1, a);
        assert_eq!(c2, b);
    }
}

#[cfg(test)]
mod search {
    use lift_core::SimConfig;
    use lift_scenario::Scenario;

    use crate::search::{Search, SearchParams};

    fn scenario() -> Scenario {
        Scenario::builder()
            .car("A", 2, 1.0, 1)
            .car("B", 2, 0.5, 1)
            .request("a", 0, 1, 4)
            .request("b", 2, 1, 3)
            .request("a", 8, 4, 2)
            .build()
            .unwrap()
    }

    fn params() -> SearchParams {
        SearchParams { population: 40, actions: 20, elite: 2, ..SearchParams::default() }
    }

    #[test]
    fn population_sorted_best_first_with_valid_genes() {
        let s = scenario();
        let search = Search::new(&s, SimConfig::default(), params(), 7);
        let pop = search.population();
        assert_eq!(pop.len(), 40);
        assert!(pop.windows(2).all(|w| w[0].fitness >= w[1].fitness));
        for c in pop {
            assert_eq!(c.genes.len(), 20);
            assert!(c.genes.iter().all(|&f| (1..=4).contains(&f)));
        }
    }

    #[test]
    fn elitism_never_loses_the_best() {
        let s = scenario();
        let mut search = Search::new(&s, SimConfig::default(), params(), 11);
        let mut last = search.best().fitness;
        for _ in 0..5 {
            search.advance();
            assert!(search.best().fitness >= last);
            last = search.best().fitness;
            assert_eq!(search.population().len(), 40);
            assert!(search.population().iter().filter(|c| c.elite).count() >= 2);
        }
        assert_eq!(search.generation(), 5);
    }

    #[test]
    fn same_seed_same_search() {
        let s = scenario();
        let mut a = Search::new(&s, SimConfig::default(), params(), 3);
        let mut b = Search::new(&s, SimConfig::default(), params(), 3);
        a.advance();
        b.advance();
        assert_eq!(a.best().genes, b.best().genes);
        assert_eq!(a.best().fitness.to_bits(), b.best().fitness.to_bits());
    }
}
