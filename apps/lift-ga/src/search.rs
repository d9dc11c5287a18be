//! Genetic search over candidate action sequences.
//!
//! A candidate is a fixed-length list of floor targets.  Each generation
//! keeps the top `elite` candidates unchanged and fills the rest of the
//! population with tournament-selected parents, double-point crossover and
//! swap mutation.  The population is kept sorted best-first.

use lift_core::{Floor, SimConfig, SimRng};
use lift_scenario::Scenario;
use lift_sim::evaluate_batch;

/// Search tunables.
#[derive(Clone, Debug)]
pub struct SearchParams {
    pub population:     usize,
    /// Length of every candidate.
    pub actions:        usize,
    pub elite:          usize,
    pub crossover_rate: f64,
    /// Probability that a child gets one swap mutation.
    pub mutation_rate:  f64,
    pub tournament:     usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population:     1_000,
            actions:        200,
            elite:          5,
            crossover_rate: 0.95,
            mutation_rate:  0.1,
            tournament:     2,
        }
    }
}

/// A scored candidate.
#[derive(Clone, Debug)]
pub struct Scored {
    pub genes:   Vec<Floor>,
    pub fitness: f64,
    /// Carried over unchanged from the previous generation.
    pub elite:   bool,
}

pub struct Search<'a> {
    scenario:   &'a Scenario,
    config:     SimConfig,
    params:     SearchParams,
    rng:        SimRng,
    population: Vec<Scored>,
    generation: u64,
}

impl<'a> Search<'a> {
    /// Seed a random population and score it.
    pub fn new(scenario: &'a Scenario, config: SimConfig, params: SearchParams, seed: u64) -> Self {
        let mut search = Self {
            scenario,
            config,
            params,
            rng: SimRng::new(seed),
            population: Vec::new(),
            generation: 0,
        };
        let candidates: Vec<Vec<Floor>> = (0..search.params.population)
            .map(|_| search.random_candidate())
            .collect();
        search.population = search.score(candidates);
        search.sort();
        search
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn best(&self) -> &Scored {
        &self.population[0]
    }

    pub fn population(&self) -> &[Scored] {
        &self.population
    }

    /// Replace the population with the next generation.
    pub fn advance(&mut self) {
        let elite = self.params.elite.min(self.population.len());
        let mut next: Vec<Scored> = self.population[..elite]
            .iter()
            .map(|s| Scored { elite: true, ..s.clone() })
            .collect();

        let wanted = self.params.population.saturating_sub(elite);
        let mut children: Vec<Vec<Floor>> = Vec::with_capacity(wanted + 1);
        while children.len() < wanted {
            let a = self.select().to_vec();
            let b = self.select().to_vec();
            let (mut c1, mut c2) = match self.rng.segment(a.len()) {
                Some(cut) if self.rng.gen_bool(self.params.crossover_rate) => crossover(&a, &b, cut),
                _ => (a, b),
            };
            self.mutate(&mut c1);
            self.mutate(&mut c2);
            children.push(c1);
            children.push(c2);
        }
        children.truncate(wanted);

        next.extend(self.score(children));
        self.population = next;
        self.sort();
        self.generation += 1;
    }

    // ── Operators ─────────────────────────────────────────────────────────

    fn random_candidate(&mut self) -> Vec<Floor> {
        let top = self.scenario.top_floor();
        (0..self.params.actions).map(|_| self.rng.gen_range(1..=top)).collect()
    }

    /// Tournament selection: the fittest of `tournament` random picks.
    fn select(&mut self) -> &[Floor] {
        let n = self.population.len();
        let mut best = self.rng.gen_range(0..n);
        for _ in 1..self.params.tournament.max(1) {
            let other = self.rng.gen_range(0..n);
            if self.population[other].fitness > self.population[best].fitness {
                best = other;
            }
        }
        &self.population[best].genes
    }

    fn mutate(&mut self, genes: &mut [Floor]) {
        if self.rng.gen_bool(self.params.mutation_rate) {
            if let Some((i, j)) = self.rng.index_pair(genes.len()) {
                genes.swap(i, j);
            }
        }
    }

    /// Score candidates in parallel.  A candidate that trips a simulation
    /// defect scores zero.
    fn score(&self, candidates: Vec<Vec<Floor>>) -> Vec<Scored> {
        let results = evaluate_batch(self.scenario, &candidates, &self.config);
        candidates
            .into_iter()
            .zip(results)
            .map(|(genes, result)| {
                let fitness = match result {
                    Ok(r) => r.fitness,
                    Err(e) => {
                        log::warn!("discarding candidate: {e}");
                        0.0
                    }
                };
                Scored { genes, fitness, elite: false }
            })
            .collect()
    }

    fn sort(&mut self) {
        // Stable: elites stay ahead of equally fit children.
        self.population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }
}

/// Double-point crossover: swap the genes in `lo..hi` between the parents.
pub fn crossover(a: &[Floor], b: &[Floor], (lo, hi): (usize, usize)) -> (Vec<Floor>, Vec<Floor>) {
    let mut c1 = a.to_vec();
    let mut c2 = b.to_vec();
    c1[lo..hi].copy_from_slice(&b[lo..hi]);
    c2[lo..hi].copy_from_slice(&a[lo..hi]);
    (c1, c2)
}
