//! Integration tests for lift-sim.

use lift_core::{ElevatorId, Floor, RiderId, SimConfig, Tick};
use lift_scenario::Scenario;

use crate::{NoopObserver, Outcome, RunResult, SimBuilder, SimError, SimObserver, evaluate};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Single car `A` plus one rider travelling 1 → `to` at tick 0.
fn one_car(capacity: u32, speed: f64, start: Floor, to: Floor) -> Scenario {
    Scenario::builder()
        .car("A", capacity, speed, start)
        .request("r", 0, 1, to)
        .build()
        .unwrap()
}

fn run(scenario: &Scenario, candidate: &[Floor]) -> RunResult {
    evaluate(scenario, candidate, &SimConfig::default()).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Release(u64, RiderId, Floor),
    Board(u64, RiderId, ElevatorId, Floor),
    Alight(u64, RiderId, ElevatorId, Floor),
    Dispatch(u64, ElevatorId, Floor),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
    ends:   usize,
}

impl Recorder {
    fn alights(&self) -> Vec<(u64, Floor)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Alight(t, _, _, f) => Some((*t, *f)),
                _ => None,
            })
            .collect()
    }

    fn boards(&self) -> Vec<(RiderId, ElevatorId)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Board(_, r, c, _) => Some((*r, *c)),
                _ => None,
            })
            .collect()
    }
}

impl SimObserver for Recorder {
    fn on_release(&mut self, t: Tick, r: RiderId, f: Floor) { self.events.push(Event::Release(t.0, r, f)); }
    fn on_board(&mut self, t: Tick, r: RiderId, c: ElevatorId, f: Floor) { self.events.push(Event::Board(t.0, r, c, f)); }
    fn on_alight(&mut self, t: Tick, r: RiderId, c: ElevatorId, f: Floor) { self.events.push(Event::Alight(t.0, r, c, f)); }
    fn on_dispatch(&mut self, t: Tick, c: ElevatorId, f: Floor) { self.events.push(Event::Dispatch(t.0, c, f)); }
    fn on_sim_end(&mut self, _r: &RunResult) { self.ends += 1; }
}

// ── End-to-end runs ───────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn single_rider_three_floors() {
        let s = one_car(1, 1.0, 1, 3);
        let mut rec = Recorder::default();
        let result = SimBuilder::new(&s, &[3]).build().unwrap().run_observed(&mut rec).unwrap();

        assert_eq!(result.outcome, Outcome::Completed);
        assert_eq!(result.final_tick, Tick(2));
        assert_eq!(result.unfulfilled, 0);
        assert_eq!(result.used_actions, 1);
        assert!((result.fitness - (-0.002f64).exp()).abs() < 1e-12);
        assert!((result.fitness - 0.998002).abs() < 1e-6);

        assert_eq!(rec.events, vec![
            Event::Release(0, RiderId(0), 3),
            Event::Board(0, RiderId(0), ElevatorId(0), 1),
            Event::Dispatch(0, ElevatorId(0), 3),
            Event::Alight(2, RiderId(0), ElevatorId(0), 3),
        ]);
        assert_eq!(rec.ends, 1);
    }

    #[test]
    fn empty_candidate_times_out() {
        // Car parked on floor 3, rider waiting on floor 1, nothing to dispatch.
        let s = one_car(1, 1.0, 3, 3);
        let result = run(&s, &[]);

        assert_eq!(result.outcome, Outcome::TimedOut);
        assert_eq!(result.final_tick, Tick(2_500));
        assert_eq!(result.unfulfilled, 1);
        assert_eq!(result.used_actions, 0);
        let expected = (1.0 - 1.0 / 359.0) / 10_000.0;
        assert!((result.fitness - expected).abs() < 1e-15);
    }

    #[test]
    fn tick_budget_is_configurable() {
        let s = one_car(1, 1.0, 3, 3);
        let config = SimConfig::default().with_max_ticks(10);
        let result = evaluate(&s, &[], &config).unwrap();
        assert_eq!(result.final_tick, Tick(10));
        assert!(!result.is_complete());
    }

    #[test]
    fn fractional_speed_passes_through_transit() {
        let s = one_car(1, 0.5, 1, 3);
        let mut sim = SimBuilder::new(&s, &[3]).build().unwrap();

        sim.step(&mut NoopObserver).unwrap(); // tick 0: board, depart
        assert_eq!(sim.elevators()[0].floor(), None);
        assert_eq!(sim.riders()[0].floor(), None);

        sim.step(&mut NoopObserver).unwrap(); // tick 1: floor 2
        assert_eq!(sim.elevators()[0].floor(), Some(2));
        assert_eq!(sim.riders()[0].floor(), Some(2));

        let result = sim.run().unwrap();
        assert_eq!(result.final_tick, Tick(4));
        assert!(result.is_complete());
    }

    #[test]
    fn redispatch_to_own_floor_consumes_an_action() {
        let s = one_car(1, 1.0, 1, 2);
        let result = run(&s, &[1, 2]);
        assert_eq!(result.final_tick, Tick(2));
        assert_eq!(result.used_actions, 2);
    }

    #[test]
    fn unused_actions_are_not_counted() {
        // "3" carries the rider; "1" is taken in the completing tick.
        let s = one_car(1, 1.0, 1, 3);
        let result = run(&s, &[3, 1, 2, 1, 3]);
        assert_eq!(result.used_actions, 2);
    }

    #[test]
    fn cars_still_move_in_the_completing_tick() {
        let s = one_car(1, 1.0, 1, 3);
        let mut rec = Recorder::default();
        let mut sim = SimBuilder::new(&s, &[3, 1]).build().unwrap();
        while !sim.is_complete() {
            sim.step(&mut rec).unwrap();
        }
        assert_eq!(sim.tick(), Tick(2));
        assert_eq!(sim.elevators()[0].target(), 1);
        assert_eq!(sim.elevators()[0].floor(), Some(2));
        assert_eq!(sim.pending_actions(), 0);
        assert_eq!(rec.events.last(), Some(&Event::Dispatch(2, ElevatorId(0), 1)));

        let result = sim.result();
        assert!(result.is_complete());
        assert_eq!(result.final_tick, Tick(2));
        assert_eq!(result.used_actions, 2);
        assert!((result.fitness - (-0.002f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn late_release_waits_for_its_tick() {
        let s = Scenario::builder()
            .car("A", 1, 1.0, 1)
            .request("r", 5, 1, 2)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        // Car bounces 1 → 1 while nothing is pending, then carries the rider.
        let candidate = [1, 1, 1, 1, 1, 1, 2];
        let result = SimBuilder::new(&s, &candidate).build().unwrap().run_observed(&mut rec).unwrap();

        assert_eq!(rec.events[0], Event::Dispatch(0, ElevatorId(0), 1));
        assert!(rec.events.contains(&Event::Release(5, RiderId(0), 2)));
        assert!(rec.events.contains(&Event::Board(5, RiderId(0), ElevatorId(0), 1)));
        assert_eq!(rec.alights(), [(7, 2)]);
        assert_eq!(result.final_tick, Tick(7));
    }

    #[test]
    fn conflicting_requests_served_in_schedule_order() {
        let s = Scenario::builder()
            .car("A", 1, 1.0, 1)
            .request("r", 0, 1, 3)
            .request("r", 0, 1, 2)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let result = SimBuilder::new(&s, &[3, 2, 3, 2]).build().unwrap().run_observed(&mut rec).unwrap();

        // Passing floor 2 on the way up does not satisfy the queued "2":
        // it is only reachable after "3" completes.
        assert_eq!(rec.alights(), [(2, 3), (5, 2)]);
        assert_eq!(result.final_tick, Tick(5));
        assert_eq!(result.used_actions, 4);
        assert!(result.is_complete());
    }

    #[test]
    fn completion_requires_empty_timeline() {
        let s = Scenario::builder()
            .car("A", 1, 1.0, 1)
            .request("a", 0, 1, 2)
            .request("b", 2_000, 1, 2)
            .build()
            .unwrap();
        let result = evaluate(&s, &[2], &SimConfig::default().with_max_ticks(100)).unwrap();
        assert_eq!(result.outcome, Outcome::TimedOut);
        assert_eq!(result.unfulfilled, 0);
    }
}

// ── Multi-car behaviour ───────────────────────────────────────────────────────

#[cfg(test)]
mod bank_tests {
    use super::*;

    fn two_cars() -> Scenario {
        // B is listed first but is slower; A becomes ElevatorId(0).
        Scenario::builder()
            .car("B", 2, 0.5, 1)
            .car("A", 1, 1.0, 1)
            .request("r0", 0, 1, 2)
            .request("r1", 0, 1, 2)
            .build()
            .unwrap()
    }

    #[test]
    fn fastest_car_takes_first_action() {
        let s = two_cars();
        let mut sim = SimBuilder::new(&s, &[2, 3]).build().unwrap();
        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(sim.elevators()[0].speed(), 1.0);
        assert_eq!(sim.elevators()[0].target(), 2);
        assert_eq!(sim.elevators()[1].target(), 3);
        assert_eq!(sim.pending_actions(), 0);
    }

    #[test]
    fn boarding_prefers_fastest_non_full_car() {
        let s = two_cars();
        let mut rec = Recorder::default();
        SimBuilder::new(&s, &[2, 2]).build().unwrap().run_observed(&mut rec).unwrap();
        assert_eq!(rec.boards(), [(RiderId(0), ElevatorId(0)), (RiderId(1), ElevatorId(1))]);
    }

    #[test]
    fn capacity_never_exceeded() {
        let s = Scenario::builder()
            .car("A", 1, 1.0, 1)
            .request("r0", 0, 1, 2)
            .request("r1", 0, 1, 2)
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(&s, &[2, 1, 2]).build().unwrap();
        while !sim.is_complete() {
            sim.step(&mut NoopObserver).unwrap();
            for car in sim.elevators() {
                assert!(car.occupant_count() <= car.capacity());
            }
            for rider in sim.riders() {
                let carrying: Vec<_> = sim.elevators().iter().filter(|c| c.carries(rider.id())).collect();
                assert!(carrying.len() <= 1);
                assert_eq!(carrying.first().map(|c| c.id()), rider.riding());
            }
        }
        let result = sim.result();
        assert_eq!(result.final_tick, Tick(3));
        assert_eq!(result.used_actions, 3);
    }

    #[test]
    fn runs_are_deterministic() {
        let s = Scenario::builder()
            .car("A", 2, 1.0, 1)
            .car("B", 3, 0.5, 2)
            .car("C", 1, 0.25, 4)
            .request("a", 0, 1, 4)
            .request("b", 1, 1, 3)
            .request("c", 3, 1, 2)
            .request("a", 6, 4, 1)
            .build()
            .unwrap();
        let candidate = [4, 1, 3, 2, 1, 4, 1, 2, 3, 1, 4, 2, 1, 3];
        let first = run(&s, &candidate);
        let second = run(&s, &candidate);
        assert_eq!(first, second);
        assert_eq!(first.fitness.to_bits(), second.fitness.to_bits());
    }

    #[test]
    fn batch_matches_single_evaluations() {
        let s = two_cars();
        let candidates = vec![vec![2, 2], vec![], vec![1, 2, 1, 2]];
        let config = SimConfig::default().with_max_ticks(50);
        let batch = crate::evaluate_batch(&s, &candidates, &config);
        assert_eq!(batch.len(), 3);
        for (c, r) in candidates.iter().zip(batch) {
            assert_eq!(r.unwrap(), evaluate(&s, c, &config).unwrap());
        }
    }
}

// ── Defects and configuration ─────────────────────────────────────────────────

#[cfg(test)]
mod defect_tests {
    use super::*;
    use crate::Rider;

    #[test]
    fn target_below_ground_is_fatal() {
        let s = one_car(1, 1.0, 1, 3);
        let err = evaluate(&s, &[0], &SimConfig::default()).unwrap_err();
        assert_eq!(err, SimError::FloorOutOfRange {
            car:       ElevatorId(0),
            floor:     0,
            top_floor: 3,
            tick:      Tick(0),
        });
        assert!(err.is_defect());
    }

    #[test]
    fn overshooting_the_top_is_fatal() {
        // Speed 2 from floor 1 skips target 2 and lands on 3.
        let s = one_car(1, 2.0, 1, 2);
        let err = evaluate(&s, &[2], &SimConfig::default()).unwrap_err();
        assert!(matches!(err, SimError::FloorOutOfRange { floor: 3, top_floor: 2, .. }));
    }

    #[test]
    fn floor_change_without_a_car_rejected() {
        let mut rider = Rider::new(RiderId(4));
        let err = rider.set_floor(ElevatorId(0), Some(2)).unwrap_err();
        assert_eq!(err, SimError::InvalidLinkage { rider: RiderId(4), sender: ElevatorId(0), riding: None });
        assert_eq!(rider.floor(), Some(1));
    }

    #[test]
    fn floor_change_from_other_car_rejected() {
        let s = Scenario::builder()
            .car("A", 1, 1.0, 1)
            .car("B", 1, 0.5, 3)
            .request("r", 0, 1, 3)
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(&s, &[3]).build().unwrap();
        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(sim.riders()[0].riding(), Some(ElevatorId(0)));

        let mut rider = sim.riders()[0].clone();
        assert!(rider.set_floor(ElevatorId(1), Some(3)).is_err());
        assert!(rider.set_floor(ElevatorId(0), Some(3)).is_ok());
    }

    #[test]
    fn invalid_config_rejected_before_running() {
        let s = one_car(1, 1.0, 1, 3);
        let config = SimConfig::default().with_max_ticks(0);
        let err = SimBuilder::new(&s, &[3]).config(config).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
        assert!(!err.is_defect());
    }

    #[test]
    fn step_after_completion_is_noop() {
        let s = one_car(1, 1.0, 1, 2);
        let mut sim = SimBuilder::new(&s, &[2]).build().unwrap();
        while !sim.is_complete() {
            sim.step(&mut NoopObserver).unwrap();
        }
        let done = sim.result();
        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(sim.result(), done);
    }
}

// ── Fitness ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fitness_tests {
    use super::*;
    use crate::fitness;

    #[test]
    fn faster_completion_scores_higher() {
        let c = SimConfig::default();
        assert!(fitness(Tick(100), 0, &c) > fitness(Tick(101), 0, &c));
        assert_eq!(fitness(Tick(0), 0, &c), 1.0);
    }

    #[test]
    fn completion_beats_any_timeout() {
        let c = SimConfig::default();
        let slowest_completion = fitness(c.end_tick(), 0, &c);
        let best_timeout = fitness(c.end_tick(), 1, &c);
        assert!(slowest_completion > best_timeout);
    }

    #[test]
    fn fewer_unfulfilled_scores_higher() {
        let c = SimConfig::default();
        assert!(fitness(Tick(2_500), 3, &c) > fitness(Tick(2_500), 4, &c));
        assert_eq!(fitness(Tick(2_500), 359, &c), 0.0);
    }
}
