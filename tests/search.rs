//! End-to-end properties of the balancing search.

use proptest::prelude::*;
use u_balance::instance::TaskGenerator;
use u_balance::tabu::{Eviction, Step, TabuConfig, TabuSearch};
use u_balance::{
    fitness, format_result, initial_state, neighbor_count, neighbors, tabu_search, State,
    TabuRunner,
};

const DEMO_TASKS: [u64; 20] = [6, 4, 5, 6, 7, 8, 5, 6, 7, 9, 12, 5, 9, 34, 11, 2, 3, 4, 6, 21];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assignment() -> impl Strategy<Value = State> {
    prop::collection::vec(prop::collection::vec(1u64..40, 0..5), 1..5)
        .prop_map(|processors| State::from_assignment(processors).unwrap())
}

fn balanced(state: &State) -> bool {
    let p = state.processor_count() as u64;
    state.loads().iter().all(|&load| load * p == state.total_load())
}

#[test]
fn test_demo_instance_improves() {
    init_logger();
    let initial = initial_state(4, &DEMO_TASKS).unwrap();
    let best = tabu_search(4, &DEMO_TASKS, 1000, 100).unwrap();

    assert_eq!(fitness(&initial), 255.0);
    assert!(fitness(&best) < fitness(&initial));
    assert_eq!(best.task_multiset(), initial.task_multiset());
    assert_eq!(best.processor_count(), 4);
}

#[test]
fn test_demo_instance_reaches_known_assignment() {
    init_logger();
    for eviction in [Eviction::Oldest, Eviction::Newest] {
        let config = TabuConfig::default().with_eviction(eviction);
        let best = TabuRunner::run(4, &DEMO_TASKS, &config).unwrap().best;

        assert_eq!(best.tasks(0), &[2, 4, 4, 5, 5, 5, 6, 6, 6], "{eviction:?}");
        assert_eq!(best.tasks(1), &[8, 34], "{eviction:?}");
        assert_eq!(best.tasks(2), &[9, 12, 21], "{eviction:?}");
        assert_eq!(best.tasks(3), &[3, 6, 7, 7, 9, 11], "{eviction:?}");
        assert_eq!(best.loads(), vec![43, 42, 42, 43]);
        assert_eq!(fitness(&best), 2.0);
        assert!(format_result(&best).ends_with("\n\ndelta: 2.0"));
    }
}

#[test]
fn test_demo_instance_is_deterministic() {
    init_logger();
    let config = TabuConfig::default().with_max_iterations(300);
    let first = TabuRunner::run(4, &DEMO_TASKS, &config).unwrap();
    let second = TabuRunner::run(4, &DEMO_TASKS, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(format_result(&first.best), format_result(&second.best));
}

#[test]
fn test_format_result_layout() {
    let best = tabu_search(4, &DEMO_TASKS, 200, 100).unwrap();
    let text = format_result(&best);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    for (id, line) in lines.iter().take(4).enumerate() {
        assert!(line.starts_with(&format!("{id}\t|\t[")), "bad line {line:?}");
        assert!(line.ends_with(&format!("\t->\t{}", best.load(id))));
    }
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], format!("delta: {:?}", fitness(&best)));
}

#[test]
fn test_generated_instance_bounded_and_monotonic() {
    init_logger();
    let tasks = TaskGenerator::new(11).generate(25);
    let config = TabuConfig::default().with_max_iterations(150).with_max_size(12);
    let mut search = TabuSearch::new(5, &tasks, config).unwrap();

    let mut previous = search.best_fitness();
    while search.step().unwrap() == Step::Advanced {
        assert!(search.tabu_list().len() <= 12);
        assert!(search.best_fitness() <= previous);
        assert!(search.best_fitness() <= fitness(search.best_candidate()));
        assert_eq!(search.best_candidate().task_multiset(), search.best().task_multiset());
        previous = search.best_fitness();
    }
    assert_eq!(search.iteration(), 150);
}

proptest! {
    #[test]
    fn prop_neighbors_conserve_tasks(state in assignment()) {
        let expected = state.task_multiset();
        let ns = neighbors(&state);
        prop_assert_eq!(ns.len(), neighbor_count(&state));
        prop_assert_eq!(
            ns.len(),
            state.task_count() * (state.processor_count() - 1)
        );
        for n in &ns {
            prop_assert_eq!(n.task_multiset(), expected.clone());
            prop_assert_eq!(n.processor_count(), state.processor_count());
        }
    }

    #[test]
    fn prop_fitness_zero_iff_balanced(state in assignment()) {
        let f = fitness(&state);
        prop_assert!(f >= 0.0);
        prop_assert_eq!(f == 0.0, balanced(&state));
    }

    #[test]
    fn prop_search_invariants(
        processors in 1usize..5,
        tasks in prop::collection::vec(1u64..30, 0..10),
        max_size in 1usize..8,
    ) {
        let config = TabuConfig::default().with_max_iterations(25).with_max_size(max_size);
        let initial = initial_state(processors, &tasks).unwrap();
        let mut search = TabuSearch::new(processors, &tasks, config.clone()).unwrap();

        let mut previous = search.best_fitness();
        while search.step().unwrap() == Step::Advanced {
            prop_assert!(search.tabu_list().len() <= max_size);
            prop_assert!(search.best_fitness() <= previous);
            prop_assert_eq!(search.best_candidate().task_multiset(), initial.task_multiset());
            previous = search.best_fitness();
        }

        let result = search.run().unwrap();
        prop_assert!(result.best_fitness <= fitness(&initial));
        prop_assert_eq!(result.best_fitness, fitness(&result.best));
        prop_assert_eq!(result.best.task_multiset(), initial.task_multiset());

        let again = TabuRunner::run(processors, &tasks, &config).unwrap();
        prop_assert_eq!(again.best, result.best);
    }
}
