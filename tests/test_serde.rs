#![cfg(feature = "serde")]

use crewplan::{
    evolution::{Planner, PlannerOptions},
    problem::ProblemDefinition,
    rng::RandomNumberGenerator,
};

#[test]
fn test_outcome_round_trips_through_json() {
    let problem = ProblemDefinition::new(
        vec![vec![1, 0], vec![0, 1], vec![1, 1]],
        vec![4.0, 2.0],
        vec![10.0, 20.0, 15.0],
        vec![vec![1, 1], vec![0, 1]],
    )
    .unwrap();
    let options = PlannerOptions::builder()
        .population_size(10)
        .max_generations(5)
        .build();
    let planner = Planner::new(problem, options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let outcome = planner.run(&mut rng).unwrap();

    let json = serde_json::to_string(&outcome).unwrap();
    let restored: crewplan::evolution::PlanOutcome = serde_json::from_str(&json).unwrap();

    assert_eq!(outcome, restored);
}

#[test]
fn test_problem_definition_round_trips_through_json() {
    let problem = ProblemDefinition::new(
        vec![vec![1, 0], vec![0, 1]],
        vec![3.0, 1.0],
        vec![12.0, 8.0],
        vec![vec![1, 0], vec![0, 1]],
    )
    .unwrap();

    let json = serde_json::to_string(&problem).unwrap();
    let restored: ProblemDefinition = serde_json::from_str(&json).unwrap();

    assert_eq!(problem, restored);
}
