mod common;

use flightplan_lib::{plan_route, PathOrdering, PlanOptions, Preference, RouteRequest};

fn routes(plan: &flightplan_lib::FlightPlan) -> Vec<String> {
    plan.paths.iter().map(|path| path.cities.join(",")).collect()
}

#[test]
fn only_first_three_discovered_paths_are_kept() {
    let graph = common::complete_graph();
    let request = RouteRequest::new("A", "D", Preference::Cost);
    let plan = plan_route(&graph, &request, &PlanOptions::default());

    assert_eq!(routes(&plan), vec!["A,D", "A,C,D", "A,C,B,D"]);
}

#[test]
fn preference_is_only_a_label_by_default() {
    let graph = common::complete_graph();
    let by_time = plan_route(
        &graph,
        &RouteRequest::new("A", "D", Preference::Time),
        &PlanOptions::default(),
    );
    let by_cost = plan_route(
        &graph,
        &RouteRequest::new("A", "D", Preference::Cost),
        &PlanOptions::default(),
    );

    assert_eq!(by_time.paths, by_cost.paths);
}

#[test]
fn preference_ordering_sorts_by_cost() {
    let graph = common::complete_graph();
    let options = PlanOptions {
        ordering: PathOrdering::Preference,
        ..PlanOptions::default()
    };
    let plan = plan_route(&graph, &RouteRequest::new("A", "D", Preference::Cost), &options);

    assert_eq!(routes(&plan), vec!["A,D", "A,B,D", "A,C,D"]);
    let costs: Vec<_> = plan.paths.iter().map(|path| path.total_cost).collect();
    assert_eq!(costs, vec![3.0, 6.0, 8.0]);
}

#[test]
fn preference_ordering_sorts_by_time_then_cost() {
    let graph = common::complete_graph();
    let options = PlanOptions {
        max_paths: 5,
        ordering: PathOrdering::Preference,
    };
    let plan = plan_route(&graph, &RouteRequest::new("A", "D", Preference::Time), &options);

    assert_eq!(
        routes(&plan),
        vec!["A,D", "A,B,D", "A,C,D", "A,C,B,D", "A,B,C,D"]
    );
}

#[test]
fn unreachable_request_yields_empty_plan() {
    let graph = common::chain_graph();
    let plan = plan_route(
        &graph,
        &RouteRequest::new("A", "D", Preference::Time),
        &PlanOptions::default(),
    );

    assert!(plan.is_empty());
    assert_eq!(plan.request.destination, "D");
}

#[test]
fn max_paths_limits_output() {
    let graph = common::complete_graph();
    let options = PlanOptions {
        max_paths: 1,
        ..PlanOptions::default()
    };
    let plan = plan_route(&graph, &RouteRequest::new("B", "C", Preference::Time), &options);
    assert_eq!(plan.paths.len(), 1);
}
