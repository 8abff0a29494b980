use classic_search::coloring::backtrack::{color_graph, is_safe, ColoringOutcome};
use classic_search::coloring::graph::AdjacencyMatrix;
use classic_search::coloring::palette::{Palette, UNCOLORED};
use classic_search::scenario::{ColoringScenario, ResourceLimits, SearchError};
use classic_search::scenarios::file::coloring_from_json;
use classic_search::scenarios::{self, KSA_REGIONS};

fn region(name: &str) -> usize {
    KSA_REGIONS.iter().position(|&r| r == name).unwrap()
}

#[test]
fn region_map_matches_reference_matrix() {
    let scn = scenarios::ksa_regions().unwrap();
    let expected: Vec<Vec<u8>> = vec![
        vec![0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
        vec![1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1],
        vec![0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 1],
        vec![0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1],
        vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
        vec![0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0],
    ];
    assert_eq!(scn.graph.rows(), expected);
    assert_eq!(scn.vertex_count(), 13);
    assert_eq!(scn.vertex_name(12), "Eastern");
}

#[test]
fn three_colors_color_the_region_map_properly() {
    let scn = scenarios::ksa_regions().unwrap();
    let result = color_graph(&scn).unwrap();
    let assignment = result.outcome.assignment().expect("3 colors should suffice");

    assert!(assignment.is_proper(&scn.graph));
    for (u, v) in scn.graph.edges() {
        assert_ne!(assignment.color(u), assignment.color(v), "{u}-{v} share a color");
    }
    assert_eq!(scn.palette.name(assignment.color(region("Riyadh"))), Some("brown"));
}

#[test]
fn two_colors_fail_because_of_an_odd_cycle() {
    let scn = scenarios::ksa_regions().unwrap().with_palette_size(2);

    // Tabuk, Jouf and Hail border each other pairwise.
    let (t, j, h) = (region("Tabuk"), region("Jouf"), region("Hail"));
    assert!(scn.graph.is_adjacent(t, j));
    assert!(scn.graph.is_adjacent(j, h));
    assert!(scn.graph.is_adjacent(h, t));

    let cycle = scn.graph.find_odd_cycle().expect("map is not bipartite");
    assert_eq!(cycle.len() % 2, 1);
    for i in 0..cycle.len() {
        assert!(scn.graph.is_adjacent(cycle[i], cycle[(i + 1) % cycle.len()]));
    }

    let result = color_graph(&scn).unwrap();
    assert_eq!(result.outcome, ColoringOutcome::NoColoring);
}

#[test]
fn one_color_fails_on_any_graph_with_an_edge() {
    let single_edge = AdjacencyMatrix::from_edges(2, &[(0, 1)]).unwrap();
    let scn = ColoringScenario::new("edge", single_edge, Palette::numbered(1));
    assert_eq!(color_graph(&scn).unwrap().outcome, ColoringOutcome::NoColoring);

    let map = scenarios::ksa_regions().unwrap().with_palette_size(1);
    assert!(map.graph.has_edges());
    assert_eq!(color_graph(&map).unwrap().outcome, ColoringOutcome::NoColoring);

    // Without edges a single color is enough.
    let isolated = AdjacencyMatrix::from_edges(3, &[]).unwrap();
    let scn = ColoringScenario::new("isolated", isolated, Palette::numbered(1));
    let result = color_graph(&scn).unwrap();
    assert_eq!(result.outcome.assignment().unwrap().colors(), &[1, 1, 1]);
}

#[test]
fn coloring_is_deterministic() {
    let scn = scenarios::ksa_regions().unwrap();
    let a = color_graph(&scn).unwrap().outcome;
    let b = color_graph(&scn).unwrap().outcome;
    assert_eq!(a, b);
}

#[test]
fn custom_vertex_order_still_yields_a_proper_coloring() {
    let scn = scenarios::ksa_regions().unwrap();
    let order: Vec<usize> = (0..scn.vertex_count()).rev().collect();
    let scn = scn.with_order(order);

    let result = color_graph(&scn).unwrap();
    let assignment = result.outcome.assignment().unwrap();
    assert!(assignment.is_proper(&scn.graph));
    // The first vertex in the order always takes the first color.
    assert_eq!(assignment.color(12), 1);
}

#[test]
fn is_safe_only_looks_at_neighbors() {
    let path = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    let assignment = [1, UNCOLORED, 2];
    assert!(!is_safe(&path, 1, &assignment, 1));
    assert!(!is_safe(&path, 1, &assignment, 2));
    assert!(is_safe(&path, 1, &assignment, 3));
    // Vertex 2 is not adjacent to vertex 0.
    assert!(is_safe(&path, 2, &assignment, 1));
}

#[test]
fn invalid_scenarios_are_rejected() {
    let graph = AdjacencyMatrix::from_edges(3, &[(0, 1)]).unwrap();

    let no_colors = ColoringScenario::new("empty_palette", graph.clone(), Palette::numbered(0));
    assert!(matches!(
        color_graph(&no_colors),
        Err(SearchError::InvalidScenario { .. })
    ));

    let bad_order =
        ColoringScenario::new("dup", graph.clone(), Palette::numbered(2)).with_order(vec![0, 0, 1]);
    assert!(bad_order.validate().is_err());

    let short_order =
        ColoringScenario::new("short", graph.clone(), Palette::numbered(2)).with_order(vec![0, 1]);
    assert!(short_order.validate().is_err());

    let bad_names = ColoringScenario::new("names", graph, Palette::numbered(2))
        .with_vertex_names(["a", "b"]);
    assert!(bad_names.validate().is_err());
}

#[test]
fn node_budget_is_enforced() {
    let mut scn = scenarios::ksa_regions().unwrap();
    scn.limits = ResourceLimits {
        max_nodes: 5,
        ..ResourceLimits::default()
    };
    match color_graph(&scn) {
        Err(SearchError::LimitExceeded { metric, limit, .. }) => {
            assert_eq!(metric, "nodes");
            assert_eq!(limit, 5);
        }
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn custom_map_loads_from_json() {
    let json = br#"{
        "name": "triangle",
        "graph": [[0, 1, 1], [1, 0, 1], [1, 1, 0]],
        "palette": ["red", "green", "blue"],
        "vertex_names": ["a", "b", "c"]
    }"#;
    let scn = coloring_from_json(json).unwrap();
    let result = color_graph(&scn).unwrap();
    assert_eq!(result.outcome.assignment().unwrap().colors(), &[1, 2, 3]);
    assert_eq!(scn.palette.name(3), Some("blue"));

    let asymmetric = br#"{
        "name": "broken",
        "graph": [[0, 1], [0, 0]],
        "palette": ["red"]
    }"#;
    assert!(matches!(
        coloring_from_json(asymmetric),
        Err(SearchError::InvalidScenario { .. })
    ));
}
