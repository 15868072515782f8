use versatile_digraph::{DEFAULT_NODE_VALUE, Digraph, Error, GraphOptions};

fn ab_graph() -> Digraph {
    let mut g = Digraph::new();
    g.add_node("A", 10.0).unwrap();
    g.add_node("B", 20.0).unwrap();
    g.add_edge("A", "B", "e1", 5.0).unwrap();
    g
}

#[test]
fn add_node_stores_value_exactly() {
    let mut g = Digraph::new();
    for (id, value) in [("int", 66.0), ("neg", -3.0), ("zero", 0.0), ("frac", 0.125)] {
        g.add_node(id, value).unwrap();
        assert_eq!(g.get_node_value(id).unwrap(), value);
    }
    assert_eq!(g.node_count(), 4);
}

#[test]
fn add_node_default_uses_default_value() {
    let mut g = Digraph::new();
    g.add_node_default("A").unwrap();
    assert_eq!(g.get_node_value("A").unwrap(), DEFAULT_NODE_VALUE);
}

#[test]
fn add_node_rejects_non_finite_values() {
    let mut g = Digraph::new();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = g.add_node("A", value).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }), "{err:?}");
    }
    assert!(!g.has_node("A"));
    assert_eq!(g.node_count(), 0);
}

#[test]
fn duplicate_node_is_rejected_and_keeps_original_value() {
    let mut g = Digraph::new();
    g.add_node("A", 10.0).unwrap();
    let err = g.add_node("A", 99.0).unwrap_err();
    assert_eq!(err, Error::DuplicateNode { id: "A".to_string() });
    assert_eq!(g.get_node_value("A").unwrap(), 10.0);
    assert_eq!(g.node_count(), 1);
}

#[test]
fn get_node_value_of_missing_node_fails() {
    let g = Digraph::new();
    assert_eq!(
        g.get_node_value("A").unwrap_err(),
        Error::NodeNotFound { id: "A".to_string() }
    );
    assert_eq!(g.node_value("A"), None);
}

#[test]
fn add_edge_with_missing_endpoint_adds_nothing() {
    let mut g = Digraph::new();
    g.add_node("A", 1.0).unwrap();

    let err = g.add_edge("A", "Z", "e1", 1.0).unwrap_err();
    assert_eq!(
        err,
        Error::MissingNode {
            edge: "e1".to_string(),
            id: "Z".to_string()
        }
    );
    let err = g.add_edge("Z", "A", "e1", 1.0).unwrap_err();
    assert!(matches!(err, Error::MissingNode { ref id, .. } if id == "Z"));

    assert_eq!(g.edge_count(), 0);
    assert!(!g.has_node("Z"));
    assert!(g.edge_named("e1").is_none());
}

#[test]
fn add_edge_rejects_non_positive_weights() {
    let mut g = Digraph::new();
    g.add_node("A", 10.0).unwrap();
    g.add_node("B", 20.0).unwrap();
    for weight in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = g.add_edge("A", "B", "e1", weight).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }), "{err:?}");
    }
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.out_degree("A").unwrap(), 0);
}

#[test]
fn edge_names_are_unique_across_the_graph() {
    let mut g = ab_graph();
    g.add_node("C", 30.0).unwrap();

    let err = g.add_edge("B", "C", "e1", 2.0).unwrap_err();
    assert_eq!(err, Error::DuplicateEdgeName { name: "e1".to_string() });
    let err = g.add_edge("A", "B", "e1", 2.0).unwrap_err();
    assert_eq!(err, Error::DuplicateEdgeName { name: "e1".to_string() });

    assert_eq!(g.edge_count(), 1);
    assert!(g.successors("B").unwrap().is_empty());
}

#[test]
fn basic_scenario_queries() {
    let g = ab_graph();

    assert_eq!(g.successors("A").unwrap(), vec!["B"]);
    assert_eq!(g.predecessors("B").unwrap(), vec!["A"]);
    assert!(g.predecessors("A").unwrap().is_empty());
    assert!(g.successors("B").unwrap().is_empty());
    assert_eq!(g.out_degree("A").unwrap(), 1);
    assert_eq!(g.in_degree("B").unwrap(), 1);
    assert_eq!(g.in_degree("A").unwrap(), 0);
    assert_eq!(g.out_degree("B").unwrap(), 0);
    assert_eq!(g.get_edge_weight("A", "B", None).unwrap(), 5.0);
    assert_eq!(g.get_edge_weight("A", "B", Some("e1")).unwrap(), 5.0);
    assert_eq!(g.successor_on_edge("A", "e1").unwrap(), "B");
}

#[test]
fn missing_edge_weight_lookup_fails() {
    let g = ab_graph();
    assert!(matches!(
        g.get_edge_weight("A", "C", None),
        Err(Error::EdgeNotFound { .. })
    ));
    assert!(matches!(
        g.get_edge_weight("B", "A", None),
        Err(Error::EdgeNotFound { .. })
    ));
    assert!(matches!(
        g.get_edge_weight("A", "B", Some("e2")),
        Err(Error::EdgeNotFound { .. })
    ));
}

#[test]
fn traversal_of_missing_node_fails() {
    let g = ab_graph();
    let missing = Error::NodeNotFound { id: "Z".to_string() };
    assert_eq!(g.predecessors("Z").unwrap_err(), missing);
    assert_eq!(g.successors("Z").unwrap_err(), missing);
    assert_eq!(g.in_degree("Z").unwrap_err(), missing);
    assert_eq!(g.out_degree("Z").unwrap_err(), missing);
    assert_eq!(g.in_edges("Z").unwrap_err(), missing);
    assert_eq!(g.out_edges("Z").unwrap_err(), missing);
}

#[test]
fn successor_on_edge_requires_matching_start() {
    let g = ab_graph();
    assert!(matches!(
        g.successor_on_edge("B", "e1"),
        Err(Error::EdgeNotFound { .. })
    ));
    assert!(matches!(
        g.successor_on_edge("A", "nope"),
        Err(Error::EdgeNotFound { .. })
    ));
}
#[test]
fn unnamed_weight_lookup_only_considers_the_requested_pair() {
    let mut g = ab_graph();
    g.add_node("C", 30.0).unwrap();
    g.add_edge("A", "C", "e2", 2.5).unwrap();
    g.add_edge("C", "B", "e3", 4.0).unwrap();

    assert_eq!(g.get_edge_weight("A", "B", None).unwrap(), 5.0);
    assert_eq!(g.get_edge_weight("A", "C", None).unwrap(), 2.5);
    assert_eq!(g.get_edge_weight("C", "B", None).unwrap(), 4.0);
    assert_eq!(
        g.get_edge_weight("A", "Z", None).unwrap_err(),
        Error::EdgeNotFound {
            edge: "A -> Z".to_string()
        }
    );
}

#[test]
fn parallel_edges_are_told_apart_by_name() {
    let mut g = ab_graph();
    g.add_edge("A", "B", "e2", 7.0).unwrap();

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.get_edge_weight("A", "B", Some("e1")).unwrap(), 5.0);
    assert_eq!(g.get_edge_weight("A", "B", Some("e2")).unwrap(), 7.0);
    assert_eq!(
        g.get_edge_weight("A", "B", None).unwrap_err(),
        Error::EdgeNameRequired {
            v: "A".to_string(),
            w: "B".to_string(),
            count: 2
        }
    );
    assert_eq!(g.successor_on_edge("A", "e2").unwrap(), "B");

    // Node sets are distinct, degrees count every edge.
    assert_eq!(g.successors("A").unwrap(), vec!["B"]);
    assert_eq!(g.predecessors("B").unwrap(), vec!["A"]);
    assert_eq!(g.out_degree("A").unwrap(), 2);
    assert_eq!(g.in_degree("B").unwrap(), 2);
}

#[test]
fn single_edge_graph_rejects_parallel_edges() {
    let mut g = Digraph::with_options(GraphOptions { multigraph: false });
    g.add_node("A", 10.0).unwrap();
    g.add_node("B", 20.0).unwrap();
    g.add_edge("A", "B", "e1", 5.0).unwrap();

    let err = g.add_edge("A", "B", "e2", 7.0).unwrap_err();
    assert_eq!(
        err,
        Error::ParallelEdge {
            v: "A".to_string(),
            w: "B".to_string(),
            name: "e2".to_string()
        }
    );
    assert_eq!(g.edge_count(), 1);
    assert!(g.edge_named("e2").is_none());

    // The reverse direction is a different pair.
    g.add_edge("B", "A", "e2", 7.0).unwrap();
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn self_loops_count_on_both_sides() {
    let mut g = Digraph::new();
    g.add_node("A", 1.0).unwrap();
    g.add_edge("A", "A", "loop", 1.5).unwrap();

    assert_eq!(g.successors("A").unwrap(), vec!["A"]);
    assert_eq!(g.predecessors("A").unwrap(), vec!["A"]);
    assert_eq!(g.in_degree("A").unwrap(), 1);
    assert_eq!(g.out_degree("A").unwrap(), 1);
}

#[test]
fn degrees_agree_with_edge_lists() {
    let mut g = Digraph::new();
    for id in ["a", "b", "c", "d"] {
        g.add_node_default(id).unwrap();
    }
    g.add_edge("a", "b", "ab", 1.0).unwrap();
    g.add_edge("a", "c", "ac", 2.0).unwrap();
    g.add_edge("c", "b", "cb", 3.0).unwrap();
    g.add_edge("d", "b", "db", 4.0).unwrap();

    for id in g.list_nodes() {
        assert_eq!(g.out_degree(&id).unwrap(), g.out_edges(&id).unwrap().len());
        assert_eq!(g.in_degree(&id).unwrap(), g.in_edges(&id).unwrap().len());
    }
    assert_eq!(g.predecessors("b").unwrap(), vec!["a", "c", "d"]);
    assert_eq!(g.successors("a").unwrap(), vec!["b", "c"]);
    assert_eq!(g.in_degree("a").unwrap(), 0);
    assert_eq!(g.out_degree("b").unwrap(), 0);
}

#[test]
fn list_nodes_is_idempotent_and_ordered() {
    let mut g = Digraph::new();
    for id in ["Allentown", "Easton", "Bethlehem"] {
        g.add_node_default(id).unwrap();
    }
    let first = g.list_nodes();
    let second = g.list_nodes();
    assert_eq!(first, second);
    assert_eq!(first, vec!["Allentown", "Easton", "Bethlehem"]);
    assert_eq!(g.nodes().collect::<Vec<_>>(), first);
}

#[test]
fn edge_lookups_by_key_and_name() {
    let g = ab_graph();
    let key = g.edge_keys().remove(0);
    assert_eq!((key.v.as_str(), key.w.as_str(), key.name.as_str()), ("A", "B", "e1"));

    let by_key = g.edge_by_key(&key).unwrap();
    let by_name = g.edge_named("e1").unwrap();
    assert_eq!(by_key, by_name);
    assert_eq!(by_name.weight, 5.0);
    assert_eq!(by_name.key(), key);
    assert!(g.has_edge("A", "B", "e1"));
    assert!(!g.has_edge("B", "A", "e1"));
}

#[test]
fn add_operations_chain() {
    let mut g = Digraph::new();
    g.add_node("A", 1.0)
        .unwrap()
        .add_node("B", 2.0)
        .unwrap()
        .add_edge("A", "B", "ab", 3.0)
        .unwrap();
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn display_lists_nodes_then_edges() {
    let g = ab_graph();
    assert_eq!(
        g.to_string(),
        "Node A, value=10\nNode B, value=20\nAn edge from A to B, weight=5, name=e1\n"
    );
}

#[test]
fn digraph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Digraph>();
}
