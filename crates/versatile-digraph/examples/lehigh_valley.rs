use versatile_digraph::Digraph;

fn main() {
    let mut g = Digraph::new();
    g.add_node("Allentown", 66.0).expect("add Allentown");
    g.add_node("Easton", 74.0).expect("add Easton");
    g.add_node("Bethlehem", 70.0).expect("add Bethlehem");

    for (from, to, name, weight) in [
        ("Allentown", "Easton", "US22E", 17.0),
        ("Easton", "Allentown", "US22W", 17.0),
        ("Easton", "Bethlehem", "Freemansburg", 12.0),
        ("Bethlehem", "Easton", "Freemansburg Ave", 12.0),
        ("Bethlehem", "Allentown", "Hanover", 6.0),
        ("Allentown", "Bethlehem", "Hanover Ave", 6.0),
    ] {
        g.add_edge(from, to, name, weight).expect("add edge");
    }

    // Reusing a name is rejected even on a different pair.
    if let Err(err) = g.add_edge("Bethlehem", "Easton", "US22E", 12.0) {
        eprintln!("rejected: {err}");
    }

    g.print_graph();

    let snapshot = g.export_for_render();
    for node in &snapshot.nodes {
        println!("node label: {}", node.label());
    }
    for edge in &snapshot.edges {
        println!("edge label: {} -> {}: {}", edge.from, edge.to, edge.label());
    }

    let series = g.export_edge_weights();
    println!(
        "{}",
        serde_json::to_string_pretty(&series).expect("serialize edge weights")
    );
}
