use colored::Colorize;
use graph_routes::graph::generators::generate_random_edges_with;
use graph_routes::{find_shortest_path, shortest_path_summary, Edge, Renderer, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Text renderer standing in for a real drawing backend
struct EdgeListRenderer;

impl Renderer for EdgeListRenderer {
    fn draw(&mut self, edges: &[Edge], highlight: Option<&[usize]>) -> Result<()> {
        for edge in edges {
            let on_route = highlight.map_or(false, |path| {
                path.windows(2)
                    .any(|pair| pair[0] == edge.from && pair[1] == edge.to)
            });

            let line = format!("  {} -[{}]-> {}", edge.from, edge.weight, edge.to);
            if on_route {
                println!("{}", line.yellow().bold());
            } else {
                println!("{}", line);
            }
        }
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let node_count = 8;
    let mut rng = StdRng::seed_from_u64(2024);
    let edges = generate_random_edges_with(&mut rng, node_count, 0.35, 10);

    println!("--- Random graph ({} nodes, {} edges) ---", node_count, edges.len());
    let mut renderer = EdgeListRenderer;
    renderer.draw(&edges, None).unwrap();

    // Distances from a single source to everything
    let source = 0;
    let summary = shortest_path_summary(node_count, &edges, source).unwrap();

    println!("\nShortest distances from {}:", source);
    for vertex in 0..node_count {
        let dist = summary[&vertex];
        if dist < 0 {
            println!("  {} -> {}: {}", source, vertex, "unreachable".red());
        } else {
            println!("  {} -> {}: {}", source, vertex, dist.to_string().green());
        }
    }

    // One concrete route, highlighted in the drawing
    let target = node_count - 1;
    let path = find_shortest_path(node_count, &edges, source, target).unwrap();

    if path.is_empty() {
        println!("\nNo route from {} to {}", source, target);
    } else {
        println!("\nRoute from {} to {}: {:?}", source, target, path);
        renderer.draw(&edges, Some(&path)).unwrap();
    }

    // Plain data for any external renderer
    println!("\nEdge list as JSON:");
    println!("{}", serde_json::to_string(&edges).unwrap());
}
