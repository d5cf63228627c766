use std::collections::{HashMap, HashSet};

use necto::solver::{
    domain::{Domain, DomainStore},
    engine::SolverEngine,
    problem::{Problem, VariableId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Colour {
    Red,
    Green,
    Blue,
}

const REGIONS: [&str; 7] = [
    "Western Australia",
    "Northern Territory",
    "South Australia",
    "Queensland",
    "New South Wales",
    "Victoria",
    "Tasmania",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let variables: Vec<VariableId> = (0..REGIONS.len() as u32).collect();
    let [wa, nt, sa, q, nsw, v, _t] = [0u32, 1, 2, 3, 4, 5, 6];
    let borders = [
        (wa, nt),
        (wa, sa),
        (nt, sa),
        (nt, q),
        (sa, q),
        (sa, nsw),
        (sa, v),
        (q, nsw),
        (nsw, v),
    ];

    let domains: DomainStore<Colour> = variables
        .iter()
        .map(|&var| (var, Domain::new([Colour::Red, Colour::Green, Colour::Blue])))
        .collect();

    let mut neighbors: HashMap<VariableId, Vec<VariableId>> = HashMap::new();
    for &(a, b) in &borders {
        neighbors.entry(a).or_default().push(b);
        neighbors.entry(b).or_default().push(a);
    }

    // Bordering regions must differ; everything else is vacuously fine.
    let border_set: HashSet<(VariableId, VariableId)> = borders
        .iter()
        .flat_map(|&(a, b)| [(a, b), (b, a)])
        .collect();
    let predicate = move |x: VariableId, vx: &Colour, y: VariableId, vy: &Colour| {
        !border_set.contains(&(x, y)) || vx != vy
    };

    let problem = Problem::new(variables, domains, neighbors, predicate)?;
    let (assignment, stats) = SolverEngine::default().solve(&problem);

    match assignment {
        Some(assignment) => {
            for (index, name) in REGIONS.iter().enumerate() {
                println!("{name}: {:?}", assignment[&(index as u32)]);
            }
        }
        None => println!("No colouring found."),
    }
    println!(
        "\n{} nodes visited, {} backtracks",
        stats.nodes_visited, stats.backtracks
    );
    Ok(())
}
