//! tengaran — console demo for the wayfinder routing framework.
//!
//! Builds the proximity road graph over 20 points of interest around
//! Tengaran and answers shortest-path queries from a small text menu.
//! Distances are entered in raw map units and reported in km.

mod dataset;

use std::io::{self, BufRead, Write};

use anyhow::Result;

use wf_core::LocationId;
use wf_spatial::{build_graph, shortest_path, GraphConfig, LocationSet, RoadGraph};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Map units per km for display (1 unit = 1 m).
const UNIT_TO_KM: f64 = 1.0 / 1000.0;

fn main() -> Result<()> {
    let locations = dataset::location_set();
    let graph = build_graph(&locations, GraphConfig::default());

    println!("wayfinder demo — Tengaran road network");
    println!(
        "{} locations, {} directed road segments",
        locations.len(),
        graph.edge_count()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("1. List locations");
        println!("2. Find shortest path");
        println!("3. Show road connections per location");
        println!("4. Quit");
        print!("Choice (1-4): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "1" => list_locations(&locations),
            "2" => find_path(&locations, &graph, &mut lines)?,
            "3" => show_connections(&locations, &graph),
            "4" => break,
            other => println!("invalid choice: {other:?}"),
        }
    }

    Ok(())
}

// ── Menu actions ──────────────────────────────────────────────────────────────

fn list_locations(locations: &LocationSet) {
    for (id, loc) in locations.iter() {
        println!("{:>2}. {} {}", id.index() + 1, loc.name, loc.pos);
    }
}

fn find_path(
    locations: &LocationSet,
    graph: &RoadGraph,
    lines: &mut io::Lines<io::StdinLock<'_>>,
) -> Result<()> {
    let Some(start) = prompt_location(locations, "start", lines)? else {
        return Ok(());
    };
    let Some(end) = prompt_location(locations, "destination", lines)? else {
        return Ok(());
    };
    if start == end {
        println!("start and destination are the same location");
        return Ok(());
    }

    let result = shortest_path(graph, start, end);
    if result.is_empty() {
        println!("no route found — the locations are not connected by road");
        return Ok(());
    }

    println!(
        "total distance: {:.2} km over {} segments",
        result.distance_to(end) * UNIT_TO_KM,
        result.segment_count()
    );
    for pair in result.path.windows(2) {
        let from = &locations.try_get(pair[0])?.name;
        let to = &locations.try_get(pair[1])?.name;
        let seg = graph
            .edge_weight_between(pair[0], pair[1])
            .unwrap_or_default();
        println!("  {from} -> {to}  ({:.2} km)", seg * UNIT_TO_KM);
    }
    Ok(())
}

fn show_connections(locations: &LocationSet, graph: &RoadGraph) {
    for (id, loc) in locations.iter() {
        println!("{:>2}. {} {}", id.index() + 1, loc.name, loc.pos);
        let conns = graph.connections_sorted(id);
        if conns.is_empty() {
            println!("      no direct connections");
        }
        for (to, weight) in conns {
            if let Some(target) = locations.get(to) {
                println!("      -> {} ({:.2} km)", target.name, weight * UNIT_TO_KM);
            }
        }
    }
}

// ── Input helpers ─────────────────────────────────────────────────────────────

/// Prompt for a 1-based location number; `None` on EOF or invalid input.
fn prompt_location(
    locations: &LocationSet,
    label: &str,
    lines: &mut io::Lines<io::StdinLock<'_>>,
) -> Result<Option<LocationId>> {
    print!("{label} location (1-{}): ", locations.len());
    io::stdout().flush()?;

    let Some(line) = lines.next() else {
        return Ok(None);
    };
    let Ok(number) = line?.trim().parse::<usize>() else {
        println!("expected a number");
        return Ok(None);
    };
    if number < 1 || number > locations.len() {
        println!("location number out of range");
        return Ok(None);
    }
    Ok(Some(LocationId((number - 1) as u32)))
}
