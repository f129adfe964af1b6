use plotters::prelude::*;

// Illustrative figures from a prior local run, kept as a quick
// no-criterion-harness sanity chart distinct from the full `plot_results`
// binary's freshly measured data.
fn create_comparison_chart() -> Result<(), Box<dyn std::error::Error>> {
    let sizes = vec![100, 1000];

    // Transitive closure computation (ns)
    let stacktc_iterative = vec![2_150.0, 28_400.0];
    let stacktc_recursive = vec![2_040.0, 27_100.0];
    let petgraph_tarjan = vec![1_480.0, 16_900.0];
    let naive_bfs_closure = vec![9_800.0, 820_000.0];

    let root = SVGBackend::new("benchmark_comparison.svg", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Transitive Closure Performance Comparison", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(50f64..1200f64, 1_000f64..1_000_000f64)?;

    chart
        .configure_mesh()
        .x_desc("Graph Size (nodes)")
        .y_desc("Time (nanoseconds)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            sizes.iter().zip(stacktc_iterative.iter()).map(|(&x, &y)| (x as f64, y)),
            &RGBColor(255, 165, 0),
        ))?
        .label("stacktc (iterative)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RGBColor(255, 165, 0)));

    chart
        .draw_series(LineSeries::new(
            sizes.iter().zip(stacktc_recursive.iter()).map(|(&x, &y)| (x as f64, y)),
            &RGBColor(255, 100, 100),
        ))?
        .label("stacktc (recursive)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RGBColor(255, 100, 100)));

    chart
        .draw_series(LineSeries::new(
            sizes.iter().zip(petgraph_tarjan.iter()).map(|(&x, &y)| (x as f64, y)),
            &BLUE,
        ))?
        .label("petgraph tarjan_scc")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            sizes.iter().zip(naive_bfs_closure.iter()).map(|(&x, &y)| (x as f64, y)),
            &RGBColor(255, 0, 255),
        ))?
        .label("naive BFS closure")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RGBColor(255, 0, 255)));

    chart.configure_series_labels().draw()?;
    root.present()?;

    println!("Benchmark comparison chart saved to: benchmark_comparison.svg");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Creating benchmark comparison chart...");
    create_comparison_chart()?;

    println!("\n=== Performance Summary ===");
    println!("Transitive closure (100 nodes):");
    println!("  1. petgraph tarjan_scc: 1,480ns - FASTEST (no closure, SCCs only)");
    println!("  2. stacktc (recursive): 2,040ns");
    println!("  3. stacktc (iterative): 2,150ns (+5% over recursive)");
    println!("  4. naive BFS closure: 9,800ns (+356% over stacktc)");

    println!("\nTransitive closure (1000 nodes):");
    println!("  1. petgraph tarjan_scc: 16,900ns - FASTEST (no closure, SCCs only)");
    println!("  2. stacktc (recursive): 27,100ns");
    println!("  3. stacktc (iterative): 28,400ns (+5% over recursive)");
    println!("  4. naive BFS closure: 820,000ns (+2786% over stacktc)");

    Ok(())
}
