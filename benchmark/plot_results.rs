use plotters::prelude::*;

use stacktc_benchmark::{print_performance_summary, run_comprehensive_benchmark, BenchmarkResult};

fn benchmark_closure_sizes() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    for &size in &[100, 200, 500, 1000, 2000, 5000] {
        results.push(run_comprehensive_benchmark(size, 3));
    }
    results
}

fn plot_results(
    results: &[BenchmarkResult],
    title: &str,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let min_size = results.iter().map(|r| r.graph_size).min().unwrap_or(100) as f64;
    let max_size = results.iter().map(|r| r.graph_size).max().unwrap_or(1000) as f64;
    let min_time = results
        .iter()
        .map(|r| {
            r.stacktc_time_ns
                .min(r.stacktc_recursive_time_ns)
                .min(r.petgraph_tarjan_time_ns)
        })
        .min()
        .unwrap_or(1000)
        .max(1) as f64;
    let max_time = results
        .iter()
        .map(|r| r.naive_closure_time_ns.max(r.petgraph_tarjan_time_ns))
        .max()
        .unwrap_or(1000)
        .max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (min_size * 0.8).log10()..(max_size * 1.2).log10(),
            (min_time * 0.8).log10()..(max_time * 1.2).log10(),
        )?;

    chart
        .configure_mesh()
        .x_desc("Graph Size (nodes) - Log Scale")
        .y_desc("Time (nanoseconds) - Log Scale")
        .x_label_formatter(&|x| format!("{:.0}", 10_f64.powf(*x)))
        .y_label_formatter(&|y| format!("{:.0}", 10_f64.powf(*y)))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            results
                .iter()
                .map(|r| ((r.graph_size as f64).log10(), (r.stacktc_time_ns as f64).log10())),
            &RGBColor(255, 165, 0),
        ))?
        .label("stacktc (iterative)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RGBColor(255, 165, 0)));

    chart
        .draw_series(LineSeries::new(
            results.iter().map(|r| {
                (
                    (r.graph_size as f64).log10(),
                    (r.stacktc_recursive_time_ns as f64).log10(),
                )
            }),
            &RGBColor(255, 100, 100),
        ))?
        .label("stacktc (recursive)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RGBColor(255, 100, 100)));

    chart
        .draw_series(LineSeries::new(
            results.iter().map(|r| {
                (
                    (r.graph_size as f64).log10(),
                    (r.petgraph_tarjan_time_ns as f64).log10(),
                )
            }),
            &BLUE,
        ))?
        .label("petgraph tarjan_scc")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            results.iter().map(|r| {
                (
                    (r.graph_size as f64).log10(),
                    (r.naive_closure_time_ns as f64).log10(),
                )
            }),
            &RGBColor(255, 0, 255),
        ))?
        .label("naive BFS closure")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RGBColor(255, 0, 255)));

    chart.configure_series_labels().draw()?;
    root.present()?;

    println!("Chart saved to: {filename}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running benchmarks and generating plots...");

    println!("\n=== Transitive Closure Benchmark ===");
    let closure_results = benchmark_closure_sizes();

    println!("\n=== Generating Plots ===");
    plot_results(
        &closure_results,
        "Transitive Closure Performance",
        "closure_performance.svg",
    )?;

    println!("\n=== Results Summary ===");
    print_performance_summary(&closure_results, "Transitive Closure");

    println!("\nPlot generated:");
    println!("- closure_performance.svg");

    Ok(())
}
