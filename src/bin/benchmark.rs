//! Step throughput: serial scan vs rayon rows

use std::time::Instant;

use life_canvas::Grid;

fn bench<F: FnMut(&Grid) -> Grid>(size: usize, iterations: u32, mut step: F) -> f64 {
    let mut grid = Grid::random(size, 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    let sizes = [50, 100, 200, 400, 800];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = bench(size, iterations, Grid::step);
        let parallel_ms = bench(size, iterations, Grid::step_parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
