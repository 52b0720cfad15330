//! Step throughput: serial against parallel

use life::{Board, LIFE_MAX, StepMode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

fn benchmark_step(size: usize, iterations: u32, mode: StepMode) -> f64 {
    let mut board = Board::new();
    board.resize(size, size);
    board.randomize_with(&mut StdRng::seed_from_u64(42));

    let start = Instant::now();
    for _ in 0..iterations {
        board.advance(mode);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Board Step Benchmark ===\n");

    let sizes = [64, 128, 256, 512, LIFE_MAX - 1];
    let iterations = 20;

    let modes = StepMode::all();

    print!("{:>12}", "Viewport");
    for mode in &modes {
        print!(" {:>12}", mode.name());
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let timings: Vec<f64> = modes
            .iter()
            .map(|&mode| benchmark_step(size, iterations, mode))
            .collect();

        print!("{:>12}", format!("{}x{}", size, size));
        for ms in &timings {
            print!(" {:>12.2}", ms);
        }
        let fastest = timings.iter().copied().fold(f64::INFINITY, f64::min);
        println!(" {:>9.1}x", timings[0] / fastest);
    }

    println!("\n=== Memory ===\n");

    let cells = 2 * LIFE_MAX * LIFE_MAX;
    let bytes = cells * std::mem::size_of::<life::Cell>();
    println!("Backing grids: {} cells, {:.1} MB", cells, bytes as f64 / 1_000_000.0);

    let size = LIFE_MAX - 1;
    let parallel_ms = benchmark_step(size, iterations, StepMode::Parallel);
    println!(
        "Throughput at {}x{}: {:.2} ms/gen, {:.1}M cells/sec",
        size,
        size,
        parallel_ms,
        (size * size) as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
