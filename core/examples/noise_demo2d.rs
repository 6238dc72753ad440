use noisemap_core::{Perlin2D, PermutationTable};

fn main() {
    // Fixed seed so the printout is the same on every run
    let perlin = Perlin2D::new(PermutationTable::from_seed(2025));
    let map = perlin.generate(64, 64).unwrap();

    // Print the top-left 16×16 corner of the map
    for row in map.rows().take(16) {
        for v in &row[..16] {
            print!("{:>6.3} ", v);
        }
        println!();
    }
}
