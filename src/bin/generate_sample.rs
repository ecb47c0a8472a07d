//! Writes a deterministic sample CSV for demoing the dashboard:
//! two categorical columns, two numeric columns, one boolean column.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let cities = ["Berlin", "Paris", "Tokyo", "Lisbon", "Oslo"];
    let channels = ["online", "retail", "partner"];

    // Each city sells around a different baseline.
    let baselines = [120.0, 95.0, 150.0, 60.0, 80.0];

    let mut writer = csv::Writer::from_path("sample.csv").expect("creating sample.csv");
    writer
        .write_record(["city", "channel", "sales", "units", "discounted"])
        .expect("writing header");

    for _ in 0..250 {
        let city_idx = (rng.next_u64() % cities.len() as u64) as usize;
        let city = cities[city_idx];
        let channel = rng.pick(&channels);
        let sales = rng.gauss(baselines[city_idx], 25.0).max(0.0);
        let units = (rng.next_u64() % 40 + 1).to_string();
        let discounted = rng.next_f64() < 0.3;
        let sales = format!("{sales:.2}");

        writer
            .write_record([
                city,
                channel,
                sales.as_str(),
                units.as_str(),
                if discounted { "true" } else { "false" },
            ])
            .expect("writing row");
    }

    writer.flush().expect("flushing sample.csv");
    println!("Wrote sample.csv (250 rows)");
}
