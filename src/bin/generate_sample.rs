//! Writes a deterministic synthetic film table for trying the app without
//! the real dataset.  Self-contained on purpose; run with
//! `cargo run --bin generate_sample`.

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

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (director, first active year, last active year, typical budget $M)
    let directors: &[(&str, i32, i32, f64)] = &[
        ("Christopher Nolan", 1998, 2023, 150.0),
        ("Martin Scorsese", 1973, 2023, 90.0),
        ("Steven Spielberg", 1975, 2022, 120.0),
        ("Quentin Tarantino", 1992, 2019, 70.0),
        ("Tim Burton", 1985, 2022, 110.0),
        ("Kathryn Bigelow", 1987, 2017, 35.0),
        ("James Cameron", 1984, 2022, 200.0),
        ("Spike Lee", 1986, 2020, 25.0),
        ("Greta Gerwig", 2017, 2023, 65.0),
        ("David Fincher", 1992, 2020, 60.0),
    ];

    let adjectives = [
        "Midnight", "Silent", "Crimson", "Broken", "Electric", "Hollow",
        "Golden", "Restless", "Burning", "Forgotten",
    ];
    let nouns = [
        "Harbor", "Empire", "Reckoning", "Mirage", "Crossing", "Vendetta",
        "Horizon", "Labyrinth", "Testament", "Frontier",
    ];

    let output_path = "sample_films.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Title",
            "Director",
            "Release Year",
            "Gross worldwide (in millions)",
            "Rating (Out of 10)",
            "Budget (in millions)",
        ])
        .expect("Failed to write header");

    let films_per_director = 8;
    let mut n_rows = 0;

    for &(director, first_year, last_year, typical_budget) in directors {
        for i in 0..films_per_director {
            let adjective = adjectives[(rng.next_u64() % 10) as usize];
            let noun = nouns[(rng.next_u64() % 10) as usize];
            let title = format!("{adjective} {noun} {}", i + 1);

            let year = first_year
                + (rng.next_f64() * f64::from(last_year - first_year)).round() as i32;

            let budget = rng.range(0.3, 2.0) * typical_budget;
            // Gross loosely tracks budget with a wide spread; flops happen.
            let gross = (budget * rng.range(0.4, 6.0)).max(0.5);
            let rating = rng.gauss(7.3, 0.8).clamp(3.0, 9.5);

            let record = [
                title,
                director.to_string(),
                year.to_string(),
                format!("{gross:.1}"),
                format!("{rating:.1}"),
                format!("{budget:.1}"),
            ];
            writer.write_record(&record).expect("Failed to write record");
            n_rows += 1;
        }
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {n_rows} films to {output_path}");
}
