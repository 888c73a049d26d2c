use anyhow::{Context, Result};

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // Region label plus the rough centre the coordinates scatter around.
    let regions: [(&str, f64, f64); 6] = [
        ("Alsace", 48.3, 7.4),
        ("Auvergne", 45.5, 3.1),
        ("Bretagne", 48.1, -2.8),
        ("Charente", 45.65, 0.15),
        ("Provence", 43.9, 5.2),
        ("Pyrenees", 42.9, 0.1),
    ];
    let agencies = ["RENASS", "LDG", "OCA"];
    let qualities = ["A", "B", "C"];

    let output_path = "sample_catalog.csv";
    // flexible: the deliberately broken rows at the end are shorter than 11
    // fields.
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output_path)
        .context("creating sample catalog")?;

    writer.write_record([
        "event_id",
        "date",
        "time",
        "depth_km",
        "region",
        "agency",
        "station_count",
        "quality",
        "latitude",
        "longitude",
        "magnitude",
    ])?;

    let rows = 200;
    for i in 0..rows {
        let &(region, center_lat, center_lon) = rng.pick(&regions);
        let latitude = center_lat + rng.gauss(0.0, 0.6);
        let longitude = center_lon + rng.gauss(0.0, 0.8);
        let magnitude = rng.gauss(2.8, 1.9).abs().min(9.5);
        let depth = rng.gauss(12.0, 8.0).abs().min(60.0);
        let stations = 3 + rng.next_u64() % 40;

        writer.write_record([
            format!("fr2024{i:04}"),
            format!("2024-{:02}-{:02}", 1 + i % 12, 1 + i % 28),
            format!(
                "{:02}:{:02}:{:02}",
                rng.next_u64() % 24,
                rng.next_u64() % 60,
                rng.next_u64() % 60
            ),
            format!("{depth:.1}"),
            region.to_string(),
            rng.pick(&agencies).to_string(),
            stations.to_string(),
            rng.pick(&qualities).to_string(),
            format!("{latitude:.4}"),
            format!("{longitude:.4}"),
            format!("{magnitude:.1}"),
        ])?;
    }

    // Rows the loader is expected to reject: a short row, a row with an
    // empty region, and a row with a non-numeric magnitude.
    writer.write_record(["fr20249997", "2024-12-01", "03:14:00"])?;
    writer.write_record([
        "fr20249998",
        "2024-12-02",
        "08:41:12",
        "9.3",
        "",
        "RENASS",
        "12",
        "B",
        "44.1200",
        "2.3400",
        "3.1",
    ])?;
    writer.write_record([
        "fr20249999",
        "2024-12-03",
        "21:05:43",
        "14.0",
        "Provence",
        "OCA",
        "8",
        "A",
        "43.8100",
        "5.0300",
        "unknown",
    ])?;

    writer.flush().context("writing sample catalog")?;

    println!("Wrote {} rows to {output_path}", rows + 3);
    Ok(())
}
