//! Writes a deterministic `unicorn_insight_dataset.csv` for trying the
//! explorer by hand.

use anyhow::{Context, Result};

/// Small deterministic generator (splitmix64), enough for sample data.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Valuation in billions, between 1.00 and ~40.
    fn valuation(&mut self) -> f64 {
        let cents = 100 + self.next_u64() % 3900;
        cents as f64 / 100.0
    }
}

const INDUSTRIES: [&str; 6] = [
    "Fintech",
    "Artificial intelligence",
    "Internet software & services",
    "E-commerce & direct-to-consumer",
    "Health",
    "Cybersecurity",
];

const PLACES: [(&str, &str); 5] = [
    ("United States", "San Francisco"),
    ("United States", "New York"),
    ("United Kingdom", "London"),
    ("India", "Bengaluru"),
    ("Germany", "Berlin"),
];

const INVESTORS: [&str; 5] = [
    "Sequoia Capital, Accel",
    "Tiger Global Management, SoftBank Group",
    "Andreessen Horowitz, Index Ventures",
    "Insight Partners, Lightspeed Venture Partners",
    "Khosla Ventures, General Catalyst",
];

fn main() -> Result<()> {
    let mut rng = SampleRng(42);
    let output_path = "unicorn_insight_dataset.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "",
        "Company",
        "Valuation ($B)",
        "Date Joined",
        "Country",
        "City",
        "Industry",
        "Select Investors",
    ])?;

    let rows = 60;
    for i in 0..rows {
        let (country, city) = PLACES[(rng.next_u64() % PLACES.len() as u64) as usize];
        // Every 15th company has no usable valuation, like the real dataset.
        let valuation = if i % 15 == 14 {
            "N/A".to_string()
        } else {
            format!("${:.2}B", rng.valuation())
        };
        let year = 2012 + rng.next_u64() % 11;
        let month = 1 + rng.next_u64() % 12;

        writer.write_record([
            i.to_string(),
            format!("Company {i:02}"),
            valuation,
            format!("{month}/1/{year}"),
            country.to_string(),
            city.to_string(),
            rng.pick(&INDUSTRIES).to_string(),
            rng.pick(&INVESTORS).to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {rows} companies to {output_path}");
    Ok(())
}
