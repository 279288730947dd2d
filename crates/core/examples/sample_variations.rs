use prodsynth_core::dataset::stream_rng;
use prodsynth_core::variation::VariationGenerator;
use prodsynth_core::GeneratorConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let title = std::env::args().nth(1).unwrap_or_else(|| "Notebook".to_string());
    let count: u64 = match std::env::args().nth(2) {
        Some(n) => n.parse()?,
        None => 10,
    };

    let config = GeneratorConfig::builtin()?;
    let base = config
        .catalog
        .iter()
        .find(|b| b.title == title)
        .ok_or_else(|| format!("no base product titled {:?}", title))?;
    let variations = VariationGenerator::new(&config.vocabulary, &config.variation);

    println!("🔧 {} variations of {:?} ({})\n", count, base.title, base.category);

    for seed in 0..count {
        let record = variations.vary(base, &mut stream_rng(42, seed));
        println!("{:>3}. {}", seed, record.title);
        println!("     {}", record.description);
    }

    println!("\nGenerate a full dataset with:");
    println!("  cargo run -p prodsynth -- 1000");

    Ok(())
}
