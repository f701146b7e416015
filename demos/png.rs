use upca::UpcA;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let upc: UpcA = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "036000291452".into())
        .parse()?;

    let png = upc.to_png(4)?;
    std::fs::write("upca.png", &png)?;
    println!("wrote upca.png ({} bytes)", png.len());

    Ok(())
}
