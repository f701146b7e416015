use upca::UpcA;

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";
const ROWS: usize = 16;

fn main() -> Result<(), upca::UpcError> {
    let upc: UpcA = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "036000291452".into())
        .parse()?;

    let line: String = upc
        .bits()
        .map(|on| if on { BLACK } else { WHITE })
        .collect();
    for _ in 0..ROWS {
        println!("{line}");
    }
    println!("\x1B[0m{upc}");

    Ok(())
}
