use bithash::{CoordinatePolicy, GeoBitHash, Point, decode, encode, spatial};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see wraparound corrections)
    env_logger::init();

    println!("=== bithash - Getting Started ===\n");

    // === ENCODING ===
    println!("1. Encoding");
    println!("-----------");

    let (lat, lng) = (40.7128, -74.0060);
    for precision in [8, 26, 52] {
        let hash = encode(lat, lng, precision)?;
        println!("   NYC at {:>2} bits: {:#018x}", precision, hash);
    }
    println!();

    // === DECODING ===
    println!("2. Decoding");
    println!("-----------");

    let hash = encode(lat, lng, 26)?;
    let bbox = decode(hash, 26)?;
    println!(
        "   lat [{:.5}, {:.5}], lng [{:.5}, {:.5}]",
        bbox.min_lat, bbox.max_lat, bbox.min_lng, bbox.max_lng
    );
    println!("   contains NYC: {}\n", bbox.contains(lat, lng));

    // === NEIGHBORS ===
    println!("3. Neighbors");
    println!("------------");

    let codec = GeoBitHash::builder()
        .precision(26)
        .coordinate_policy(CoordinatePolicy::Clamp)
        .build()?;

    for (direction, neighbor) in codec.neighbors(hash)?.iter() {
        println!("   {:>2}: {:#09x}", direction, neighbor);
    }
    println!();

    // === ANTIMERIDIAN ===
    println!("4. Antimeridian wraparound");
    println!("--------------------------");

    let fiji = Point::new(179.99, -17.7);
    let edge = spatial::encode_point(&fiji, 26)?;
    for (direction, rect) in spatial::neighbor_rects(edge, 26)? {
        println!(
            "   {:>2}: lng [{:.3}, {:.3}]",
            direction,
            rect.min().x,
            rect.max().x
        );
    }

    Ok(())
}
