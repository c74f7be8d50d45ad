//! Recovers the `y` coordinate of a compressed secp256k1 point.
//!
//! A compressed point stores only `x`; `y` is one of the two square roots of
//! `x^3 + 7` in the curve's field. Run with `cargo run --example
//! point_decompression`.

use num_bigint::BigInt;
use num_integer::Integer;
use number_theory::unsquare;

fn hex(digits: &str) -> BigInt {
    BigInt::parse_bytes(digits.as_bytes(), 16).unwrap()
}

fn main() {
    // The secp256k1 field prime, 2^256 - 2^32 - 977, and the x coordinate of
    // the curve's generator point.
    let p = hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");
    let x = hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

    // y^2 = x^3 + 7 on secp256k1.
    let y_squared = (&x * &x * &x + BigInt::from(7)).mod_floor(&p);

    let roots = unsquare(&y_squared, &p).unwrap();
    assert_eq!(roots.len(), 2);

    println!("candidate y coordinates for the generator's x:");
    for y in &roots {
        println!("  {y:064x}");
    }

    let generator_y = hex("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");
    assert!(roots.contains(&generator_y));
}
