//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use gfpoly::{Modulus, Poly};

#[test]
fn modulus_roundtrip() {
    let m = Modulus::new(17).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "17");
    let back: Modulus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn modulus_rejects_invalid_values() {
    assert!(serde_json::from_str::<Modulus>("1").is_err());
    assert!(serde_json::from_str::<Modulus>("15").is_err());
}

#[test]
fn poly_roundtrip() {
    // x^2 + 2x + 3
    let p = Poly::new(&[3, 2, 1], Modulus::new(17).unwrap());
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"modulus":17,"coeffs":[3,2,1]}"#);
    let q: Poly = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_zero_roundtrip() {
    let p = Poly::zero(Modulus::new(5).unwrap());
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"modulus":5,"coeffs":[0]}"#);
    let q: Poly = serde_json::from_str(&json).unwrap();
    assert!(q.is_zero());
}

#[test]
fn poly_deserialization_normalizes() {
    let q: Poly = serde_json::from_str(r#"{"modulus":5,"coeffs":[7,5,0,0]}"#).unwrap();
    assert_eq!(q.coefficients(), &[2]);
    assert_eq!(q.degree(), 0);

    let empty: Poly = serde_json::from_str(r#"{"modulus":3,"coeffs":[]}"#).unwrap();
    assert!(empty.is_zero());
}

#[test]
fn poly_rejects_bad_modulus() {
    assert!(serde_json::from_str::<Poly>(r#"{"modulus":0,"coeffs":[1]}"#).is_err());
    assert!(serde_json::from_str::<Poly>(r#"{"modulus":9,"coeffs":[1]}"#).is_err());
}

#[test]
fn irreducibility_survives_roundtrip() {
    let f = Poly::new(&[1, 1, 0, 0, 1], Modulus::new(2).unwrap());
    let g: Poly = serde_json::from_str(&serde_json::to_string(&f).unwrap()).unwrap();
    assert!(g.is_irreducible().unwrap());
}
