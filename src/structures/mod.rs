pub mod modulus;
pub mod poly;
pub mod search;
