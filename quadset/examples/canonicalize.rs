//! Build a dataset from a producer task,
//! and write its canonical form to the standard output,
//! using the [RDFC-1.0] canonicalization algorithm.
//!
//! The dataset is a ring of blank nodes, whose size is given as the first argument
//! (5 by default), followed by the same ring again, so that duplicates are dropped.
//!
//! Parameters of the RDFC-1.0 can be provided via the following environment variables:
//! * QUADSET_RDFC10_DEPTH_FACTOR
//! * QUADSET_RDFC10_PERMUTATION_LIMIT
//! * QUADSET_RDFC10_HASH (`sha256` or `sha384`)
//!
//! [RDFC-1.0]: https://www.w3.org/TR/rdf-canon/

use std::env::{args, var, VarError::*};
use std::convert::Infallible;
use std::error::Error;
use std::str::FromStr;

use quadset::c14n::hash::{Sha256, Sha384};
use quadset::c14n::rdfc10::{DEFAULT_DEPTH_FACTOR, DEFAULT_PERMUTATION_LIMIT};
use quadset::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let size: usize = match args().nth(1) {
        Some(txt) => txt.parse()?,
        None => 5,
    };
    let depth_factor = env_or("QUADSET_RDFC10_DEPTH_FACTOR", DEFAULT_DEPTH_FACTOR)?;
    let permutation_limit = env_or("QUADSET_RDFC10_PERMUTATION_LIMIT", DEFAULT_PERMUTATION_LIMIT)?;

    let (sender, receiver) = channel::<SimpleQuad, Infallible>(16);
    let producer = tokio::spawn(async move {
        let p = SimpleTerm::new_iri("http://example.org/next");
        let node = |i: usize| SimpleTerm::new_bnode(format!("n{}", i % size));
        for i in (0..size).chain(0..size) {
            let quad = ([node(i), p.clone(), node(i + 1)], None);
            if sender.push(quad).await.is_err() {
                break;
            }
        }
        sender.end();
    });
    let mut dataset = Dataset::new();
    dataset.import(receiver).await?;
    producer.await?;

    let canonical = match var("QUADSET_RDFC10_HASH").as_deref() {
        Ok("sha384") => dataset.to_canonical_with(
            &Rdfc10::<Sha384>::with_hash()
                .with_depth_factor(depth_factor)
                .with_permutation_limit(permutation_limit),
        )?,
        Ok("sha256") | Err(NotPresent) => dataset.to_canonical_with(
            &Rdfc10::<Sha256>::new()
                .with_depth_factor(depth_factor)
                .with_permutation_limit(permutation_limit),
        )?,
        Ok(other) => return Err(format!("unsupported hash function {other:?}").into()),
        Err(other) => return Err(other.clone().into()),
    };
    print!("{canonical}");
    Ok(())
}

fn env_or<T>(name: &str, default: T) -> Result<T, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Error + 'static,
{
    match var(name) {
        Ok(txt) => Ok(txt.parse()?),
        Err(NotPresent) => Ok(default),
        Err(other) => Err(other.into()),
    }
}
