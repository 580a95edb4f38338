//! Union-find client. Read `N` and a stream of pairs, and connect every pair that is
//! not connected yet.
use definitions::Strategy;
use percolation::UnionFind;
use log::*;
use std::io::{Read, Write};

/// Parsed input: the number of elements and the pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairs {
    pub size: usize,
    pub pairs: Vec<(usize, usize)>,
}

fn invalid_data(msg: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, msg)
}

pub fn parse_pairs<R: Read>(mut rdr: R) -> std::io::Result<Pairs> {
    let mut input = String::new();
    rdr.read_to_string(&mut input)?;
    let numbers = input
        .split_whitespace()
        .map(|x| {
            x.parse::<usize>()
                .map_err(|why| invalid_data(format!("{}:{}", x, why)))
        })
        .collect::<std::io::Result<Vec<_>>>()?;
    let (&size, rest) = numbers
        .split_first()
        .ok_or_else(|| invalid_data("empty input".to_string()))?;
    if rest.len() % 2 == 1 {
        let last = rest[rest.len() - 1];
        return Err(invalid_data(format!("{} is left unpaired", last)));
    }
    let pairs: Vec<_> = rest.chunks_exact(2).map(|w| (w[0], w[1])).collect();
    if let Some(&(p, q)) = pairs.iter().find(|&&(p, q)| size <= p || size <= q) {
        return Err(invalid_data(format!("({}, {}) is out of 0..{}", p, q, size)));
    }
    debug!("PAIRS\t{}\t{}", size, pairs.len());
    Ok(Pairs { size, pairs })
}

/// Union every pair not yet connected and print it. Return the number of components.
pub fn replay<W: Write>(
    strategy: Strategy,
    input: &Pairs,
    wtr: &mut W,
) -> std::io::Result<usize> {
    let start = std::time::Instant::now();
    let mut uf = percolation::find_union::build(strategy, input.size);
    for &(p, q) in input.pairs.iter() {
        if uf.connected(p, q) {
            continue;
        }
        uf.union(p, q);
        writeln!(wtr, "{} {}", p, q)?;
    }
    let elapsed = (std::time::Instant::now() - start).as_secs_f64();
    writeln!(wtr, "{} # components: {} [{:.6}]", strategy, uf.count(), elapsed)?;
    Ok(uf.count())
}
